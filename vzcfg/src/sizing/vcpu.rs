/* -------------------------------------------------------------------------- *\
 *                |   █████╗ ██╗   ██╗██████╗  █████╗ ███████╗ |              *
 *                |  ██╔══██╗██║   ██║██╔══██╗██╔══██╗██╔════╝ |              *
 *                |  ███████║██║   ██║██████╔╝███████║█████╗   |              *
 *                |  ██╔══██║██║   ██║██╔══██╗██╔══██║██╔══╝   |              *
 *                |  ██║  ██║╚██████╔╝██║  ██║██║  ██║███████╗ |              *
 *                |  ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝ |              *
 *                +--------------------------------------------+              *
 *                                                                            *
 *                         Distributed Systems Runtime                        *
 * -------------------------------------------------------------------------- *
 * Copyright 2022 - 2024, the aurae contributors                              *
 * SPDX-License-Identifier: Apache-2.0                                        *
\* -------------------------------------------------------------------------- */

use std::fmt::{Display, Formatter};
use std::ops::Deref;
use validation::{Numeric, ValidatedField, ValidationError};

/// Number of vcpus.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct VcpuCount(i64);

impl VcpuCount {
    pub fn new(count: i64) -> Self {
        Self(count)
    }

    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl ValidatedField<Numeric> for VcpuCount {
    fn validate(
        input: Option<Numeric>,
        field_name: &str,
        parent_name: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let input = validation::required(input, field_name, parent_name)?;

        Ok(Self(validation::valid_integer(input, field_name, parent_name)?))
    }
}

impl Deref for VcpuCount {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for VcpuCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Usage limit of a single vcpu, in percent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct VcpuLimit(f64);

impl VcpuLimit {
    pub fn new(percent: f64) -> Self {
        Self(percent)
    }

    pub fn into_inner(self) -> f64 {
        self.0
    }

    /// Limit across all `count` vcpus.
    pub fn total(&self, count: VcpuCount) -> f64 {
        self.0 * count.0 as f64
    }
}

impl ValidatedField<Numeric> for VcpuLimit {
    fn validate(
        input: Option<Numeric>,
        field_name: &str,
        parent_name: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let input = validation::required(input, field_name, parent_name)?;

        Ok(Self(validation::valid_number(input, field_name, parent_name)?))
    }
}

impl Deref for VcpuLimit {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for VcpuLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test_case(50.0, 1, 50.0; "single vcpu")]
    #[test_case(50.0, 2, 100.0; "two vcpus")]
    #[test_case(12.5, 8, 100.0; "fractional percent")]
    #[test_case(50.0, 0, 0.0; "no vcpus")]
    #[test]
    fn test_total(percent: f64, count: i64, expected: f64) {
        let total = VcpuLimit::new(percent).total(VcpuCount::new(count));
        assert_eq!(total, expected);
    }

    #[test]
    fn test_count_must_be_whole() {
        assert!(matches!(
            VcpuCount::validate(Some(Numeric::Float(1.5)), "vcpu", None),
            Err(ValidationError::NotAnInteger { .. })
        ));
        assert_eq!(
            VcpuCount::validate(Some("4".into()), "vcpu", None).unwrap(),
            VcpuCount::new(4)
        );
    }

    #[test]
    fn test_limit_validation() {
        assert_eq!(
            VcpuLimit::validate(Some(Numeric::Integer(75)), "vcpulimit", None)
                .unwrap(),
            VcpuLimit::new(75.0)
        );
        assert!(VcpuLimit::validate(Some("half".into()), "vcpulimit", None)
            .is_err());
    }
}
