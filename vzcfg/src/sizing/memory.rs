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

const MB_PER_GIB: f64 = 1024.0;

/// Memory grant in MB.
///
/// Requests name memory in GiB; validation converts to MB.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Memory(f64);

impl Memory {
    pub fn from_mb(mb: f64) -> Self {
        Self(mb)
    }

    pub fn from_gib(gib: f64) -> Self {
        Self(gib * MB_PER_GIB)
    }

    pub fn into_inner(self) -> f64 {
        self.0
    }
}

impl ValidatedField<Numeric> for Memory {
    fn validate(
        input: Option<Numeric>,
        field_name: &str,
        parent_name: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let input = validation::required(input, field_name, parent_name)?;
        let gib = validation::valid_number(input, field_name, parent_name)?;

        let memory = Self::from_gib(gib);
        if !memory.0.is_finite() {
            return Err(ValidationError::NotFinite {
                field: validation::field_name(field_name, parent_name),
                value: gib.to_string(),
            });
        }

        Ok(memory)
    }
}

impl Deref for Memory {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Memory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test_case(Numeric::Float(1.0), 1024.0; "one gib")]
    #[test_case(Numeric::Float(0.25), 256.0; "quarter gib")]
    #[test_case(Numeric::Text("2".into()), 2048.0; "text")]
    #[test_case(Numeric::Integer(-1), -1024.0; "negative is not rejected here")]
    #[test]
    fn test_validation_converts_gib_to_mb(input: Numeric, expected_mb: f64) {
        let memory = Memory::validate(Some(input), "memory", None).unwrap();
        assert_eq!(*memory, expected_mb);
    }

    #[test]
    fn test_validation_failure() {
        assert!(matches!(
            Memory::validate(Some("1G".into()), "memory", None),
            Err(ValidationError::NotANumber { .. })
        ));

        assert!(matches!(
            Memory::validate(None, "memory", None),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_overflow_to_mb() {
        assert!(matches!(
            Memory::validate(
                Some(Numeric::Float(1e308)),
                "memory",
                Some("request")
            ),
            Err(ValidationError::NotFinite { field, .. })
                if field == "request.memory"
        ));
    }
}
