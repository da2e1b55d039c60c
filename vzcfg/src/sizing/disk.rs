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

/// Filesystem size in GB.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Disk(f64);

impl Disk {
    pub fn new(gb: f64) -> Self {
        Self(gb)
    }

    pub fn into_inner(self) -> f64 {
        self.0
    }
}

impl ValidatedField<Numeric> for Disk {
    fn validate(
        input: Option<Numeric>,
        field_name: &str,
        parent_name: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let input = validation::required(input, field_name, parent_name)?;

        Ok(Self(validation::valid_number(input, field_name, parent_name)?))
    }
}

impl Deref for Disk {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Disk {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_success() {
        assert_eq!(
            Disk::validate(Some("20".into()), "disk", None).unwrap(),
            Disk::new(20.0)
        );
    }

    #[test]
    fn test_validation_failure() {
        assert!(matches!(
            Disk::validate(Some("twenty".into()), "disk", Some("request")),
            Err(ValidationError::NotANumber { field, .. })
                if field == "request.disk"
        ));
    }
}
