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
#![warn(future_incompatible, nonstandard_style, unused)]
#![warn(clippy::unwrap_used)]

//! Field validation for loosely typed sizing input.
//!
//! Callers hand us mappings where a number may arrive as a JSON number or as
//! a string (`"1.5"`). The validators here coerce those into Rust numbers and
//! report failures against a dotted field path (`request.memory`).

pub use self::numeric::Numeric;
pub use self::required::required;
pub use self::valid_integer::valid_integer;
pub use self::valid_number::valid_number;

mod numeric;
mod required;
mod valid_integer;
mod valid_number;

pub trait ValidatedField<T>
where
    Self: Sized,
{
    fn validate(
        input: Option<T>,
        field_name: &str,
        parent_name: Option<&str>,
    ) -> Result<Self, ValidationError>;

    /// Default implementation returns immediately when input is `None`.
    /// Otherwise, calls `Self::validate`.
    fn validate_optional(
        input: Option<T>,
        field_name: &str,
        parent_name: Option<&str>,
    ) -> Result<Option<Self>, ValidationError> {
        if input.is_none() {
            return Ok(None);
        }

        Ok(Some(Self::validate(input, field_name, parent_name)?))
    }
}

pub fn field_name(field_name: &str, parent_name: Option<&str>) -> String {
    match parent_name {
        None => field_name.to_string(),
        Some(parent_name) => format!("{parent_name}.{field_name}"),
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field = {field}; Required")]
    Required { field: String },
    #[error("Field = {field}; Not a number: '{value}'")]
    NotANumber { field: String, value: String },
    #[error("Field = {field}; Not an integer: '{value}'")]
    NotAnInteger { field: String, value: String },
    #[error("Field = {field}; Not finite: '{value}'")]
    NotFinite { field: String, value: String },
}

impl ValidationError {
    pub fn get_field(&self) -> &str {
        match self {
            Self::Required { field }
            | Self::NotANumber { field, .. }
            | Self::NotAnInteger { field, .. }
            | Self::NotFinite { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_with_parent() {
        assert_eq!(field_name("memory", Some("request")), "request.memory");
        assert_eq!(field_name("memory", None), "memory");
    }

    #[test]
    fn test_get_field() {
        let err = ValidationError::NotANumber {
            field: "request.disk".into(),
            value: "big".into(),
        };
        assert_eq!(err.get_field(), "request.disk");
        assert_eq!(
            err.to_string(),
            "Field = request.disk; Not a number: 'big'"
        );
    }
}
