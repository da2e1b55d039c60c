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
use super::{Numeric, ValidationError};

/// Coerces `value` into a finite `f64`.
///
/// Text is trimmed before parsing, so `" 1.5 "` is accepted.
pub fn valid_number(
    value: Numeric,
    field_name: &str,
    parent_name: Option<&str>,
) -> Result<f64, ValidationError> {
    let number = match &value {
        Numeric::Integer(x) => *x as f64,
        Numeric::Float(x) => *x,
        Numeric::Text(x) => x.trim().parse::<f64>().map_err(|_| {
            ValidationError::NotANumber {
                field: super::field_name(field_name, parent_name),
                value: value.to_string(),
            }
        })?,
    };

    if !number.is_finite() {
        return Err(ValidationError::NotFinite {
            field: super::field_name(field_name, parent_name),
            value: value.to_string(),
        });
    }

    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test_case(Numeric::Integer(20), 20.0; "integer")]
    #[test_case(Numeric::Float(0.5), 0.5; "float")]
    #[test_case(Numeric::Text("1.5".into()), 1.5; "text")]
    #[test_case(Numeric::Text(" 3 ".into()), 3.0; "padded text")]
    #[test_case(Numeric::Text("-2".into()), -2.0; "negative text")]
    #[test]
    fn test_valid_number_success(input: Numeric, expected: f64) {
        assert_eq!(valid_number(input, "disk", None), Ok(expected));
    }

    #[test]
    fn test_valid_number_not_a_number() {
        assert!(matches!(
            valid_number(Numeric::Text("two".into()), "memory", None),
            Err(ValidationError::NotANumber { field, value })
                if field == "memory" && value == "two"
        ));
    }

    #[test_case(Numeric::Float(f64::NAN); "nan")]
    #[test_case(Numeric::Float(f64::INFINITY); "infinity")]
    #[test_case(Numeric::Text("inf".into()); "infinity as text")]
    #[test]
    fn test_valid_number_not_finite(input: Numeric) {
        assert!(matches!(
            valid_number(input, "memory", None),
            Err(ValidationError::NotFinite { .. })
        ));
    }
}
