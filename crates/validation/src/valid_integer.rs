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

/// Coerces `value` into an `i64`.
///
/// Floats are accepted only when they carry no fractional part. Text must be
/// an integer literal; `"2.0"` is rejected.
pub fn valid_integer(
    value: Numeric,
    field_name: &str,
    parent_name: Option<&str>,
) -> Result<i64, ValidationError> {
    let not_an_integer = |value: &Numeric| ValidationError::NotAnInteger {
        field: super::field_name(field_name, parent_name),
        value: value.to_string(),
    };

    match &value {
        Numeric::Integer(x) => Ok(*x),
        Numeric::Float(_) => {
            let number = super::valid_number(
                value.clone(),
                field_name,
                parent_name,
            )?;
            if number.fract() != 0.0
                || number < i64::MIN as f64
                || number >= i64::MAX as f64
            {
                return Err(not_an_integer(&value));
            }
            Ok(number as i64)
        }
        Numeric::Text(x) => {
            if let Ok(number) = x.trim().parse::<i64>() {
                return Ok(number);
            }
            // Distinguish "2.5" from "two" so the caller sees the right kind.
            match super::valid_number(value.clone(), field_name, parent_name)
            {
                Ok(_) => Err(not_an_integer(&value)),
                Err(e) => Err(e),
            }
        }
    }
}
