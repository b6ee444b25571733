//! Reasons a parser reports absence
//!
//! Parsers only ever return `None`; the reason is classified here so it can
//! be logged, and so custom reducers can reuse the exactly-one policy.

use thiserror::Error;

/// Why a parser produced no value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Absence {
    #[error("Parameter is missing")]
    KeyAbsent,

    #[error("Parameter occurs {count} times, expected exactly one")]
    MultiplicityViolation { count: usize },

    #[error("Cannot convert {value:?} to {target}")]
    ConversionFailure { value: String, target: &'static str },

    #[error("{value:?} is not one of the accepted values")]
    EnumMismatch { value: String },

    #[error("Query string could not be tokenized")]
    TokenizeFailure,
}

/// The exactly-one policy shared by `string`, `int`, `number` and
/// `enumeration`.
///
/// # Examples
/// ```
/// use urlq_core::{check_single, Absence};
///
/// assert_eq!(check_single(&["2".to_string()]), Ok("2"));
/// assert_eq!(check_single(&[]), Err(Absence::KeyAbsent));
/// ```
pub fn check_single(values: &[String]) -> Result<&str, Absence> {
    match values {
        [] => Err(Absence::KeyAbsent),
        [value] => Ok(value.as_str()),
        _ => Err(Absence::MultiplicityViolation {
            count: values.len(),
        }),
    }
}
