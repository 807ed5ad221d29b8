//! The combined entry point: parse strings, format numbers.
//!
//! [`ms`] takes an [`Input`] tagged with its kind. [`ms_json`] accepts an arbitrary JSON
//! value and rejects anything that is neither a string nor a number.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::MsError;
use crate::format::{display_number, format_duration};
use crate::options::Options;
use crate::parse::parse_duration;

/// A value to convert: a duration string to parse or a millisecond count to format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    Text(&'a str),
    Number(f64),
}

impl Input<'_> {
    /// JSON rendering used in error messages. Non-finite numbers become `null`.
    fn to_json(self) -> String {
        match self {
            Input::Text(text) => Value::from(text).to_string(),
            Input::Number(n) => Value::from(n).to_string(),
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text.as_str())
    }
}

macro_rules! number_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input<'_> {
                fn from(n: $ty) -> Self {
                    Input::Number(n as f64)
                }
            }
        )*
    };
}

number_input!(f64, f32, i32, i64, u32, u64);

/// Result of a successful conversion.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Output {
    /// Milliseconds parsed from a string.
    Millis(f64),
    /// A formatted duration string.
    Formatted(String),
}

impl Output {
    pub fn as_millis(&self) -> Option<f64> {
        match self {
            Output::Millis(ms) => Some(*ms),
            Output::Formatted(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Output::Formatted(text) => Some(text),
            Output::Millis(_) => None,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Millis(ms) => f.write_str(&display_number(*ms)),
            Output::Formatted(text) => f.write_str(text),
        }
    }
}

/// Parse a non-empty string or format a finite number.
///
/// - non-empty text: `Ok(Some(Output::Millis))`, or `Ok(None)` if it is not a duration
/// - finite number: `Ok(Some(Output::Formatted))` in the style chosen by `options`
/// - empty text or a non-finite number: [`MsError::InvalidInput`]
pub fn ms<'a>(input: impl Into<Input<'a>>, options: &Options) -> Result<Option<Output>, MsError> {
    match input.into() {
        Input::Text(text) if !text.is_empty() => Ok(parse_duration(text).map(Output::Millis)),
        Input::Number(n) if n.is_finite() => {
            Ok(Some(Output::Formatted(format_duration(n, options))))
        }
        other => Err(MsError::InvalidInput(other.to_json())),
    }
}

/// Like [`ms`], for an untyped JSON value.
///
/// Strings and numbers dispatch as in [`ms`]. `null`, booleans, arrays and objects are
/// rejected with their compact JSON form in the error.
pub fn ms_json(value: &Value, options: &Options) -> Result<Option<Output>, MsError> {
    match value {
        Value::String(text) => ms(text, options),
        Value::Number(n) => match n.as_f64() {
            Some(n) => ms(n, options),
            None => Err(MsError::InvalidInput(value.to_string())),
        },
        _ => Err(MsError::InvalidInput(value.to_string())),
    }
}
