//! Formatting options: verbosity and decimal precision.

use serde::{Deserialize, Serialize};

use crate::error::MsError;

/// Upper bound on the number of decimal places a formatted value carries.
pub const MAX_DECIMAL: u32 = 3;

/// Deserializes from a JSON object such as `{"long": true, "decimal": 2}`. Missing keys
/// take their defaults and unknown keys are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
    /// Verbose output (`"1 minute"`) instead of compact (`"1m"`).
    pub long: bool,
    /// Requested decimal places. Clamped to `0..=MAX_DECIMAL` by [`Options::precision`].
    pub decimal: i32,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_long(mut self, long: bool) -> Self {
        self.long = long;
        self
    }

    pub fn with_decimal(mut self, decimal: i32) -> Self {
        self.decimal = decimal;
        self
    }

    /// Decimal places actually applied when formatting.
    pub fn precision(&self) -> u32 {
        self.decimal.clamp(0, MAX_DECIMAL as i32) as u32
    }

    /// Read options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, MsError> {
        serde_json::from_str(json).map_err(MsError::InvalidOptions)
    }
}
