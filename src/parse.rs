//! Parsing of single-unit duration strings such as `"2 days"`, `"10h"` or `"-.5s"`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::unit::DurationUnit;

/// Inputs longer than this are rejected before matching.
pub const MAX_INPUT_LEN: usize = 100;

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(-?[0-9]*\.?[0-9]+) *(milliseconds?|msecs?|ms|seconds?|secs?|s|minutes?|mins?|m|hours?|hrs?|h|days?|d|weeks?|w|years?|yrs?|y)?$",
    )
    .expect("duration grammar is a valid regex")
});

/// Parse `input` into a number of milliseconds.
///
/// A bare number is read as milliseconds. Returns `None` when the string is longer than
/// [`MAX_INPUT_LEN`] characters or does not match the grammar in its entirety; this is
/// the expected outcome for malformed input, not an error.
pub fn parse_duration(input: &str) -> Option<f64> {
    if input.chars().count() > MAX_INPUT_LEN {
        return None;
    }

    let caps = DURATION_RE.captures(input)?;
    let magnitude: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = match caps.get(2) {
        Some(token) => DurationUnit::from_token(token.as_str())?,
        None => DurationUnit::Millisecond,
    };

    Some(magnitude * unit.millis())
}
