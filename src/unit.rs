//! Duration units and their fixed millisecond magnitudes.

use std::str::FromStr;

pub const SECOND: f64 = 1000.0;
pub const MINUTE: f64 = SECOND * 60.0;
pub const HOUR: f64 = MINUTE * 60.0;
pub const DAY: f64 = HOUR * 24.0;
pub const WEEK: f64 = DAY * 7.0;
/// Average Julian year. Not calendar-aware.
pub const YEAR: f64 = DAY * 365.25;

/// A unit recognised by the parser.
///
/// The formatter only ever selects `Day`, `Hour`, `Minute` and `Second`, falling back to
/// raw milliseconds below one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

impl DurationUnit {
    /// Units the formatter chooses from, largest first.
    pub const FORMATTABLE: [DurationUnit; 4] = [
        DurationUnit::Day,
        DurationUnit::Hour,
        DurationUnit::Minute,
        DurationUnit::Second,
    ];

    /// Number of milliseconds in one of this unit.
    pub fn millis(self) -> f64 {
        match self {
            DurationUnit::Millisecond => 1.0,
            DurationUnit::Second => SECOND,
            DurationUnit::Minute => MINUTE,
            DurationUnit::Hour => HOUR,
            DurationUnit::Day => DAY,
            DurationUnit::Week => WEEK,
            DurationUnit::Year => YEAR,
        }
    }

    /// Suffix used by the short style, e.g. `d` in `"3d"`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            DurationUnit::Millisecond => "ms",
            DurationUnit::Second => "s",
            DurationUnit::Minute => "m",
            DurationUnit::Hour => "h",
            DurationUnit::Day => "d",
            DurationUnit::Week => "w",
            DurationUnit::Year => "y",
        }
    }

    /// Singular English name used by the long style.
    pub fn name(self) -> &'static str {
        match self {
            DurationUnit::Millisecond => "millisecond",
            DurationUnit::Second => "second",
            DurationUnit::Minute => "minute",
            DurationUnit::Hour => "hour",
            DurationUnit::Day => "day",
            DurationUnit::Week => "week",
            DurationUnit::Year => "year",
        }
    }

    /// Map a unit token (any case) to its unit. Returns `None` for unknown tokens.
    pub fn from_token(token: &str) -> Option<DurationUnit> {
        let unit = match token.to_ascii_lowercase().as_str() {
            "years" | "year" | "yrs" | "yr" | "y" => DurationUnit::Year,
            "weeks" | "week" | "w" => DurationUnit::Week,
            "days" | "day" | "d" => DurationUnit::Day,
            "hours" | "hour" | "hrs" | "hr" | "h" => DurationUnit::Hour,
            "minutes" | "minute" | "mins" | "min" | "m" => DurationUnit::Minute,
            "seconds" | "second" | "secs" | "sec" | "s" => DurationUnit::Second,
            "milliseconds" | "millisecond" | "msecs" | "msec" | "ms" => DurationUnit::Millisecond,
            _ => return None,
        };
        Some(unit)
    }
}

impl FromStr for DurationUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DurationUnit::from_token(s).ok_or(())
    }
}
