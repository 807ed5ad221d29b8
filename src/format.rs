//! Formatting of millisecond counts into short (`"3d"`) or long (`"3 days"`) strings.

use crate::options::Options;
use crate::unit::DurationUnit;

/// Render a number the way duration strings expect it.
///
/// Integral values carry no fractional part (`1`, not `1.0`), negative zero is `0`, and
/// magnitudes outside `[1e-6, 1e21)` switch to exponent notation with an explicit sign
/// (`1e+21`, `1.5e-7`).
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{value}");
    }

    let sci = format!("{value:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

/// Round half toward positive infinity, so `-2.5` becomes `-2` and `2.5` becomes `3`.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Express `ms` in `unit`, rounded to `decimal` places.
fn round_to(ms: f64, unit: DurationUnit, decimal: u32) -> f64 {
    let base = 10f64.powi(decimal as i32);
    round_half_up(ms / unit.millis() * base) / base
}

/// Largest formattable unit not exceeding `|ms|`, or `None` below one second.
fn select_unit(ms: f64) -> Option<DurationUnit> {
    let abs = ms.abs();
    DurationUnit::FORMATTABLE
        .into_iter()
        .find(|unit| abs >= unit.millis())
}

/// Compact style: `"1d"`, `"1.5h"`, `"-3s"`.
///
/// Below one second the raw input is printed with an `ms` suffix and is not rounded.
pub fn format_short(ms: f64, decimal: u32) -> String {
    match select_unit(ms) {
        Some(unit) => format!(
            "{}{}",
            display_number(round_to(ms, unit, decimal)),
            unit.abbreviation()
        ),
        None => format!("{}ms", display_number(ms)),
    }
}

/// Verbose style: `"1 day"`, `"1.5 minutes"`, `"500 ms"`.
///
/// The unit name is pluralised once `|ms|` reaches 1.5 of that unit. Below one second the
/// raw input is printed as `"<ms> ms"`, unrounded and always singular.
pub fn format_long(ms: f64, decimal: u32) -> String {
    match select_unit(ms) {
        Some(unit) => {
            let plural = ms.abs() >= unit.millis() * 1.5;
            format!(
                "{} {}{}",
                display_number(round_to(ms, unit, decimal)),
                unit.name(),
                if plural { "s" } else { "" }
            )
        }
        None => format!("{} ms", display_number(ms)),
    }
}

/// Format `ms` using the style and precision from `options`.
pub fn format_duration(ms: f64, options: &Options) -> String {
    let decimal = options.precision();
    if options.long {
        format_long(ms, decimal)
    } else {
        format_short(ms, decimal)
    }
}
