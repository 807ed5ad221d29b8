/// Integration tests: the combined `ms` entry point and its two halves.
///
/// Covers parsing of every unit family, both formatting styles, decimal clamping,
/// and the error path for values that are neither non-empty strings nor finite numbers.
/// The parse-absent path is checked separately from the error path: a string that is not
/// a duration yields `Ok(None)`, never an error.

use ms::{format_duration, ms, ms_json, parse_duration, MsError, Options, Output};
use serde_json::json;

fn parsed(input: &str) -> Option<f64> {
    ms(input, &Options::default())
        .expect("non-empty strings never error")
        .map(|output| output.as_millis().expect("strings parse to millis"))
}

fn formatted(millis: f64, options: Options) -> String {
    match ms(millis, &options).expect("finite numbers never error") {
        Some(Output::Formatted(text)) => text,
        other => panic!("expected a formatted string, got {other:?}"),
    }
}

fn error_message(value: serde_json::Value) -> String {
    match ms_json(&value, &Options::default()) {
        Err(MsError::InvalidInput(serialized)) => serialized,
        other => panic!("expected InvalidInput for {value}, got {other:?}"),
    }
}

// ── Parsing ────────────────────────────────────────────────────────────────

#[test]
fn test_parse_known_values() {
    assert_eq!(parsed("100"), Some(100.0), "bare number defaults to milliseconds");
    assert_eq!(parsed("1m"), Some(60_000.0));
    assert_eq!(parsed("1h"), Some(3_600_000.0));
    assert_eq!(parsed("2 days"), Some(172_800_000.0));
    assert_eq!(parsed("1.5h"), Some(5_400_000.0));
    assert_eq!(parsed("1y"), Some(31_557_600_000.0));
    assert_eq!(parsed("-3 weeks"), Some(-1_814_400_000.0));
}

#[test]
fn test_parse_absent_results() {
    assert_eq!(parsed("foo"), None);
    assert_eq!(parsed("  "), None);
    assert_eq!(parsed("1d 2h"), None, "combined units are not accepted");
    assert_eq!(parse_duration(""), None, "the parser itself treats empty as absent");

    let long_input = "1".repeat(101);
    assert_eq!(parsed(&long_input), None, "inputs over 100 characters are rejected");
}

// ── Formatting ─────────────────────────────────────────────────────────────

#[test]
fn test_format_short_and_long() {
    let long = Options::new().with_long(true);

    assert_eq!(formatted(60_000.0, Options::default()), "1m");
    assert_eq!(formatted(60_000.0, long), "1 minute");
    assert_eq!(formatted(-3_000.0, Options::default()), "-3s");
    assert_eq!(formatted(259_200_000.0, long), "3 days");
}

#[test]
fn test_format_plural_boundary() {
    let long = Options::new().with_long(true).with_decimal(1);
    assert_eq!(formatted(90_000.0, long), "1.5 minutes");
    assert_eq!(formatted(89_000.0, long), "1.5 minute", "below 1.5x stays singular");

    // Without decimals the 1.5 rounds up but the plural rule still looks at the raw value.
    assert_eq!(formatted(90_000.0, Options::new().with_long(true)), "2 minutes");
}

#[test]
fn test_format_millisecond_fallback() {
    assert_eq!(formatted(500.0, Options::default()), "500ms");
    assert_eq!(formatted(500.0, Options::new().with_long(true)), "500 ms");
    assert_eq!(
        formatted(12.3456, Options::new().with_decimal(1)),
        "12.3456ms",
        "the millisecond case is never rounded"
    );
}

#[test]
fn test_format_decimal_is_clamped() {
    assert_eq!(formatted(1_234.0, Options::new().with_decimal(2)), "1.23s");
    assert_eq!(formatted(1_234.0, Options::new().with_decimal(3)), "1.234s");
    assert_eq!(
        formatted(1_234.0, Options::new().with_decimal(5)),
        formatted(1_234.0, Options::new().with_decimal(3)),
        "decimal above 3 behaves as 3"
    );
    assert_eq!(formatted(1_234.5678, Options::new().with_decimal(5)), "1.235s");
}

// ── Round trip ─────────────────────────────────────────────────────────────

/// Formatting a whole number of each unit in short style and parsing it back yields the
/// same millisecond count.
#[test]
fn test_short_form_round_trip() {
    let units = [1_000.0, 60_000.0, 3_600_000.0, 86_400_000.0, 604_800_000.0, 31_557_600_000.0];
    let options = Options::new().with_decimal(3);

    for unit in units {
        for n in [1.0, 2.0, 5.0, 42.0, -7.0] {
            let millis = n * unit;
            let text = format_duration(millis, &options);
            let back = parse_duration(&text)
                .unwrap_or_else(|| panic!("{text:?} should parse back"));
            assert!(
                (back - millis).abs() <= millis.abs() * 1e-9,
                "round trip of {millis} via {text:?} gave {back}"
            );
        }
    }
}

// ── Invalid input ──────────────────────────────────────────────────────────

#[test]
fn test_invalid_input_embeds_serialized_value() {
    assert_eq!(error_message(json!(null)), "null");
    assert_eq!(error_message(json!({})), "{}");
    assert_eq!(error_message(json!("")), r#""""#);
    assert_eq!(error_message(json!([1, "2"])), r#"[1,"2"]"#);

    for bad in [f64::NAN, f64::INFINITY] {
        let err = ms(bad, &Options::default()).expect_err("non-finite numbers are rejected");
        assert_eq!(
            err.to_string(),
            "val is not a non-empty string or a valid number. val=null"
        );
    }
}
