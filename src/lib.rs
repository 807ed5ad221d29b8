/// ms library crate: conversion between duration strings and milliseconds.
///
/// Modules are public so that `tests/` integration tests and the `ms` binary can reach
/// them via `use ms::parse::*` and friends. The common entry points are re-exported here.
pub mod convert;
pub mod error;
pub mod format;
pub mod options;
pub mod parse;
pub mod unit;

pub use convert::{ms, ms_json, Input, Output};
pub use error::MsError;
pub use format::{display_number, format_duration, format_long, format_short};
pub use options::Options;
pub use parse::parse_duration;
pub use unit::DurationUnit;
