use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ms", version, about = "Convert between duration strings and milliseconds")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a duration string such as "2 days" or "1.5h" into milliseconds
    Parse(ParseArgs),
    /// Format a millisecond count as "1m" or "1 minute"
    Format(FormatArgs),
    /// Convert a JSON value: strings are parsed, numbers are formatted
    Eval(EvalArgs),
}

#[derive(Args)]
pub struct ParseArgs {
    /// Duration string to parse
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(Args)]
pub struct StyleArgs {
    /// Use verbose unit names ("1 minute" instead of "1m")
    #[arg(long, short = 'l')]
    pub long: bool,

    /// Decimal places to keep (values above 3 are treated as 3)
    #[arg(long, short = 'd', value_name = "N", allow_negative_numbers = true)]
    pub decimal: Option<i32>,
}

#[derive(Args)]
pub struct FormatArgs {
    /// Millisecond count to format
    #[arg(value_name = "MILLIS", allow_negative_numbers = true)]
    pub millis: f64,

    #[command(flatten)]
    pub style: StyleArgs,
}

#[derive(Args)]
pub struct EvalArgs {
    /// JSON value to convert, e.g. '"2 days"' or 60000
    #[arg(value_name = "JSON", allow_hyphen_values = true)]
    pub value: String,

    /// Options object, e.g. '{"long": true, "decimal": 2}'. Flags take precedence.
    #[arg(long, value_name = "JSON")]
    pub options: Option<String>,

    #[command(flatten)]
    pub style: StyleArgs,
}
