/// Parse command: prints the millisecond count for a duration string.
use owo_colors::{OwoColorize, Stream::Stderr};

use ms::{display_number, parse_duration};

pub fn run_parse(args: crate::cli::ParseArgs) -> anyhow::Result<()> {
    match parse_duration(&args.value) {
        Some(millis) => {
            println!("{}", display_number(millis));
            Ok(())
        }
        None => {
            eprintln!(
                "{}",
                format!("Not a recognised duration: {:?}", args.value)
                    .if_supports_color(Stderr, |t| t.yellow())
            );
            std::process::exit(1);
        }
    }
}
