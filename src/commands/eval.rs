/// Eval command: runs an arbitrary JSON value through the combined converter.
///
/// Strings are parsed, numbers are formatted, everything else is rejected with the
/// value echoed back in the error.
use anyhow::Context;
use owo_colors::{OwoColorize, Stream::Stderr};

use ms::{ms_json, Options};

pub fn run_eval(args: crate::cli::EvalArgs) -> anyhow::Result<()> {
    let value: serde_json::Value = serde_json::from_str(&args.value)
        .with_context(|| format!("JSON is not valid: {}", args.value))?;

    let base = match args.options.as_deref() {
        Some(json) => Options::from_json(json)?,
        None => Options::default(),
    };
    let options = args.style.apply(base);

    match ms_json(&value, &options)? {
        Some(output) => println!("{output}"),
        None => {
            eprintln!(
                "{}",
                format!("Not a recognised duration: {value}")
                    .if_supports_color(Stderr, |t| t.yellow())
            );
            std::process::exit(1);
        }
    }

    Ok(())
}
