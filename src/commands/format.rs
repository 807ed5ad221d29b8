/// Format command: prints a millisecond count as a duration string.
use ms::{format_duration, Options};

pub fn run_format(args: crate::cli::FormatArgs) -> anyhow::Result<()> {
    if !args.millis.is_finite() {
        anyhow::bail!("MILLIS must be a finite number, got {}", args.millis);
    }

    let options = args.style.apply(Options::default());
    println!("{}", format_duration(args.millis, &options));
    Ok(())
}
