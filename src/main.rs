mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(args) => commands::parse::run_parse(args)?,
        Commands::Format(args) => commands::format::run_format(args)?,
        Commands::Eval(args) => commands::eval::run_eval(args)?,
    }

    Ok(())
}
