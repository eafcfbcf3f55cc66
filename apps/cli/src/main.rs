//! forma CLI
//!
//! Drives the demo contact form from the command line.

mod commands;
mod contact;

use clap::{Parser, Subcommand};
use forma_log::{Format, LogConfig};

/// Validate and submit the demo contact form.
#[derive(Parser, Debug)]
#[command(name = "forma", version, about)]
struct Cli {
    /// Log filter directive, e.g. `debug` or `forma_form=debug`.
    #[arg(long, env = "FORMA_LOG", global = true)]
    log_level: Option<String>,

    /// Log output format: pretty, compact or json.
    #[arg(long, env = "FORMA_LOG_FORMAT", global = true)]
    log_format: Option<Format>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the form's fields and their rules.
    Fields,
    /// Validate values and print the result per field.
    Check(commands::ValuesArgs),
    /// Fill in the form field by field and submit it.
    Submit(commands::submit::SubmitArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut log = LogConfig::from_env();
    if let Some(level) = cli.log_level {
        log.level = level;
    }
    if let Some(format) = cli.log_format {
        log.format = format;
    }
    forma_log::init(&log)?;

    match cli.command {
        Command::Fields => {
            commands::fields::run();
            Ok(())
        }
        Command::Check(args) => commands::check::run(&args),
        Command::Submit(args) => commands::submit::run(&args),
    }
}
