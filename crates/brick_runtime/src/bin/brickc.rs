//! BrickLang compiler entry point.

use std::io::{self, Write};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::{LevelFilter, debug, info};

use brick_runtime::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Parsed arguments");

    match brick_runtime::run(&args) {
        Ok(outcome) => {
            let _ = io::stdout().write_all(outcome.stdout.as_bytes());
            let _ = io::stderr().write_all(outcome.stderr.as_bytes());
            if outcome.success {
                info!("Completed successfully");
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}
