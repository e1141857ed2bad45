//! Command-line argument definitions for `brickc`.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Command-line arguments for the BrickLang compiler
#[derive(Parser, Debug)]
#[command(
    name = "brickc",
    author,
    version,
    about,
    long_about = None,
    disable_version_flag = true
)]
pub struct Args {
    /// Path to the input .brick file
    #[arg(help = "Path to the input file")]
    pub input: PathBuf,

    /// Show phase headers, a summary and statistics
    #[arg(long)]
    pub verbose: bool,

    /// Print the symbol table as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the syntax tree after the report
    #[arg(long)]
    pub debug: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: (),
}
