//! Compile pipeline, runtime loader, and CLI for BrickLang.
//!
//! This crate provides:
//! - [`compile_source`] / [`compile_file`] - Parse, populate and validate in
//!   one call
//! - [`GameLoader`] - Loads a game and applies [`RuntimeDefaults`]
//! - [`run`] - The `brickc` command, rendered to strings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fmt::Write;

use brick_foundation::{Error, Result};
use brick_language::{Node, print_tree};

pub mod args;
pub mod compile;
pub mod loader;

pub use args::Args;
pub use compile::{Compilation, CompilerConfig, Phase, compile_file, compile_source};
pub use loader::{GameLoader, RuntimeDefaults};

const RULE: &str = "==========================================";

/// What `brickc` writes, split by stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// True when the game compiled.
    pub success: bool,
    /// Text for standard output.
    pub stdout: String,
    /// Text for standard error.
    pub stderr: String,
}

/// Runs `brickc` for the given arguments.
///
/// # Errors
/// Returns an I/O error if the input cannot be read, or a serialization error
/// if JSON output fails.
pub fn run(args: &Args) -> Result<Outcome> {
    let config = CompilerConfig::new().with_keep_ast(args.debug);
    let compilation = compile_file(&args.input, &config)?;
    render(args, &compilation)
}

/// Renders a finished compilation the way `brickc` prints it.
///
/// # Errors
/// Returns a serialization error if JSON output fails.
pub fn render(args: &Args, compilation: &Compilation) -> Result<Outcome> {
    let mut out = Outcome::default();

    if args.verbose {
        let _ = writeln!(
            out.stdout,
            "brickc v{} - analyzing: {}",
            env!("CARGO_PKG_VERSION"),
            args.input.display()
        );
        let _ = writeln!(out.stdout, "{RULE}");
        for phase in Phase::ALL.into_iter().filter(|p| *p <= compilation.phase) {
            let _ = writeln!(out.stdout, "{}", phase.header());
        }
    }

    let Some(model) = &compilation.model else {
        let _ = writeln!(out.stderr, "\nERRORS FOUND:");
        let _ = writeln!(out.stderr, "=============");
        out.stderr.push_str(&compilation.diagnostics.dump());
        let _ = writeln!(out.stderr);
        out.stderr.push_str(&compilation.diagnostics.summary());
        let _ = writeln!(
            out.stderr,
            "{}",
            Error::compilation_failed(compilation.diagnostics.len())
        );
        return Ok(out);
    };

    out.success = true;
    if args.verbose {
        let _ = writeln!(out.stdout, "4. Generating output...\n");
    }
    let _ = writeln!(
        out.stdout,
        "OK: game '{}' compiled successfully",
        model.game_name()
    );

    if args.json {
        if args.verbose {
            let _ = writeln!(out.stdout, "\nSYMBOL TABLE (JSON):\n{RULE}");
        }
        let _ = writeln!(out.stdout, "{}", model.to_json()?);
    } else {
        let _ = writeln!(out.stdout);
        let _ = write!(out.stdout, "{model}");
    }

    if args.verbose {
        let _ = writeln!(out.stdout, "\nSUMMARY:\n{RULE}\n{}", model.summary());
        let _ = writeln!(out.stdout, "\nSTATISTICS:\n{RULE}");
        let _ = writeln!(out.stdout, "Entities defined: {}", model.entity_count());
        let _ = writeln!(out.stdout, "Controls mapped: {}", model.control_count());
        let _ = writeln!(out.stdout, "Rules defined: {}", model.rule_count());
    }

    if let Some(program) = compilation.ast.as_ref().filter(|_| args.debug) {
        let _ = writeln!(out.stdout, "\nSYNTAX TREE (DEBUG):\n{RULE}");
        out.stdout.push_str(&print_tree(Node::Program(program)));
    }

    if args.verbose {
        let _ = writeln!(out.stdout, "\nCompilation finished successfully.");
    }
    Ok(out)
}
