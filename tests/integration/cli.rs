//! `brickc` integration tests
//!
//! Tests argument parsing and the rendered output of whole runs.

use std::fs;
use std::path::Path;

use brick_runtime::{Args, run};
use clap::Parser;

const SNAKE: &str = include_str!("../../games/snake.brick");

fn args(path: &Path, flags: &[&str]) -> Args {
    let mut argv: Vec<String> = vec!["brickc".to_string()];
    argv.extend(flags.iter().map(ToString::to_string));
    argv.push(path.display().to_string());
    Args::parse_from(argv)
}

#[test]
fn successful_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snake.brick");
    fs::write(&path, SNAKE).unwrap();

    let outcome = run(&args(&path, &[])).unwrap();
    assert!(outcome.success);
    assert!(outcome.stderr.is_empty());
    assert!(outcome.stdout.starts_with("OK: game 'Snake' compiled successfully\n"));
    assert!(outcome.stdout.contains("Entities (4):\n"));
    assert!(outcome.stdout.contains("  space -> pause\n"));
}

#[test]
fn json_run_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snake.brick");
    fs::write(&path, SNAKE).unwrap();

    let outcome = run(&args(&path, &["--json"])).unwrap();
    let (_, json) = outcome.stdout.split_once('\n').unwrap();
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["settings"]["speed"], 10);
    assert_eq!(value["rules"].as_array().unwrap().len(), 3);
}

#[test]
fn verbose_debug_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snake.brick");
    fs::write(&path, SNAKE).unwrap();

    let outcome = run(&args(&path, &["--verbose", "--debug"])).unwrap();
    let stdout = &outcome.stdout;
    assert!(stdout.contains("3. Validating..."));
    assert!(stdout.contains("game 'Snake' has 4 entities, 5 controls and 3 rules"));
    assert!(stdout.contains("Rules defined: 3"));
    assert!(stdout.contains("SYNTAX TREE (DEBUG):"));
    assert!(stdout.contains("      Collide(head, food -> grow)\n"));
    assert!(stdout.ends_with("Compilation finished successfully.\n"));
}

#[test]
fn failing_run_reports_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.brick");
    fs::write(&path, "game Bad {\n speed: fast;\n}").unwrap();

    let outcome = run(&args(&path, &[])).unwrap();
    assert!(!outcome.success);
    assert!(outcome.stdout.is_empty());
    assert!(outcome.stderr.contains("ERRORS FOUND:"));
    assert!(outcome.stderr.contains("bad.brick:2:9: syntax error: expected integer for speed"));
    assert!(outcome.stderr.contains("1 error(s) total\n  syntax: 1\n"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run(&args(&dir.path().join("none.brick"), &[])).unwrap_err().is_io());
}

#[test]
fn log_level_flag() {
    let parsed = Args::parse_from(["brickc", "--log-level", "debug", "x.brick"]);
    assert_eq!(parsed.log_level, "debug");
    assert!(!parsed.json);
}
