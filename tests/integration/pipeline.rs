//! Compile pipeline integration tests
//!
//! Tests phase gating and file handling from source text to a usable model.

use std::io::Write;

use brick_foundation::{DiagnosticKind, ErrorKind};
use brick_runtime::{CompilerConfig, compile_file, compile_source};
use brick_semantic::AnalysisConfig;
use tempfile::NamedTempFile;

const SNAKE: &str = include_str!("../../games/snake.brick");
const TETRIS: &str = include_str!("../../games/tetris.brick");

// =============================================================================
// Sample games
// =============================================================================

#[test]
fn sample_games_compile_strictly() {
    let config = CompilerConfig::new().with_analysis(AnalysisConfig::strict());
    for (name, source) in [("snake.brick", SNAKE), ("tetris.brick", TETRIS)] {
        let compilation = compile_source(source, name, &config);
        assert!(
            compilation.is_success(),
            "{name}:\n{}",
            compilation.diagnostics.dump()
        );
    }
}

#[test]
fn snake_model() {
    let model = compile_source(SNAKE, "snake.brick", &CompilerConfig::default())
        .into_model()
        .unwrap();
    assert_eq!(model.game_name(), "Snake");
    assert_eq!(model.speed(), Some(10));
    assert_eq!((model.grid_width(), model.grid_height()), (Some(20), Some(20)));
    assert_eq!(model.entity_count(), 4);
    assert_eq!(model.control_count(), 5);
    assert_eq!(model.rule_count(), 3);
    assert!(!model.entity("food").unwrap().solid);
    assert_eq!(model.control("space").unwrap().action, "pause");
    assert_eq!(model.rule("crashing").unwrap().statements.len(), 3);
}

// =============================================================================
// Phase gating
// =============================================================================

#[test]
fn lexical_and_syntax_errors_suppress_the_model() {
    let compilation = compile_source(
        "game X {\n speed: 8abc;\n entity e { color: #12; }\n entity e {}\n}",
        "bad.brick",
        &CompilerConfig::default(),
    );
    assert!(!compilation.is_success());
    assert_eq!(compilation.diagnostics.count(DiagnosticKind::Lexical), 2);
    assert_eq!(compilation.diagnostics.count(DiagnosticKind::Semantic), 0);
}

#[test]
fn semantic_errors_suppress_the_model() {
    let compilation = compile_source(
        "game X { entity e {} entity e {} }",
        "dup.brick",
        &CompilerConfig::default(),
    );
    assert!(compilation.model.is_none());
    assert_eq!(
        compilation.diagnostics.dump(),
        "dup.brick:1:22: semantic error: entity 'e' already defined\n"
    );
}

#[test]
fn validation_failure_suppresses_the_model() {
    let compilation = compile_source("game X { speed: 1; }", "x.brick", &CompilerConfig::default());
    assert!(compilation.model.is_none());
    assert_eq!(compilation.diagnostics.len(), 1);
    let err = compilation.into_model().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CompilationFailed { count: 1 }));
}

#[test]
fn strict_references_flow_through_the_pipeline() {
    let source = "game X { entity a {} rule r { collide a, b: lose; } }";
    let lenient = compile_source(source, "x.brick", &CompilerConfig::default());
    assert!(lenient.is_success());

    let strict = CompilerConfig::new()
        .with_analysis(AnalysisConfig::new().with_strict_references(true));
    let compilation = compile_source(source, "x.brick", &strict);
    assert!(!compilation.is_success());
    assert_eq!(compilation.diagnostics.count(DiagnosticKind::Symbol), 1);
}

#[test]
fn ast_is_kept_on_request_even_on_failure() {
    let config = CompilerConfig::new().with_keep_ast(true);
    let compilation = compile_source("game X { }", "x.brick", &config);
    assert!(!compilation.is_success());
    assert_eq!(compilation.ast.unwrap().game_name, "X");
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn compile_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TETRIS.as_bytes()).unwrap();

    let compilation = compile_file(file.path(), &CompilerConfig::default()).unwrap();
    assert!(compilation.is_success());
    assert_eq!(compilation.model.unwrap().game_name(), "Tetris");
}

#[test]
fn diagnostics_name_the_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"game X { entity e { solid: yes; } }").unwrap();

    let compilation = compile_file(file.path(), &CompilerConfig::default()).unwrap();
    let d = compilation.diagnostics.get(0).unwrap();
    assert_eq!(d.file.as_deref(), Some(file.path().display().to_string().as_str()));
}

#[test]
fn unreadable_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = compile_file(dir.path().join("missing.brick"), &CompilerConfig::default())
        .unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().contains("missing.brick"));
}

// =============================================================================
// Properties
// =============================================================================

mod properties {
    use brick_runtime::{CompilerConfig, compile_source};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn model_exists_exactly_when_no_diagnostics(body in "[a-z{}():;,#0-9 +\\-]{0,80}") {
            let source = format!("game G {{ entity e {{}} {body} }}");
            let compilation = compile_source(&source, "p.brick", &CompilerConfig::default());
            prop_assert_eq!(compilation.model.is_some(), compilation.diagnostics.is_empty());
        }
    }
}
