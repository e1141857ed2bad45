//! Integration tests for the diagnostics sink
//!
//! Tests ordering, per-kind counts, the sticky error flag, and rendering.

use brick_foundation::{Diagnostic, DiagnosticKind, Diagnostics};

// =============================================================================
// Accumulation
// =============================================================================

#[test]
fn starts_empty() {
    let diags = Diagnostics::new();
    assert!(diags.is_empty());
    assert!(!diags.has_errors());
    assert_eq!(diags.len(), 0);
    assert_eq!(diags.summary(), "no errors\n");
}

#[test]
fn later_reports_never_discard_earlier_ones() {
    let mut diags = Diagnostics::new();
    diags.lexical(1, 3, "unexpected character '@'");
    diags.syntax(2, 1, "expected ';' after setting");
    diags.semantic(4, 5, "entity 'e' already defined");
    diags.symbol(6, 2, "rule 'r' references undefined entity 'x'");
    diags.io("cannot read 'x.brick'");

    assert_eq!(diags.len(), 5);
    let kinds: Vec<DiagnosticKind> = diags.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, DiagnosticKind::ALL.to_vec());
    assert_eq!(diags.get(0).unwrap().message, "unexpected character '@'");
    assert_eq!(diags.as_slice()[2].line, 4);
}

#[test]
fn per_kind_counts() {
    let mut diags = Diagnostics::new();
    diags.syntax(1, 1, "a");
    diags.syntax(2, 1, "b");
    diags.semantic(3, 1, "c");

    assert_eq!(diags.count(DiagnosticKind::Syntax), 2);
    assert_eq!(diags.count(DiagnosticKind::Semantic), 1);
    assert_eq!(diags.count(DiagnosticKind::Lexical), 0);
    assert_eq!(diags.count(DiagnosticKind::Io), 0);
}

#[test]
fn iterates_by_reference() {
    let mut diags = Diagnostics::new();
    diags.syntax(1, 1, "a");
    diags.syntax(1, 2, "b");
    let mut columns = Vec::new();
    for d in &diags {
        columns.push(d.column);
    }
    assert_eq!(columns, vec![1, 2]);
}

#[test]
fn clear_then_reuse() {
    let mut diags = Diagnostics::for_file("a.brick");
    diags.syntax(1, 1, "a");
    diags.clear();
    assert!(!diags.has_errors());
    diags.semantic(2, 2, "b");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags.dump(), "a.brick:2:2: semantic error: b\n");
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn diagnostic_display_without_file() {
    let d = Diagnostic::new(DiagnosticKind::Lexical, 3, 7, "malformed numeric literal '42abc'");
    assert_eq!(
        d.to_string(),
        "3:7: lexical error: malformed numeric literal '42abc'"
    );
}

#[test]
fn diagnostic_display_with_file() {
    let d = Diagnostic::new(DiagnosticKind::Syntax, 1, 1, "expected 'game'").with_file("g.brick");
    assert_eq!(d.to_string(), "g.brick:1:1: syntax error: expected 'game'");
}

#[test]
fn dump_is_one_line_per_diagnostic_in_order() {
    let mut diags = Diagnostics::new();
    diags.syntax(1, 2, "first");
    diags.semantic(3, 4, "second");
    assert_eq!(
        diags.dump(),
        "1:2: syntax error: first\n3:4: semantic error: second\n"
    );
}

#[test]
fn summary_lists_kinds_in_reporting_order() {
    let mut diags = Diagnostics::new();
    diags.semantic(1, 1, "a");
    diags.lexical(1, 1, "b");
    diags.semantic(1, 1, "c");
    assert_eq!(
        diags.summary(),
        "3 error(s) total\n  lexical: 1\n  semantic: 2\n"
    );
}

#[test]
fn file_can_change_between_reports() {
    let mut diags = Diagnostics::for_file("a.brick");
    diags.syntax(1, 1, "x");
    diags.set_current_file("b.brick");
    diags.syntax(1, 1, "y");
    assert_eq!(diags.current_file(), Some("b.brick"));
    assert_eq!(diags.get(0).unwrap().file.as_deref(), Some("a.brick"));
    assert_eq!(diags.get(1).unwrap().file.as_deref(), Some("b.brick"));
}
