//! Integration tests for validation

use brick_foundation::{DiagnosticKind, Diagnostics};
use brick_language::{Span, parse};
use brick_semantic::{AnalysisConfig, Control, Entity, SymbolTable};

fn analyze(source: &str, config: AnalysisConfig) -> (bool, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let program = parse(source, &mut diagnostics).unwrap();
    assert!(diagnostics.is_empty(), "{}", diagnostics.dump());
    let mut table = SymbolTable::with_config(config);
    assert!(table.populate(&program, &mut diagnostics));
    let valid = table.validate(&mut diagnostics);
    (valid, diagnostics)
}

#[test]
fn valid_game() {
    let (valid, diagnostics) = analyze(
        "game X { entity e { spawn:(0,0); color:#ffffff; solid:true; } }",
        AnalysisConfig::default(),
    );
    assert!(valid);
    assert!(diagnostics.is_empty());
}

#[test]
fn zero_entities_fail_validation() {
    let mut diagnostics = Diagnostics::new();
    let program = parse("game Empty { speed: 8; }", &mut diagnostics).unwrap();
    let mut table = SymbolTable::new();
    assert!(table.populate(&program, &mut diagnostics));
    assert!(diagnostics.is_empty());

    assert!(!table.validate(&mut diagnostics));
    assert_eq!(diagnostics.len(), 1);
    let d = diagnostics.get(0).unwrap();
    assert_eq!(d.kind, DiagnosticKind::Semantic);
    assert_eq!(d.message, "game must define at least one entity");
    assert_eq!((d.line, d.column), (1, 6));
}

#[test]
fn empty_name_fails_validation() {
    let mut table = SymbolTable::new();
    let mut diagnostics = Diagnostics::new();
    table.set_game_name("", Span::at(2, 3));
    table.add_entity(Entity::new("e"), Span::at(3, 1), &mut diagnostics);

    assert!(!table.validate_game_settings(&mut diagnostics));
    assert_eq!(diagnostics.get(0).unwrap().message, "game must have a name");
    assert_eq!(diagnostics.get(0).unwrap().line, 2);
}

#[test]
fn every_check_runs() {
    let mut diagnostics = Diagnostics::new();
    assert!(!SymbolTable::new().validate(&mut diagnostics));
    let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["game must have a name", "game must define at least one entity"]
    );
}

#[test]
fn incomplete_control_fails_validation() {
    let mut table = SymbolTable::new();
    let mut diagnostics = Diagnostics::new();
    table.add_control(Control::new("up", ""), Span::at(1, 1), &mut diagnostics);
    assert!(!table.validate_controls(&mut diagnostics));
    assert_eq!(
        diagnostics.get(0).unwrap().message,
        "control 'up -> ' is incomplete"
    );
}

#[test]
fn undefined_collide_targets_pass_by_default() {
    let (valid, diagnostics) = analyze(
        "game X { entity head {} rule r { collide head, wall: lose; } }",
        AnalysisConfig::default(),
    );
    assert!(valid);
    assert!(diagnostics.is_empty());
}

#[test]
fn strict_references_report_undefined_collide_targets() {
    let (valid, diagnostics) = analyze(
        "game X {\n entity head {}\n rule r {\n  collide head, wall: lose;\n  collide ghost, head: lose;\n }\n}",
        AnalysisConfig::new().with_strict_references(true),
    );
    assert!(!valid);
    assert_eq!(diagnostics.count(DiagnosticKind::Symbol), 2);
    let d = diagnostics.get(0).unwrap();
    assert_eq!(d.message, "rule 'r' references undefined entity 'wall'");
    assert_eq!((d.line, d.column), (4, 3));
    assert_eq!(
        diagnostics.get(1).unwrap().message,
        "rule 'r' references undefined entity 'ghost'"
    );
}

#[test]
fn strict_preset_enables_both_switches() {
    let config = AnalysisConfig::strict();
    assert!(config.strict_values);
    assert!(config.strict_references);
    assert_eq!(AnalysisConfig::default(), AnalysisConfig::new());
    assert!(!AnalysisConfig::default().strict_values);
}
