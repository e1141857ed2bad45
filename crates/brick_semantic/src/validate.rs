//! Whole-model checks run once after population.

use brick_foundation::Diagnostics;
use brick_language::Statement;
use log::debug;

use crate::table::SymbolTable;

impl SymbolTable {
    /// Checks the populated model. Every failed check records a diagnostic.
    ///
    /// All checks run even after one fails.
    pub fn validate(&self, diagnostics: &mut Diagnostics) -> bool {
        let settings = self.validate_game_settings(diagnostics);
        let entities = self.validate_entities(diagnostics);
        let controls = self.validate_controls(diagnostics);
        let rules = self.validate_rules(diagnostics);
        let valid = settings && entities && controls && rules;
        debug!(valid = valid; "Validated symbol table");
        valid
    }

    /// The game must have a non-empty name.
    pub fn validate_game_settings(&self, diagnostics: &mut Diagnostics) -> bool {
        if self.game_name().is_empty() {
            diagnostics.semantic(
                self.game_span.line,
                self.game_span.column,
                "game must have a name",
            );
            return false;
        }
        true
    }

    /// At least one entity must be defined.
    pub fn validate_entities(&self, diagnostics: &mut Diagnostics) -> bool {
        if self.entities.is_empty() {
            diagnostics.semantic(
                self.game_span.line,
                self.game_span.column,
                "game must define at least one entity",
            );
            return false;
        }
        true
    }

    /// Every control must name both an input and an action.
    pub fn validate_controls(&self, diagnostics: &mut Diagnostics) -> bool {
        let mut valid = true;
        for control in self.controls.values() {
            if control.input.is_empty() || control.action.is_empty() {
                diagnostics.semantic(
                    self.game_span.line,
                    self.game_span.column,
                    format!("control '{control}' is incomplete"),
                );
                valid = false;
            }
        }
        valid
    }

    /// With strict references, `collide` statements may only name declared
    /// entities.
    pub fn validate_rules(&self, diagnostics: &mut Diagnostics) -> bool {
        if !self.config.strict_references {
            return true;
        }
        let mut valid = true;
        for rule in self.rules.values() {
            for statement in &rule.statements {
                let Statement::Collide {
                    first,
                    second,
                    span,
                    ..
                } = statement
                else {
                    continue;
                };
                for name in [first, second] {
                    if !self.has_entity(name) {
                        diagnostics.symbol(
                            span.line,
                            span.column,
                            format!("rule '{}' references undefined entity '{name}'", rule.name),
                        );
                        valid = false;
                    }
                }
            }
        }
        valid
    }
}
