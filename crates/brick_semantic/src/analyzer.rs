//! Populates a [`SymbolTable`] from a parsed [`Program`].
//!
//! Population is a single pass in source order: game name, settings,
//! entities, controls, rules. Each value is matched against the shape its key
//! expects; a mismatch is ignored (with a warning in the log) unless
//! [`AnalysisConfig::strict_values`](crate::AnalysisConfig) is set.

use brick_foundation::Diagnostics;
use brick_language::{EntityDecl, Expr, Program, Setting};
use log::{debug, warn};

use crate::model::{Control, Entity, Position, Rule};
use crate::table::SymbolTable;

impl SymbolTable {
    /// Records everything declared in `program`.
    ///
    /// Returns true if no diagnostics were recorded during population.
    pub fn populate(&mut self, program: &Program, diagnostics: &mut Diagnostics) -> bool {
        let before = diagnostics.len();
        let game = &program.game;

        self.set_game_name(program.game_name.clone(), game.span);

        for setting in &game.settings {
            self.apply_setting(setting, diagnostics);
        }
        for decl in &game.entities {
            self.populate_entity(decl, diagnostics);
        }
        for decl in &game.controls {
            self.add_control(
                Control::new(decl.input.clone(), decl.action.clone()),
                decl.span,
                diagnostics,
            );
        }
        for decl in &game.rules {
            let mut rule = Rule::new(decl.name.clone(), decl.span);
            rule.statements.clone_from(&decl.statements);
            self.add_rule(rule, diagnostics);
        }

        let recorded = diagnostics.len() - before;
        debug!(
            game:% = self.game_name(),
            entities = self.entity_count(),
            controls = self.control_count(),
            rules = self.rule_count(),
            errors = recorded;
            "Populated symbol table"
        );
        recorded == 0
    }

    fn apply_setting(&mut self, setting: &Setting, diagnostics: &mut Diagnostics) {
        match (setting.key.as_str(), setting.value.as_ref()) {
            ("speed", Some(Expr::Integer(n, _))) => self.set_speed(*n),
            ("grid", Some(Expr::Point(w, h, _))) => self.set_grid(*w, *h),
            ("color", Some(Expr::HexColor(c, _))) => self.set_color(*c),
            ("lives", Some(Expr::Integer(n, _))) => self.set_lives(*n),
            ("score", Some(Expr::Integer(n, _))) => self.set_score(*n),
            _ => self.ignore_value("setting", setting, expected_setting_shape, diagnostics),
        }
    }

    /// Inserts the entity unless its name is taken. Properties of a rejected
    /// duplicate are never looked at.
    fn populate_entity(&mut self, decl: &EntityDecl, diagnostics: &mut Diagnostics) {
        if self.has_entity(&decl.name) {
            self.add_entity(Entity::new(decl.name.clone()), decl.span, diagnostics);
            return;
        }

        let mut entity = Entity::new(decl.name.clone());
        for property in &decl.properties {
            match (property.key.as_str(), property.value.as_ref()) {
                ("spawn", Some(Expr::Point(x, y, _))) => entity.spawn = Position::new(*x, *y),
                ("color", Some(Expr::HexColor(c, _))) => entity.color = *c,
                ("solid", Some(Expr::Boolean(b, _))) => entity.solid = *b,
                _ => self.ignore_value("property", property, expected_property_shape, diagnostics),
            }
        }
        self.add_entity(entity, decl.span, diagnostics);
    }

    /// Handles a key/value pair whose value does not fit its key.
    fn ignore_value(
        &self,
        what: &str,
        setting: &Setting,
        expected: fn(&str) -> Option<&'static str>,
        diagnostics: &mut Diagnostics,
    ) {
        let key = setting.key.as_str();
        let message = match (expected(key), &setting.value) {
            (None, _) => format!("unknown {what} '{key}'"),
            (Some(_), None) => format!("{what} '{key}' has no value"),
            (Some(shape), Some(value)) => format!(
                "{what} '{key}' expects {shape}, found {}",
                value.type_name()
            ),
        };

        if self.config.strict_values {
            diagnostics.semantic(setting.span.line, setting.span.column, message);
        } else {
            warn!(line = setting.span.line, column = setting.span.column; "Ignoring {message}");
        }
    }
}

fn expected_setting_shape(key: &str) -> Option<&'static str> {
    match key {
        "speed" | "lives" | "score" => Some("an integer"),
        "grid" => Some("a point"),
        "color" => Some("a hex color"),
        _ => None,
    }
}

fn expected_property_shape(key: &str) -> Option<&'static str> {
    match key {
        "spawn" => Some("a point"),
        "color" => Some("a hex color"),
        "solid" => Some("a boolean"),
        _ => None,
    }
}
