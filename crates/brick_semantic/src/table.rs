//! The symbol table: settings plus name-keyed entities, controls and rules.

use std::collections::BTreeMap;

use brick_foundation::{Diagnostics, Rgb};
use brick_language::Span;
use log::debug;

use crate::config::AnalysisConfig;
use crate::model::{Control, Entity, GameSettings, GridSize, Rule};

/// The queryable model of one game.
///
/// Names are unique per kind. Inserting a duplicate is rejected and reported;
/// the first definition always wins. Iteration is in name order.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    pub(crate) config: AnalysisConfig,
    pub(crate) settings: GameSettings,
    /// Position of the game name, used for game-level diagnostics.
    pub(crate) game_span: Span,
    pub(crate) entities: BTreeMap<String, Entity>,
    pub(crate) controls: BTreeMap<String, Control>,
    pub(crate) rules: BTreeMap<String, Rule>,
}

impl SymbolTable {
    /// Creates an empty table with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with the given configuration.
    #[must_use]
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the analysis configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Sets the game name and the position it was declared at.
    pub fn set_game_name(&mut self, name: impl Into<String>, span: Span) {
        self.settings.name = name.into();
        self.game_span = span;
    }

    /// Sets the speed.
    pub fn set_speed(&mut self, speed: i64) {
        self.settings.speed = Some(speed);
    }

    /// Sets the grid size.
    pub fn set_grid(&mut self, width: i64, height: i64) {
        self.settings.grid = Some(GridSize { width, height });
    }

    /// Sets the background color.
    pub fn set_color(&mut self, color: Rgb) {
        self.settings.color = Some(color);
    }

    /// Sets the starting lives.
    pub fn set_lives(&mut self, lives: i64) {
        self.settings.lives = Some(lives);
    }

    /// Sets the starting score.
    pub fn set_score(&mut self, score: i64) {
        self.settings.score = Some(score);
    }

    /// All game-level settings.
    #[must_use]
    pub const fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// The game name; empty until set.
    #[must_use]
    pub fn game_name(&self) -> &str {
        &self.settings.name
    }

    /// The speed, if set.
    #[must_use]
    pub const fn speed(&self) -> Option<i64> {
        self.settings.speed
    }

    /// Returns true if the speed was set.
    #[must_use]
    pub const fn has_speed(&self) -> bool {
        self.settings.speed.is_some()
    }

    /// The grid size, if set.
    #[must_use]
    pub const fn grid(&self) -> Option<GridSize> {
        self.settings.grid
    }

    /// The grid width, if the grid was set.
    #[must_use]
    pub fn grid_width(&self) -> Option<i64> {
        self.settings.grid.map(|g| g.width)
    }

    /// The grid height, if the grid was set.
    #[must_use]
    pub fn grid_height(&self) -> Option<i64> {
        self.settings.grid.map(|g| g.height)
    }

    /// Returns true if the grid was set.
    #[must_use]
    pub const fn has_grid(&self) -> bool {
        self.settings.grid.is_some()
    }

    /// The background color, if set.
    #[must_use]
    pub const fn color(&self) -> Option<Rgb> {
        self.settings.color
    }

    /// Returns true if the background color was set.
    #[must_use]
    pub const fn has_color(&self) -> bool {
        self.settings.color.is_some()
    }

    /// The starting lives, if set.
    #[must_use]
    pub const fn lives(&self) -> Option<i64> {
        self.settings.lives
    }

    /// Returns true if lives were set.
    #[must_use]
    pub const fn has_lives(&self) -> bool {
        self.settings.lives.is_some()
    }

    /// The starting score, if set.
    #[must_use]
    pub const fn score(&self) -> Option<i64> {
        self.settings.score
    }

    /// Returns true if the score was set.
    #[must_use]
    pub const fn has_score(&self) -> bool {
        self.settings.score.is_some()
    }

    // =========================================================================
    // Entities
    // =========================================================================

    /// Inserts an entity. A duplicate name is reported at `span` and the
    /// existing entity is kept.
    pub fn add_entity(&mut self, entity: Entity, span: Span, diagnostics: &mut Diagnostics) -> bool {
        if self.entities.contains_key(&entity.name) {
            diagnostics.semantic(
                span.line,
                span.column,
                format!("entity '{}' already defined", entity.name),
            );
            return false;
        }
        debug!(entity:% = entity.name; "Inserted entity");
        self.entities.insert(entity.name.clone(), entity);
        true
    }

    /// Looks up an entity by name.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// Returns true if an entity with this name exists.
    #[must_use]
    pub fn has_entity(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// Iterates over entities in name order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Number of entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    // =========================================================================
    // Controls
    // =========================================================================

    /// Inserts a control mapping keyed by input. A duplicate input is reported
    /// at `span` and the existing mapping is kept.
    pub fn add_control(
        &mut self,
        control: Control,
        span: Span,
        diagnostics: &mut Diagnostics,
    ) -> bool {
        if self.controls.contains_key(&control.input) {
            diagnostics.semantic(
                span.line,
                span.column,
                format!("control '{}' already mapped", control.input),
            );
            return false;
        }
        self.controls.insert(control.input.clone(), control);
        true
    }

    /// Looks up a control by input label.
    #[must_use]
    pub fn control(&self, input: &str) -> Option<&Control> {
        self.controls.get(input)
    }

    /// Returns true if the input is mapped.
    #[must_use]
    pub fn has_control(&self, input: &str) -> bool {
        self.controls.contains_key(input)
    }

    /// Iterates over controls in input order.
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.controls.values()
    }

    /// Number of controls.
    #[must_use]
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    // =========================================================================
    // Rules
    // =========================================================================

    /// Inserts a rule. A duplicate name is reported at the rule's span and the
    /// existing rule is kept.
    pub fn add_rule(&mut self, rule: Rule, diagnostics: &mut Diagnostics) -> bool {
        if self.rules.contains_key(&rule.name) {
            diagnostics.semantic(
                rule.span.line,
                rule.span.column,
                format!("rule '{}' already defined", rule.name),
            );
            return false;
        }
        self.rules.insert(rule.name.clone(), rule);
        true
    }

    /// Looks up a rule by name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Returns true if a rule with this name exists.
    #[must_use]
    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Iterates over rules in name order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    /// Number of rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Resets everything except the configuration. A cleared table behaves
    /// exactly like a new one.
    pub fn clear(&mut self) {
        self.settings = GameSettings::default();
        self.game_span = Span::default();
        self.entities.clear();
        self.controls.clear();
        self.rules.clear();
    }
}
