//! Human-readable and structured renderings of a [`SymbolTable`].

use std::fmt;

use brick_foundation::{Error, Result, Rgb};
use serde::Serialize;

use crate::model::{Control, Entity, GridSize};
use crate::table::SymbolTable;

/// Structured, serializable view of a symbol table.
///
/// Settings that were never set are omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Game name.
    pub game: String,
    /// Explicitly set settings.
    pub settings: SettingsSnapshot,
    /// Entities in name order.
    pub entities: Vec<Entity>,
    /// Controls in input order.
    pub controls: Vec<Control>,
    /// Rules in name order.
    pub rules: Vec<RuleSnapshot>,
}

/// The settings part of a [`Snapshot`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SettingsSnapshot {
    /// Ticks per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<i64>,
    /// Board size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSize>,
    /// Background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    /// Starting lives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lives: Option<i64>,
    /// Starting score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
}

/// A rule in a [`Snapshot`], with statements rendered as descriptions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleSnapshot {
    /// Rule name.
    pub name: String,
    /// Statement descriptions such as `Collide(head, wall -> lose)`.
    pub statements: Vec<String>,
}

impl SymbolTable {
    /// Builds the structured view.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let settings = self.settings();
        Snapshot {
            game: settings.name.clone(),
            settings: SettingsSnapshot {
                speed: settings.speed,
                grid: settings.grid,
                color: settings.color,
                lives: settings.lives,
                score: settings.score,
            },
            entities: self.entities().cloned().collect(),
            controls: self.controls().cloned().collect(),
            rules: self
                .rules()
                .map(|rule| RuleSnapshot {
                    name: rule.name.clone(),
                    statements: rule.statement_descriptions(),
                })
                .collect(),
        }
    }

    /// Renders the structured view as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns a serialization error if JSON rendering fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| Error::serialization(e.to_string()))
    }

    /// One-paragraph count summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "game '{}' has {} entities, {} controls and {} rules",
            self.game_name(),
            self.entity_count(),
            self.control_count(),
            self.rule_count()
        )
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SYMBOL TABLE")?;
        writeln!(f, "============")?;
        writeln!(f)?;
        writeln!(f, "Game: {}", self.game_name())?;
        if let Some(speed) = self.speed() {
            writeln!(f, "Speed: {speed}")?;
        }
        if let Some(grid) = self.grid() {
            writeln!(f, "Grid: {grid}")?;
        }
        if let Some(color) = self.color() {
            writeln!(f, "Color: {color}")?;
        }
        if let Some(lives) = self.lives() {
            writeln!(f, "Lives: {lives}")?;
        }
        if let Some(score) = self.score() {
            writeln!(f, "Score: {score}")?;
        }

        writeln!(f)?;
        writeln!(f, "Entities ({}):", self.entity_count())?;
        for entity in self.entities() {
            writeln!(f, "  {entity}")?;
        }
        writeln!(f)?;
        writeln!(f, "Controls ({}):", self.control_count())?;
        for control in self.controls() {
            writeln!(f, "  {control}")?;
        }
        writeln!(f)?;
        writeln!(f, "Rules ({}):", self.rule_count())?;
        for rule in self.rules() {
            writeln!(f, "  {rule}")?;
        }
        Ok(())
    }
}
