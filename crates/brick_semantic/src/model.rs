//! Semantic entities extracted from the syntax tree.
//!
//! These values are independent of the AST: a [`Rule`] owns clones of its
//! statements, so the tree may be dropped as soon as population finishes.

use std::fmt;

use brick_foundation::Rgb;
use brick_language::{Node, Span, Statement};
use serde::Serialize;

/// A grid coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Board dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GridSize {
    /// Number of columns.
    pub width: i64,
    /// Number of rows.
    pub height: i64,
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Game-level settings. `None` means the source never set the value, which
/// is distinct from setting it to zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameSettings {
    /// Game name; must be non-empty for a valid model.
    pub name: String,
    /// Ticks per second.
    pub speed: Option<i64>,
    /// Board size.
    pub grid: Option<GridSize>,
    /// Background color.
    pub color: Option<Rgb>,
    /// Starting lives.
    pub lives: Option<i64>,
    /// Starting score.
    pub score: Option<i64>,
}

/// A named game-object template.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Entity {
    /// Unique name.
    pub name: String,
    /// Where the entity appears.
    pub spawn: Position,
    /// Fill color.
    pub color: Rgb,
    /// Whether other entities collide with it.
    pub solid: bool,
}

impl Entity {
    /// Creates an entity at the origin, black and not solid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{spawn: {}, color: {}, solid: {}}}",
            self.name, self.spawn, self.color, self.solid
        )
    }
}

/// An input label mapped to an action label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Control {
    /// Input such as `left` or `space`.
    pub input: String,
    /// Action such as `move_left`.
    pub action: String,
}

impl Control {
    /// Creates a control mapping.
    #[must_use]
    pub fn new(input: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            action: action.into(),
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input, self.action)
    }
}

/// A named rule with its own copy of its statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Unique name.
    pub name: String,
    /// Statements in source order.
    pub statements: Vec<Statement>,
    /// Where the rule was declared.
    pub span: Span,
}

impl Rule {
    /// Creates a rule with no statements.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            statements: Vec::new(),
            span,
        }
    }

    /// Short descriptions of each statement, such as `Score(+10)`.
    #[must_use]
    pub fn statement_descriptions(&self) -> Vec<String> {
        self.statements
            .iter()
            .map(|s| Node::Statement(s).to_string())
            .collect()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{{} statements}}", self.name, self.statements.len())
    }
}
