//! Abstract Syntax Tree for BrickLang.
//!
//! The tree is fully owned: every node owns its children and dropping the
//! root drops the whole tree. Every node records the [`Span`] where it begins.
//!
//! Generic traversal goes through [`Node`], a borrowed view over the closed set
//! of node variants. Consumers match on it directly.

use std::fmt;

use brick_foundation::Rgb;

use crate::span::Span;
use crate::token::TokenKind;

/// The root of a parsed source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    /// Name given after `game`.
    pub game_name: String,
    /// The game body.
    pub game: Game,
    /// Position of the `game` keyword.
    pub span: Span,
}

/// A `game NAME { ... }` block with its items grouped by kind, each group in
/// source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    /// Name of the game.
    pub name: String,
    /// `speed`, `grid`, `color`, `score` and `lives` settings.
    pub settings: Vec<Setting>,
    /// Entity declarations.
    pub entities: Vec<EntityDecl>,
    /// Control mappings from every `controls` block, flattened.
    pub controls: Vec<ControlDecl>,
    /// Rule declarations.
    pub rules: Vec<RuleDecl>,
    /// Position of the game name.
    pub span: Span,
}

impl Game {
    /// Creates an empty game body.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            settings: Vec::new(),
            entities: Vec::new(),
            controls: Vec::new(),
            rules: Vec::new(),
            span,
        }
    }
}

/// A `key: value;` pair. Used for game settings and entity properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setting {
    /// The key as written (`speed`, `grid`, `spawn`, `lives`, ...).
    pub key: String,
    /// The value, if one was attached.
    pub value: Option<Expr>,
    /// Position of the key.
    pub span: Span,
}

impl Setting {
    /// Creates a setting with a value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Expr, span: Span) -> Self {
        Self {
            key: key.into(),
            value: Some(value),
            span,
        }
    }
}

/// An `entity NAME { ... }` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityDecl {
    /// Entity name.
    pub name: String,
    /// `spawn`, `color` and `solid` properties in source order.
    pub properties: Vec<Setting>,
    /// Position of the `entity` keyword.
    pub span: Span,
}

/// One `input: action;` line of a `controls` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlDecl {
    /// Input label, such as `left` or `space`.
    pub input: String,
    /// Action label, such as `move_left`.
    pub action: String,
    /// Position of the input label.
    pub span: Span,
}

/// A `rule NAME { ... }` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleDecl {
    /// Rule name.
    pub name: String,
    /// Statements in source order.
    pub statements: Vec<Statement>,
    /// Position of the `rule` keyword.
    pub span: Span,
}

/// A statement inside a rule body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// `tick ACTION(args);`
    Tick {
        /// Action performed every tick.
        action: String,
        /// Arguments, possibly empty.
        args: Vec<Expr>,
        /// Position of `tick`.
        span: Span,
    },
    /// `collide A, B: ACTION(args);`
    Collide {
        /// First entity name.
        first: String,
        /// Second entity name.
        second: String,
        /// Action performed on collision.
        action: String,
        /// Arguments, possibly empty.
        args: Vec<Expr>,
        /// Position of `collide`.
        span: Span,
    },
    /// `score +N;` or `score -N;`
    Score {
        /// True for an increase.
        positive: bool,
        /// Magnitude of the change.
        amount: i64,
        /// Position of `score`.
        span: Span,
    },
    /// `lose;`
    Lose {
        /// Position of `lose`.
        span: Span,
    },
}

impl Statement {
    /// Returns the source span of this statement.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Tick { span, .. }
            | Self::Collide { span, .. }
            | Self::Score { span, .. }
            | Self::Lose { span } => *span,
        }
    }

    /// Returns the arguments of a tick or collide statement.
    #[must_use]
    pub fn args(&self) -> &[Expr] {
        match self {
            Self::Tick { args, .. } | Self::Collide { args, .. } => args,
            Self::Score { .. } | Self::Lose { .. } => &[],
        }
    }

    /// A human-readable name for this statement kind.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Tick { .. } => "tick",
            Self::Collide { .. } => "collide",
            Self::Score { .. } => "score",
            Self::Lose { .. } => "lose",
        }
    }
}

/// Binary operators, from loosest to tightest binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps an operator token to its operator.
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::EqEq => Self::Eq,
            TokenKind::NotEq => Self::NotEq,
            TokenKind::Less => Self::Less,
            TokenKind::Greater => Self::Greater,
            TokenKind::LessEq => Self::LessEq,
            TokenKind::GreaterEq => Self::GreaterEq,
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,
            _ => return None,
        };
        Some(op)
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Eq
            | Self::NotEq
            | Self::Less
            | Self::Greater
            | Self::LessEq
            | Self::GreaterEq => 1,
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div => 3,
        }
    }

    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEq => "<=",
            Self::GreaterEq => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A value or expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// Identifier like `snake`
    Identifier(String, Span),
    /// Integer literal like `42`
    Integer(i64, Span),
    /// Color literal like `#1a2b3c`
    HexColor(Rgb, Span),
    /// `true` or `false`
    Boolean(bool, Span),
    /// Coordinate pair like `(10, 20)`
    Point(i64, i64, Span),
    /// `left op right`
    BinaryOp {
        /// The operator.
        op: BinaryOperator,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
        /// Position of the left operand.
        span: Span,
    },
}

impl Expr {
    /// Returns the source span of this expression.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Identifier(_, s)
            | Self::Integer(_, s)
            | Self::HexColor(_, s)
            | Self::Boolean(_, s)
            | Self::Point(_, _, s)
            | Self::BinaryOp { span: s, .. } => *s,
        }
    }

    /// Returns the integer value, or None if not an integer.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n, _) => Some(*n),
            _ => None,
        }
    }

    /// Returns the coordinates, or None if not a point.
    #[must_use]
    pub const fn as_point(&self) -> Option<(i64, i64)> {
        match self {
            Self::Point(x, y, _) => Some((*x, *y)),
            _ => None,
        }
    }

    /// Returns the color, or None if not a hex color.
    #[must_use]
    pub const fn as_color(&self) -> Option<Rgb> {
        match self {
            Self::HexColor(c, _) => Some(*c),
            _ => None,
        }
    }

    /// Returns the boolean value, or None if not a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b, _) => Some(*b),
            _ => None,
        }
    }

    /// Returns the identifier name, or None if not an identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(name, _) => Some(name),
            _ => None,
        }
    }

    /// A human-readable type name for this expression.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Identifier(..) => "identifier",
            Self::Integer(..) => "integer",
            Self::HexColor(..) => "hex color",
            Self::Boolean(..) => "boolean",
            Self::Point(..) => "point",
            Self::BinaryOp { .. } => "expression",
        }
    }
}

/// Helper constructors for expressions (for testing).
#[cfg(test)]
impl Expr {
    pub(crate) fn int(n: i64) -> Self {
        Self::Integer(n, Span::default())
    }

    pub(crate) fn ident(name: &str) -> Self {
        Self::Identifier(name.to_string(), Span::default())
    }

    pub(crate) fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span: Span::default(),
        }
    }
}

/// A borrowed view of any node in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node<'a> {
    /// The root.
    Program(&'a Program),
    /// The game body.
    Game(&'a Game),
    /// A setting or entity property.
    Setting(&'a Setting),
    /// An entity declaration.
    Entity(&'a EntityDecl),
    /// A control mapping.
    Control(&'a ControlDecl),
    /// A rule declaration.
    Rule(&'a RuleDecl),
    /// A rule statement.
    Statement(&'a Statement),
    /// A value or expression.
    Expr(&'a Expr),
}

impl<'a> Node<'a> {
    /// Returns the direct children of this node, in source order.
    #[must_use]
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Program(program) => vec![Node::Game(&program.game)],
            Node::Game(game) => game
                .settings
                .iter()
                .map(Node::Setting)
                .chain(game.entities.iter().map(Node::Entity))
                .chain(game.controls.iter().map(Node::Control))
                .chain(game.rules.iter().map(Node::Rule))
                .collect(),
            Node::Setting(setting) => setting.value.iter().map(Node::Expr).collect(),
            Node::Entity(entity) => entity.properties.iter().map(Node::Setting).collect(),
            Node::Control(_) => Vec::new(),
            Node::Rule(rule) => rule.statements.iter().map(Node::Statement).collect(),
            Node::Statement(statement) => statement.args().iter().map(Node::Expr).collect(),
            Node::Expr(Expr::BinaryOp { left, right, .. }) => {
                vec![Node::Expr(left), Node::Expr(right)]
            }
            Node::Expr(_) => Vec::new(),
        }
    }

    /// Returns the source span of this node.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Node::Program(n) => n.span,
            Node::Game(n) => n.span,
            Node::Setting(n) => n.span,
            Node::Entity(n) => n.span,
            Node::Control(n) => n.span,
            Node::Rule(n) => n.span,
            Node::Statement(n) => n.span(),
            Node::Expr(n) => n.span(),
        }
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(p) => write!(f, "Program({})", p.game_name),
            Node::Game(g) => write!(f, "Game({})", g.name),
            Node::Setting(s) => write!(f, "Setting({})", s.key),
            Node::Entity(e) => write!(f, "Entity({})", e.name),
            Node::Control(c) => write!(f, "Control({} -> {})", c.input, c.action),
            Node::Rule(r) => write!(f, "Rule({})", r.name),
            Node::Statement(Statement::Tick { action, .. }) => write!(f, "Tick({action})"),
            Node::Statement(Statement::Collide {
                first,
                second,
                action,
                ..
            }) => write!(f, "Collide({first}, {second} -> {action})"),
            Node::Statement(Statement::Score {
                positive, amount, ..
            }) => write!(f, "Score({}{amount})", if *positive { '+' } else { '-' }),
            Node::Statement(Statement::Lose { .. }) => f.write_str("Lose"),
            Node::Expr(Expr::Identifier(name, _)) => write!(f, "Identifier({name})"),
            Node::Expr(Expr::Integer(n, _)) => write!(f, "Integer({n})"),
            Node::Expr(Expr::HexColor(c, _)) => write!(f, "HexColor({c})"),
            Node::Expr(Expr::Boolean(b, _)) => write!(f, "Boolean({b})"),
            Node::Expr(Expr::Point(x, y, _)) => write!(f, "Point({x}, {y})"),
            Node::Expr(Expr::BinaryOp { op, .. }) => write!(f, "BinaryOp({op})"),
        }
    }
}
