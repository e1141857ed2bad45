//! Token types for BrickLang.
//!
//! Tokens are the output of the lexer and input to the parser.

use std::fmt;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The exact source text of this token.
    pub lexeme: String,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// 1-based line of the first character.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.span.line
    }

    /// 1-based column of the first character.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true if this is an identifier spelled `name`.
    #[must_use]
    pub fn is_identifier(&self, name: &str) -> bool {
        self.kind == TokenKind::Identifier && self.lexeme == name
    }

    /// Returns true if this token can be used as a plain name: an identifier
    /// or any keyword.
    #[must_use]
    pub const fn is_name(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier) || self.kind.is_keyword()
    }

    /// Message describing why an error token is malformed.
    #[must_use]
    pub fn error_message(&self) -> String {
        match self.lexeme.chars().next() {
            Some(c) if c.is_ascii_digit() => {
                format!("malformed numeric literal '{}'", self.lexeme)
            }
            Some('#') => format!(
                "malformed hex color '{}' (expected '#' and exactly 6 hex digits)",
                self.lexeme
            ),
            _ => format!("unexpected character '{}'", self.lexeme),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.name(), self.lexeme)
    }
}

/// Token kinds for BrickLang.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Meta
    /// End of input; repeated on every further request.
    Eof,
    /// Malformed literal or unknown character.
    Error,

    // Literals
    /// Identifier like `snake` or `move_left`
    Identifier,
    /// Integer literal like `42`
    Integer,
    /// Color literal like `#1a2b3c`
    HexColor,
    /// `true`
    True,
    /// `false`
    False,

    // Keywords
    /// `game`
    Game,
    /// `speed`
    Speed,
    /// `grid`
    Grid,
    /// `color`
    Color,
    /// `entity`
    Entity,
    /// `spawn`
    Spawn,
    /// `solid`
    Solid,
    /// `controls`
    Controls,
    /// `rule`
    Rule,
    /// `tick`
    Tick,
    /// `collide`
    Collide,
    /// `score`
    Score,
    /// `lose`
    Lose,

    // Punctuation
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,

    // Operators
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
}

impl TokenKind {
    /// Maps a word to its keyword kind, if it is one.
    ///
    /// `lives` is deliberately absent: it lexes as an identifier.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        let kind = match word {
            "game" => Self::Game,
            "speed" => Self::Speed,
            "grid" => Self::Grid,
            "color" => Self::Color,
            "entity" => Self::Entity,
            "spawn" => Self::Spawn,
            "solid" => Self::Solid,
            "controls" => Self::Controls,
            "rule" => Self::Rule,
            "tick" => Self::Tick,
            "collide" => Self::Collide,
            "score" => Self::Score,
            "lose" => Self::Lose,
            "true" => Self::True,
            "false" => Self::False,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true for reserved words, including `true` and `false`.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Game
                | Self::Speed
                | Self::Grid
                | Self::Color
                | Self::Entity
                | Self::Spawn
                | Self::Solid
                | Self::Controls
                | Self::Rule
                | Self::Tick
                | Self::Collide
                | Self::Score
                | Self::Lose
                | Self::True
                | Self::False
        )
    }

    /// Returns true for keywords that begin a top-level construct. Recovery
    /// stops in front of these.
    #[must_use]
    pub const fn starts_item(self) -> bool {
        matches!(
            self,
            Self::Game | Self::Entity | Self::Controls | Self::Rule
        )
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eof => "end of input",
            Self::Error => "invalid token",
            Self::Identifier => "identifier",
            Self::Integer => "integer",
            Self::HexColor => "hex color",
            Self::True => "'true'",
            Self::False => "'false'",
            Self::Game => "'game'",
            Self::Speed => "'speed'",
            Self::Grid => "'grid'",
            Self::Color => "'color'",
            Self::Entity => "'entity'",
            Self::Spawn => "'spawn'",
            Self::Solid => "'solid'",
            Self::Controls => "'controls'",
            Self::Rule => "'rule'",
            Self::Tick => "'tick'",
            Self::Collide => "'collide'",
            Self::Score => "'score'",
            Self::Lose => "'lose'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Assign => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::LessEq => "'<='",
            Self::GreaterEq => "'>='",
            Self::EqEq => "'=='",
            Self::NotEq => "'!='",
        }
    }
}
