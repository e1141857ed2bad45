//! Lexer, parser, and syntax tree for BrickLang.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of BrickLang source
//! - [`Parser`] - Recursive descent parsing with panic-mode recovery
//! - [`ast`] - The owned syntax tree and the [`Node`] view used to walk it
//! - [`pretty`] - Indented tree dumps
//!
//! All problems are recorded in a caller-provided
//! [`Diagnostics`](brick_foundation::Diagnostics) sink.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod span;
pub mod token;


pub use ast::{
    BinaryOperator, ControlDecl, EntityDecl, Expr, Game, Node, Program, RuleDecl, Setting,
    Statement,
};
pub use lexer::Lexer;
pub use parser::{Parser, parse};
pub use pretty::{PrettyConfig, print_tree, print_tree_with_config};
pub use span::Span;
pub use token::{Token, TokenKind};
