//! Symbol table, validation, and reports for BrickLang games.
//!
//! This crate provides:
//! - [`SymbolTable`] - The queryable model built from a parsed program
//! - [`AnalysisConfig`] - Strictness switches for population and validation
//! - [`Snapshot`] - Serializable view of a model, rendered to JSON
//!
//! Typical use is populate, then validate, checking the diagnostics sink
//! between the two:
//!
//! ```
//! use brick_foundation::Diagnostics;
//! use brick_language::parse;
//! use brick_semantic::SymbolTable;
//!
//! let mut diagnostics = Diagnostics::new();
//! let program = parse("game X { entity e { solid: true; } }", &mut diagnostics).unwrap();
//! let mut table = SymbolTable::new();
//! assert!(table.populate(&program, &mut diagnostics));
//! assert!(table.validate(&mut diagnostics));
//! assert!(table.entity("e").unwrap().solid);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod analyzer;
pub mod config;
pub mod model;
pub mod report;
pub mod table;
mod validate;

pub use config::AnalysisConfig;
pub use model::{Control, Entity, GameSettings, GridSize, Position, Rule};
pub use report::{RuleSnapshot, SettingsSnapshot, Snapshot};
pub use table::SymbolTable;
