//! Brick - Compiler front end for BrickLang
//!
//! This crate re-exports all layers of the Brick system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: brick_runtime     - Compile pipeline, runtime loader, brickc CLI
//! Layer 2: brick_semantic    - Symbol table, validation, reports
//! Layer 1: brick_language    - Lexer, parser, AST, tree printer
//! Layer 0: brick_foundation  - Diagnostics, Error, colors
//! ```

pub use brick_foundation as foundation;
pub use brick_language as language;
pub use brick_runtime as runtime;
pub use brick_semantic as semantic;
