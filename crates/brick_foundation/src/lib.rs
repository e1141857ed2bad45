//! Shared building blocks for the BrickLang compiler.
//!
//! This crate provides:
//! - [`Diagnostics`] - The accumulating, per-compilation error sink
//! - [`Error`] - Fatal errors (unreadable source, serialization failure)
//! - [`Rgb`] - 24-bit color values

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod color;
pub mod diagnostic;
pub mod error;

pub use color::Rgb;
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{Error, ErrorKind, Result};
