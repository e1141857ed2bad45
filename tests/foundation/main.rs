//! Integration tests for Layer 0: Foundation
//!
//! Tests for the diagnostics sink, the fatal error type, and colors.

mod colors;
mod diagnostics;
