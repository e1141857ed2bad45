//! Integration tests for Layer 1: Language
//!
//! Tests for the lexer, the parser and its error recovery, and the tree dump.

mod lexer;
