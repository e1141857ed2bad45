//! Cross-layer integration tests for Brick
//!
//! Tests that drive source files through every layer: the compile pipeline,
//! the runtime loader, and the `brickc` command.

mod cli;
mod pipeline;
