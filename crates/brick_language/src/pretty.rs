//! Indented tree dump of a syntax tree.
//!
//! Each node is printed on its own line using its [`Node`] description, with
//! children indented one level below their parent.
//!
//! # Example
//!
//! ```
//! use brick_foundation::Diagnostics;
//! use brick_language::{parse, pretty::print_tree, Node};
//!
//! let mut diagnostics = Diagnostics::new();
//! let program = parse("game X { entity e { solid: true; } }", &mut diagnostics).unwrap();
//! let tree = print_tree(Node::Program(&program));
//! assert_eq!(
//!     tree,
//!     "Program(X)\n  Game(X)\n    Entity(e)\n      Setting(solid)\n        Boolean(true)\n"
//! );
//! ```

use std::fmt::Write;

use crate::ast::Node;

/// Configuration for the tree dump.
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
    /// Whether to append `@line:column` to every node.
    pub show_positions: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_positions: false,
        }
    }
}

/// Prints a node and its subtree with the default configuration.
#[must_use]
pub fn print_tree(node: Node<'_>) -> String {
    print_tree_with_config(node, &PrettyConfig::default())
}

/// Prints a node and its subtree with a custom configuration.
#[must_use]
pub fn print_tree_with_config(node: Node<'_>, config: &PrettyConfig) -> String {
    let mut output = String::new();
    write_node(&mut output, node, 0, config);
    output
}

fn write_node(output: &mut String, node: Node<'_>, depth: usize, config: &PrettyConfig) {
    let indent = depth * config.indent_width;
    let _ = write!(output, "{:indent$}{node}", "");
    if config.show_positions {
        let _ = write!(output, " @{}", node.span());
    }
    output.push('\n');
    for child in node.children() {
        write_node(output, child, depth + 1, config);
    }
}
