//! Infix arithmetic expressions: parse, evaluate, and render back to text.
//!
//! ```
//! use mathexpr::{evaluate, format, parse};
//!
//! let tree = parse("2 + 3 * (4 - 1) ** 2").unwrap();
//! assert_eq!(evaluate(&tree), 29.0);
//! assert_eq!(format(&tree), "2.0 + 3.0 * (4.0 - 1.0) ** 2.0");
//! ```
//!
//! Operator spelling, precedence and associativity come from one shared
//! [`Registry`]; see the [`registry`] module.
pub mod ast;
pub mod cursor;
pub mod output;
pub mod parser;
pub mod registry;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Associativity, BinOp, Node, Side};
pub use parser::{ParseError, Parser};
pub use registry::{ConfigError, OperatorDescriptor, PrecedenceLevel, Registry};

/// Parse `text` with the built-in operator table.
pub fn parse(text: &str) -> Result<Node, ParseError> {
    Parser::new(text).parse()
}

pub fn evaluate(node: &Node) -> f64 {
    node.evaluate()
}

/// Render `node` with minimal parentheses.
pub fn format(node: &Node) -> String {
    node.format()
}
