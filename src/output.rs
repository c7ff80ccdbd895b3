//! Rendering expression trees back to source text.
//!
//! The formatter inserts only the parentheses needed to make the text parse
//! back to the same tree. Each operation decides for itself, from its own
//! precedence and its parent's, whether to wrap itself in parentheses:
//!
//! - a child that binds more loosely than its parent is always wrapped;
//! - a child at the same level is wrapped when it sits on the side the
//!   level's associativity would not group it with (the right side for
//!   left-to-right levels, the left side for right-to-left levels, either
//!   side for non-associative levels);
//! - literals are never wrapped.
//!
//! Operators are always surrounded by exactly one space.
//!
//! # Examples
//!
//! ```
//! use mathexpr::{format, parse};
//!
//! let tree = parse("((1 + 2)) * (3 * 4) - (5 - 6)").unwrap();
//! assert_eq!(format(&tree), "(1.0 + 2.0) * (3.0 * 4.0) - (5.0 - 6.0)");
//!
//! let tree = parse("(2 ** 3) ** 2 ** 1").unwrap();
//! assert_eq!(format(&tree), "(2.0 ** 3.0) ** 2.0 ** 1.0");
//! ```

use std::fmt;

use crate::ast::{Associativity, Node, Side};
use crate::registry::{registry, Registry};

impl Node {
    /// Render with minimal parentheses using the built-in operator table.
    pub fn format(&self) -> String {
        self.format_with(registry())
    }

    /// Render with minimal parentheses according to `registry`.
    ///
    /// Operations whose operator is missing from `registry` fall back to a
    /// function-style rendering such as `Add(1.0, 2.0)`.
    pub fn format_with(&self, registry: &Registry) -> String {
        match self {
            Node::Number(value) => format_number(*value),
            Node::BinaryOp { op, left, right } => match registry.descriptor_for(*op) {
                Some(d) => {
                    let outer = Some((d.precedence, d.associativity));
                    format!(
                        "{} {} {}",
                        left.format_child(registry, outer, Side::Left),
                        d.token,
                        right.format_child(registry, outer, Side::Right)
                    )
                }
                None => format!(
                    "{}({}, {})",
                    op.name(),
                    left.format_with(registry),
                    right.format_with(registry)
                ),
            },
        }
    }

    /// Render as the `side` operand of a parent with precedence and
    /// associativity `outer`, adding parentheses if they are required.
    ///
    /// `outer` is `None` at the top level.
    pub fn format_child(
        &self,
        registry: &Registry,
        outer: Option<(u32, Associativity)>,
        side: Side,
    ) -> String {
        let inner = self
            .op()
            .and_then(|op| registry.descriptor_for(op))
            .map(|d| d.precedence);

        let needs_parens = match (inner, outer) {
            (Some(inner), Some((outer, dir))) => {
                inner > outer || (inner == outer && dir.parens_on_tie(side))
            }
            _ => false,
        };

        if needs_parens {
            format!("({})", self.format_with(registry))
        } else {
            self.format_with(registry)
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Shortest text that parses back to exactly `value`, always with a decimal
/// point when finite.
///
/// ```
/// use mathexpr::output::format_number;
///
/// assert_eq!(format_number(14.0), "14.0");
/// assert_eq!(format_number(-2.1), "-2.1");
/// assert_eq!(format_number(1e16), "1.0e16");
/// ```
pub fn format_number(value: f64) -> String {
    let text = format!("{value:?}");
    if !value.is_finite() || text.contains('.') {
        return text;
    }
    match text.find('e') {
        Some(i) => format!("{}.0{}", &text[..i], &text[i..]),
        None => format!("{text}.0"),
    }
}
