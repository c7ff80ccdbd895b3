//! The operator registry: the single definition of how every operator is
//! spelled, how tightly it binds and how it groups.
//!
//! The [parser](crate::parser) walks the registry's precedence levels from
//! the loosest down to atoms, and the [formatter](crate::output) asks it for
//! each node's precedence to decide where parentheses are needed. Because
//! both read the same table, text produced by the formatter always parses
//! back to the tree it came from.
//!
//! Precedence `0` is reserved for atoms (literals and parenthesised
//! sub-expressions). Larger numbers bind more loosely. Levels do not have to
//! be contiguous; the parser skips levels that have no operators.
//!
//! # Example
//!
//! ```
//! use mathexpr::registry::{registry, Registry};
//! use mathexpr::{Associativity, BinOp};
//!
//! let reg = registry();
//! assert_eq!(reg.max_precedence(), 3);
//! let pow = reg.descriptor_for(BinOp::Pow).unwrap();
//! assert_eq!(pow.token, "**");
//! assert_eq!(pow.associativity, Associativity::RightToLeft);
//!
//! // A registry can also be built from a custom table.
//! let custom = Registry::new(Registry::default_descriptors()).unwrap();
//! assert_eq!(custom.levels_by_precedence().count(), 3);
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use once_cell::sync::Lazy;

use crate::ast::{Associativity, BinOp, Node};

/// Everything the parser and formatter need to know about one operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorDescriptor {
    pub op: BinOp,
    pub precedence: u32,
    pub associativity: Associativity,
    /// Infix spelling in source text
    pub token: &'static str,
    /// Builds the node for `left <token> right`
    pub build: fn(Node, Node) -> Node,
}

impl OperatorDescriptor {
    pub fn new(
        op: BinOp,
        precedence: u32,
        associativity: Associativity,
        token: &'static str,
        build: fn(Node, Node) -> Node,
    ) -> Self {
        OperatorDescriptor {
            op,
            precedence,
            associativity,
            token,
            build,
        }
    }
}

/// All operators sharing one precedence.
#[derive(Debug, Clone)]
pub struct PrecedenceLevel {
    precedence: u32,
    associativity: Associativity,
    descriptors: Vec<OperatorDescriptor>,
    /// Longest first, so `**` is tried before `*`.
    sorted_tokens: Vec<&'static str>,
    by_token: HashMap<&'static str, OperatorDescriptor>,
}

impl PrecedenceLevel {
    fn new(precedence: u32, descriptors: Vec<OperatorDescriptor>) -> Result<Self, ConfigError> {
        let first = descriptors[0].associativity;
        if let Some(other) = descriptors.iter().find(|d| d.associativity != first) {
            return Err(ConfigError::MixedAssociativity {
                precedence,
                first,
                second: other.associativity,
            });
        }

        let mut sorted_tokens: Vec<&'static str> = descriptors.iter().map(|d| d.token).collect();
        sorted_tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let by_token = descriptors.iter().map(|d| (d.token, *d)).collect();

        Ok(PrecedenceLevel {
            precedence,
            associativity: first,
            descriptors,
            sorted_tokens,
            by_token,
        })
    }

    pub fn precedence(&self) -> u32 {
        self.precedence
    }

    pub fn associativity(&self) -> Associativity {
        self.associativity
    }

    pub fn descriptors(&self) -> &[OperatorDescriptor] {
        &self.descriptors
    }

    /// Infix tokens of this level, longest first.
    pub fn sorted_tokens(&self) -> &[&'static str] {
        &self.sorted_tokens
    }

    pub fn descriptor_for_token(&self, token: &str) -> Option<&OperatorDescriptor> {
        self.by_token.get(token)
    }
}

/// An immutable operator table grouped by precedence level.
#[derive(Debug, Clone)]
pub struct Registry {
    by_op: HashMap<BinOp, OperatorDescriptor>,
    levels: HashMap<u32, PrecedenceLevel>,
    /// Registered precedences, ascending
    order: Vec<u32>,
    max_precedence: u32,
}

impl Registry {
    /// Build a registry, validating the table.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the table is empty, uses the reserved
    /// precedence `0`, has an empty or duplicated token, registers the same
    /// operator twice, or mixes associativities within one level.
    pub fn new(descriptors: Vec<OperatorDescriptor>) -> Result<Self, ConfigError> {
        if descriptors.is_empty() {
            return Err(ConfigError::EmptyTable);
        }

        let mut by_op = HashMap::new();
        let mut tokens = HashSet::new();
        let mut grouped: HashMap<u32, Vec<OperatorDescriptor>> = HashMap::new();

        for descriptor in descriptors {
            if descriptor.precedence == 0 {
                return Err(ConfigError::ReservedPrecedence { op: descriptor.op });
            }
            if descriptor.token.is_empty() {
                return Err(ConfigError::EmptyToken { op: descriptor.op });
            }
            if !tokens.insert(descriptor.token) {
                return Err(ConfigError::DuplicateToken {
                    token: descriptor.token,
                });
            }
            if by_op.insert(descriptor.op, descriptor).is_some() {
                return Err(ConfigError::DuplicateOperator { op: descriptor.op });
            }
            grouped
                .entry(descriptor.precedence)
                .or_default()
                .push(descriptor);
        }

        let mut order: Vec<u32> = grouped.keys().copied().collect();
        order.sort_unstable();

        let mut levels = HashMap::with_capacity(grouped.len());
        for (precedence, members) in grouped {
            levels.insert(precedence, PrecedenceLevel::new(precedence, members)?);
        }

        let max_precedence = order.last().copied().unwrap_or(0);
        log::debug!(
            "built operator registry: {} operators over {} levels, max precedence {}",
            by_op.len(),
            levels.len(),
            max_precedence
        );

        Ok(Registry {
            by_op,
            levels,
            order,
            max_precedence,
        })
    }

    /// The built-in arithmetic table.
    pub fn default_descriptors() -> Vec<OperatorDescriptor> {
        use Associativity::*;

        vec![
            OperatorDescriptor::new(BinOp::Pow, 1, RightToLeft, "**", |l, r| {
                Node::binary(BinOp::Pow, l, r)
            }),
            OperatorDescriptor::new(BinOp::Mul, 2, LeftToRight, "*", |l, r| {
                Node::binary(BinOp::Mul, l, r)
            }),
            OperatorDescriptor::new(BinOp::Div, 2, LeftToRight, "/", |l, r| {
                Node::binary(BinOp::Div, l, r)
            }),
            OperatorDescriptor::new(BinOp::Add, 3, LeftToRight, "+", |l, r| {
                Node::binary(BinOp::Add, l, r)
            }),
            OperatorDescriptor::new(BinOp::Sub, 3, LeftToRight, "-", |l, r| {
                Node::binary(BinOp::Sub, l, r)
            }),
        ]
    }

    /// Loosest registered precedence; parsing starts here.
    pub fn max_precedence(&self) -> u32 {
        self.max_precedence
    }

    pub fn descriptor_for(&self, op: BinOp) -> Option<&OperatorDescriptor> {
        self.by_op.get(&op)
    }

    /// `None` for unregistered precedences (including `0`).
    pub fn level_for(&self, precedence: u32) -> Option<&PrecedenceLevel> {
        self.levels.get(&precedence)
    }

    /// Levels in ascending precedence order (tightest first).
    pub fn levels_by_precedence(&self) -> impl Iterator<Item = &PrecedenceLevel> {
        self.order.iter().filter_map(|p| self.levels.get(p))
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    Registry::new(Registry::default_descriptors())
        .unwrap_or_else(|e| panic!("built-in operator table is invalid: {e}"))
});

/// The process-wide registry built from [`Registry::default_descriptors`].
///
/// Built on first use and read-only afterwards, so it is safe to share
/// between threads.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// A problem with an operator table, reported while building a [`Registry`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// No operators at all
    EmptyTable,

    /// Precedence `0` belongs to atoms
    ReservedPrecedence { op: BinOp },

    /// Operator spelled with an empty string
    EmptyToken { op: BinOp },

    /// Two operators share a spelling
    DuplicateToken { token: &'static str },

    /// The same operator appears twice
    DuplicateOperator { op: BinOp },

    /// One level declares two different associativities
    MixedAssociativity {
        precedence: u32,
        first: Associativity,
        second: Associativity,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyTable => write!(f, "operator table is empty"),
            ConfigError::ReservedPrecedence { op } => {
                write!(f, "operator {op} uses precedence 0, which is reserved for atoms")
            }
            ConfigError::EmptyToken { op } => write!(f, "operator {op} has an empty infix token"),
            ConfigError::DuplicateToken { token } => {
                write!(f, "infix token '{token}' is registered more than once")
            }
            ConfigError::DuplicateOperator { op } => {
                write!(f, "operator {op} is registered more than once")
            }
            ConfigError::MixedAssociativity {
                precedence,
                first,
                second,
            } => write!(
                f,
                "precedence level {precedence} mixes {first:?} and {second:?} associativity"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
