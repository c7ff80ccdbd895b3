//! # Arithmetic Expressions - Abstract Syntax Tree
//!
//! This module defines the tree that the [parser](crate::parser) produces and
//! the [formatter](crate::output) renders back to text.
//!
//! ## Architecture Overview
//!
//! - **[node]** - the [`Node`] type: numeric literals and binary operations,
//!   plus evaluation
//! - **[operators]** - [`BinOp`], [`Associativity`] and [`Side`]
//!
//! What an operator is *spelled* like and how tightly it binds is not part of
//! the tree. Both directions (text to tree and tree to text) read that from
//! the shared [`Registry`](crate::registry::Registry).
//!
//! ## Grammar
//!
//! With the built-in operator table, loosest level first:
//!
//! ```text
//! Expr      := AddLevel
//! AddLevel  := MulLevel (("+"|"-") MulLevel)*        ; left-assoc
//! MulLevel  := PowLevel (("*"|"/") PowLevel)*        ; left-assoc
//! PowLevel  := Atom ("**" PowLevel)?                 ; right-assoc
//! Atom      := "(" Expr ")" | Number
//! Number    := [+-]? ([0-9]*\.[0-9]+ | [0-9]+\.?) ([eE][+-]?[0-9]+)?
//! ```
//!
//! ## Examples
//!
//! ```text
//! 2 + 3 * 4        // Add(2, Mul(3, 4))      = 14
//! 8 - 4 - 2        // Sub(Sub(8, 4), 2)      = 2
//! 2 ** 3 ** 2      // Pow(2, Pow(3, 2))      = 512
//! 2 * -3           // Mul(2, -3): the sign belongs to the literal
//! ```
pub mod node;
pub mod operators;

pub use node::Node;
pub use operators::{Associativity, BinOp, Side};
