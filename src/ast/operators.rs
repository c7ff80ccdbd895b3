use std::fmt;

/// Binary arithmetic operators.
///
/// The spelling, precedence and grouping of each operator live in the
/// [`Registry`](crate::registry::Registry); this type only knows how to
/// combine two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
}

impl BinOp {
    /// Apply the operator with IEEE-754 double semantics.
    ///
    /// Division by zero gives an infinity or NaN rather than an error, and
    /// `Pow` follows [`f64::powf`] (so `x ** 0.0 == 1.0` and a negative base
    /// with a fractional exponent is NaN).
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => left / right,
            BinOp::Pow => left.powf(right),
        }
    }

    /// Name used in function-style rendering and tree export.
    pub fn name(self) -> &'static str {
        match self {
            BinOp::Add => "Add",
            BinOp::Sub => "Sub",
            BinOp::Mul => "Mul",
            BinOp::Div => "Div",
            BinOp::Pow => "Pow",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How repeated operators of one precedence level group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`
    LeftToRight,
    /// `a ** b ** c` is `a ** (b ** c)`
    RightToLeft,
    /// Chaining requires explicit parentheses.
    NonAssociative,
}

impl Associativity {
    /// Whether a child with the *same* precedence as its parent needs
    /// parentheses when it sits on `side` of the parent.
    pub fn parens_on_tie(self, side: Side) -> bool {
        match self {
            Associativity::LeftToRight => side == Side::Right,
            Associativity::RightToLeft => side == Side::Left,
            Associativity::NonAssociative => true,
        }
    }
}

/// Which operand of a binary operation a child occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}
