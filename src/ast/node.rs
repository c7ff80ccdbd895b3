use crate::ast::BinOp;

/// Abstract Syntax Tree node for an arithmetic expression.
///
/// Trees are plain owned values: every operation owns its two children and
/// nothing is shared, so a tree can be cloned, compared and dropped freely.
///
/// # Example
/// ```
/// use mathexpr::{BinOp, Node};
///
/// // 1.0 + 2.0 * 3.0
/// let tree = Node::binary(
///     BinOp::Add,
///     Node::number(1.0),
///     Node::binary(BinOp::Mul, Node::number(2.0), Node::number(3.0)),
/// );
/// assert_eq!(tree.evaluate(), 7.0);
/// ```
#[derive(Debug, Clone)]
pub enum Node {
    /// Numeric literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -2.5
    /// .3e-4
    /// ```
    Number(f64),

    /// Binary operation
    ///
    /// # Examples
    /// ```text
    /// 1 + 2
    /// (1 + 2) * 3
    /// 2 ** 3 ** 2
    /// ```
    BinaryOp {
        op: BinOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn number(value: f64) -> Self {
        Node::Number(value)
    }

    pub fn binary(op: BinOp, left: Node, right: Node) -> Self {
        Node::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluate the tree to a double.
    ///
    /// Never fails: every operator follows IEEE-754, so problems such as
    /// `1 / 0` surface as infinities or NaN in the result.
    pub fn evaluate(&self) -> f64 {
        match self {
            Node::Number(value) => *value,
            Node::BinaryOp { op, left, right } => op.apply(left.evaluate(), right.evaluate()),
        }
    }

    /// The operator of an operation node, `None` for literals.
    pub fn op(&self) -> Option<BinOp> {
        match self {
            Node::Number(_) => None,
            Node::BinaryOp { op, .. } => Some(*op),
        }
    }
}

// Literals compare by bit pattern so that a tree always equals itself
// (NaN included) and `0.0` stays distinct from `-0.0`.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Number(a), Node::Number(b)) => a.to_bits() == b.to_bits(),
            (
                Node::BinaryOp {
                    op: op_a,
                    left: left_a,
                    right: right_a,
                },
                Node::BinaryOp {
                    op: op_b,
                    left: left_b,
                    right: right_b,
                },
            ) => op_a == op_b && left_a == left_b && right_a == right_b,
            _ => false,
        }
    }
}

impl Eq for Node {}
