//! Node -> JSON conversion for `--tree` output

use crate::Node;

/// Convert an expression tree to a serde_json::Value
///
/// Literals become JSON numbers (`null` when not finite), operations become
/// `{"op": "Add", "left": ..., "right": ...}`.
pub fn node_to_json(node: &Node) -> serde_json::Value {
    match node {
        Node::Number(value) => serde_json::Number::from_f64(*value)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Node::BinaryOp { op, left, right } => serde_json::json!({
            "op": op.name(),
            "left": node_to_json(left),
            "right": node_to_json(right),
        }),
    }
}
