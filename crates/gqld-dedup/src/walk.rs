//! Generic depth-first walk over a decoded JSON tree.

use gqld_core::FieldPath;
use serde_json::{Map, Value};

/// What to do with an object the walk just reached.
pub enum Step {
    /// Keep the object and recurse into its fields.
    Descend,
    /// Substitute this value for the node and skip its subtree.
    Replace(Value),
}

/// Per-object hooks driven by [`walk`].
///
/// `enter_object` runs before any field of the object has been visited.
/// `leave_object` runs after every field has been rebuilt, and only when
/// `enter_object` chose [`Step::Descend`].
pub trait NodeVisitor {
    fn enter_object(&mut self, path: &FieldPath, object: &Map<String, Value>) -> Step;

    fn leave_object(&mut self, _path: &FieldPath, _object: &Map<String, Value>) {}
}

/// Depth-first, left-to-right rebuild of `node`.
///
/// Array elements are visited in ascending index order with the path left
/// unchanged; object fields extend the path by the field name for the
/// duration of the descent. Scalars are returned as-is. "First occurrence"
/// anywhere in this crate means first in this traversal order.
pub fn walk<V: NodeVisitor>(node: Value, path: &mut FieldPath, visitor: &mut V) -> Value {
    match node {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| walk(item, path, visitor))
                .collect(),
        ),
        Value::Object(map) => {
            if let Step::Replace(replacement) = visitor.enter_object(path, &map) {
                return replacement;
            }
            let map: Map<String, Value> = map
                .into_iter()
                .map(|(field, child)| {
                    path.push(&field);
                    let child = walk(child, path, visitor);
                    path.pop();
                    (field, child)
                })
                .collect();
            visitor.leave_object(path, &map);
            Value::Object(map)
        }
        scalar => scalar,
    }
}
