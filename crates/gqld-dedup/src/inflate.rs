//! Expansion: restore stubbed entities to their first-seen full form.

use crate::walk::{walk, NodeVisitor, Step};
use gqld_core::{DedupConfig, DedupKey, FieldPath};
use serde_json::{Map, Value};
use std::collections::HashMap;

struct Inflater<'a> {
    identifier_field: &'a str,
    seen: HashMap<DedupKey, Value>,
    inflated: bool,
}

impl NodeVisitor for Inflater<'_> {
    fn enter_object(&mut self, path: &FieldPath, object: &Map<String, Value>) -> Step {
        let Some(key) = DedupKey::for_object(path, self.identifier_field, object) else {
            return Step::Descend;
        };
        match self.seen.get(&key) {
            Some(first) => {
                // The memoized node already carries its fully expanded
                // subtree; the stub's own fields are discarded.
                self.inflated = true;
                Step::Replace(first.clone())
            }
            None => Step::Descend,
        }
    }

    fn leave_object(&mut self, path: &FieldPath, object: &Map<String, Value>) {
        // Memoized after the descent, so nested repeats inside the first
        // occurrence are already expanded in the stored form.
        if let Some(key) = DedupKey::for_object(path, self.identifier_field, object) {
            self.seen
                .entry(key)
                .or_insert_with(|| Value::Object(object.clone()));
        }
    }
}

/// Expand `value`, replacing every repeated entity with the full form of its
/// first occurrence.
///
/// Defined independently of [`deflate_value`](crate::deflate::deflate_value):
/// every non-first occurrence of a `(path, type, id)` triple is rewritten to
/// match the first, whether or not it is a stub. On a tree with no repeats
/// this is a no-op. Replacements are deep copies, so positions in the result
/// never share structure.
pub fn inflate_value(value: Value, config: &DedupConfig) -> (Value, bool) {
    let mut inflater = Inflater {
        identifier_field: &config.identifier_field,
        seen: HashMap::new(),
        inflated: false,
    };
    let value = walk(value, &mut FieldPath::root(), &mut inflater);
    (value, inflater.inflated)
}
