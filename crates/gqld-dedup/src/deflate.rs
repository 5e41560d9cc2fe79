//! Compaction: replace repeated entities with minimal stubs.

use crate::walk::{walk, NodeVisitor, Step};
use gqld_core::{DedupConfig, DedupKey, FieldPath, TYPE_FIELD};
use serde_json::{Map, Value};
use std::collections::HashSet;

struct Deflater<'a> {
    identifier_field: &'a str,
    seen: HashSet<DedupKey>,
    deflated: bool,
}

impl NodeVisitor for Deflater<'_> {
    fn enter_object(&mut self, path: &FieldPath, object: &Map<String, Value>) -> Step {
        let Some(key) = DedupKey::for_object(path, self.identifier_field, object) else {
            return Step::Descend;
        };
        if self.seen.insert(key) {
            // First occurrence: kept in full, and its fields are still
            // searched for repeats further down.
            return Step::Descend;
        }
        self.deflated = true;
        Step::Replace(Value::Object(self.stub(object)))
    }
}

impl Deflater<'_> {
    /// Minimal replacement for a repeated entity: identifier and type tag only.
    fn stub(&self, object: &Map<String, Value>) -> Map<String, Value> {
        let mut stub = Map::new();
        for field in [self.identifier_field, TYPE_FIELD] {
            if let Some(value) = object.get(field) {
                stub.insert(field.to_owned(), value.clone());
            }
        }
        stub
    }
}

/// Compact `value`, stubbing every entity already seen at the same path.
///
/// Returns the rebuilt tree and whether any node was stubbed.
pub fn deflate_value(value: Value, config: &DedupConfig) -> (Value, bool) {
    let mut deflater = Deflater {
        identifier_field: &config.identifier_field,
        seen: HashSet::new(),
        deflated: false,
    };
    let value = walk(value, &mut FieldPath::root(), &mut deflater);
    (value, deflater.deflated)
}
