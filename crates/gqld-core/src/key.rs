//! Structural paths and deduplication keys.

use crate::config::TYPE_FIELD;
use serde_json::{Map, Value};
use std::fmt;

/// Position of a node, as the object field names from the document root.
///
/// Descending into an array element does not extend the path, so every
/// element of one array shares its parent's path. Deduplication is thereby
/// scoped to "the same logical slot across repeated records" rather than
/// the whole document: two entities with the same type and id but reached
/// through different field names never collapse into each other.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Path of the document root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str) {
        self.segments.push(field.to_owned());
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Scope under which two objects count as the same entity: structural path
/// plus type tag plus identifier.
///
/// The tag and identifier components hold the canonical JSON text of the
/// underlying values, so a string `"1"` and a number `1` remain distinct
/// identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DedupKey {
    path: FieldPath,
    type_tag: String,
    identifier: String,
}

impl DedupKey {
    /// Key for an eligible object, or `None` when the type tag or the
    /// identifier field is absent or null.
    pub fn for_object(
        path: &FieldPath,
        identifier_field: &str,
        object: &Map<String, Value>,
    ) -> Option<Self> {
        let type_tag = non_null(object, TYPE_FIELD)?;
        let identifier = non_null(object, identifier_field)?;
        Some(Self {
            path: path.clone(),
            type_tag: type_tag.to_string(),
            identifier: identifier.to_string(),
        })
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }
}

fn non_null<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|v| !v.is_null())
}
