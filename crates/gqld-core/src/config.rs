use serde::{Deserialize, Serialize};

/// Type-tag field every deduplicatable object must carry.
pub const TYPE_FIELD: &str = "__typename";

/// Identifier field used when none is configured.
pub const DEFAULT_IDENTIFIER_FIELD: &str = "id";

/// Field names that make an object eligible for deduplication.
///
/// The type tag is always [`TYPE_FIELD`]; only the identifier field is
/// configurable. Both must hold non-null values on a node for it to be
/// deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupConfig {
    pub identifier_field: String,
}

impl DedupConfig {
    pub fn new(identifier_field: impl Into<String>) -> Self {
        Self {
            identifier_field: identifier_field.into(),
        }
    }
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTIFIER_FIELD)
    }
}
