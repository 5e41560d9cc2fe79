//! Byte-buffer entry points: decode, transform, re-encode.

use crate::deflate::deflate_value;
use crate::inflate::inflate_value;
use gqld_core::{DedupConfig, DedupError, Result};
use serde_json::Value;

/// Outcome of a deflate call.
#[derive(Debug, Clone)]
pub struct DeflateResult {
    /// Re-encoded document with repeated entities stubbed.
    pub data: Vec<u8>,
    /// Whether at least one entity was stubbed.
    pub deflated: bool,
    pub original_len: usize,
    pub deflated_len: usize,
}

impl DeflateResult {
    /// Output size relative to input size.
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 1.0;
        }
        self.deflated_len as f64 / self.original_len as f64
    }
}

/// Outcome of an inflate call.
#[derive(Debug, Clone)]
pub struct InflateResult {
    /// Re-encoded document with every stub expanded.
    pub data: Vec<u8>,
    /// Whether at least one entity was expanded.
    pub inflated: bool,
}

/// Configured entry point for the deflate/inflate pair.
///
/// Each call decodes the buffer, runs one transform with a private memo and
/// re-encodes; calls share no state and may run on separate threads freely.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    config: DedupConfig,
}

impl Deduplicator {
    /// Deduplicator keyed on the default `"id"` identifier field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deduplicator keyed on a custom identifier field.
    pub fn with_identifier(identifier_field: impl Into<String>) -> Self {
        Self::with_config(DedupConfig::new(identifier_field))
    }

    pub fn with_config(config: DedupConfig) -> Self {
        Self { config }
    }

    /// Compact a JSON document, stubbing repeated entities.
    ///
    /// Fails only when `data` is not a well-formed JSON document; the error
    /// is raised before any traversal work and no partial output exists.
    pub fn deflate(&self, data: &[u8]) -> Result<DeflateResult> {
        let node = decode(data)?;
        let (node, deflated) = deflate_value(node, &self.config);
        let out = encode(&node)?;
        tracing::debug!(
            original_len = data.len(),
            deflated_len = out.len(),
            deflated,
            "deflate"
        );
        Ok(DeflateResult {
            original_len: data.len(),
            deflated_len: out.len(),
            data: out,
            deflated,
        })
    }

    /// Expand a compacted JSON document back to full form.
    ///
    /// Must be keyed on the same identifier field the document was deflated
    /// with; a stubbed node is structurally incomplete until expanded.
    pub fn inflate(&self, data: &[u8]) -> Result<InflateResult> {
        let node = decode(data)?;
        let (node, inflated) = inflate_value(node, &self.config);
        let out = encode(&node)?;
        tracing::debug!(
            original_len = data.len(),
            inflated_len = out.len(),
            inflated,
            "inflate"
        );
        Ok(InflateResult { data: out, inflated })
    }

    /// Value-level deflate for callers that already hold a decoded tree.
    pub fn deflate_tree(&self, value: Value) -> (Value, bool) {
        deflate_value(value, &self.config)
    }

    /// Value-level inflate for callers that already hold a decoded tree.
    pub fn inflate_tree(&self, value: Value) -> (Value, bool) {
        inflate_value(value, &self.config)
    }
}

fn decode(data: &[u8]) -> Result<Value> {
    serde_json::from_slice(data).map_err(DedupError::Decode)
}

fn encode(node: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec(node).map_err(DedupError::Encode)
}

/// Compact a JSON document using the default `"id"` identifier field.
pub fn deflate(data: &[u8]) -> Result<DeflateResult> {
    Deduplicator::new().deflate(data)
}

/// Compact a JSON document using a custom identifier field.
pub fn deflate_with_identifier(data: &[u8], identifier_field: &str) -> Result<DeflateResult> {
    Deduplicator::with_identifier(identifier_field).deflate(data)
}

/// Expand a compacted JSON document using the default `"id"` identifier field.
pub fn inflate(data: &[u8]) -> Result<InflateResult> {
    Deduplicator::new().inflate(data)
}

/// Expand a compacted JSON document using a custom identifier field.
pub fn inflate_with_identifier(data: &[u8], identifier_field: &str) -> Result<InflateResult> {
    Deduplicator::with_identifier(identifier_field).inflate(data)
}
