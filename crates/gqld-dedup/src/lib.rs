//! GraphQL response deduplication — inverse deflate/inflate tree transforms.
//!
//! A response that carries the same entity at the same logical field position
//! more than once is compacted by replacing every occurrence after the first
//! with a minimal `{id, __typename}` stub; inflating restores each stub to
//! the full form of the first occurrence. Over any tree whose repeated
//! entities are field-identical, the two transforms are exact inverses.

pub mod dedup;
pub mod deflate;
pub mod inflate;
pub mod walk;

pub use dedup::{
    deflate, deflate_with_identifier, inflate, inflate_with_identifier, Deduplicator,
    DeflateResult, InflateResult,
};
pub use deflate::deflate_value;
pub use inflate::inflate_value;
