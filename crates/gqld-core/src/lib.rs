pub mod config;
pub mod error;
pub mod key;

pub use config::{DedupConfig, DEFAULT_IDENTIFIER_FIELD, TYPE_FIELD};
pub use error::{DedupError, Result};
pub use key::{DedupKey, FieldPath};
