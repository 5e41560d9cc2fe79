use thiserror::Error;

#[derive(Error, Debug)]
pub enum DedupError {
    #[error("malformed document: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("document serialization failed: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DedupError>;
