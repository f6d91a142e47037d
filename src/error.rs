use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the post store and its storage backends.
///
/// Malformed persisted data is deliberately not an error: the store logs it
/// and starts from an empty collection instead (see `PostStore::open`).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize post collection: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not determine a data directory for this platform")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, StoreError>;
