//! Application storage: an ordered collection of every record ever accepted.

pub mod json_file;

pub use json_file::JsonFileStore;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read or write the store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file holds invalid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("store file does not hold a JSON array")]
    NotAnArray,
}

/// The storage seam. Handlers depend on this trait, carried in `AppState`
/// as `Arc<dyn ApplicationStore>`, so the file-backed default can be swapped
/// without touching the endpoint or caller code.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Appends one record to the end of the persisted collection.
    async fn append(&self, record: Value) -> Result<(), StoreError>;
}
