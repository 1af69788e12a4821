//! DocumentStorePort - moving saved sheets in and out of the process
//!
//! The store only deals in bytes under a name. Parsing and serialization
//! stay in `sheetkeep-shared`.

use async_trait::async_trait;

/// Errors from a document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No saved sheet at {0}")]
    NotFound(String),

    #[error("I/O error at {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Byte source and sink for saved character sheets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// Read the whole document stored under `name`.
    async fn read_bytes(&self, name: &str) -> Result<Vec<u8>, StoreError>;

    /// Store `bytes` under `name`, returning where they were written.
    async fn write_bytes(&self, name: &str, bytes: &[u8]) -> Result<String, StoreError>;
}
