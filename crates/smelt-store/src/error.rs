/// Errors from store operations.
///
/// Table reads and writes never fail; these cover the debug dump only.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Serialization of a table dump failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
