//! Storage error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the persisted record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read or write the storage file.
    #[error("failed to access task storage: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to serialize or parse the persisted JSON.
    #[error("failed to encode task storage JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
