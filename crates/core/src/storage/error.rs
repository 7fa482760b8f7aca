use thiserror::Error;

/// Errors that can occur in the durable key-value layer.
///
/// Callers are expected to degrade gracefully: a failed write leaves the
/// in-memory state authoritative for the rest of the session, and a corrupt
/// stored record is treated as absent on load.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage I/O failed for key '{key}': {message}")]
    Io { key: String, message: String },
    #[error("Serialization failed for key '{key}': {message}")]
    Serialization { key: String, message: String },
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
