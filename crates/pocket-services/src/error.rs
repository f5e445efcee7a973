use pocket_domain::{EntryKind, EntryValidationError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("{kind} not found: {id}")]
    EntryNotFound { kind: EntryKind, id: Uuid },
    #[error("Validation failed: {0}")]
    Validation(#[from] EntryValidationError),
    #[error("Storage error: {0}")]
    Storage(String),
}
