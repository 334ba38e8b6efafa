/// Core error types for Groove
use thiserror::Error;

/// Result type alias using `GrooveError`
pub type Result<T> = std::result::Result<T, GrooveError>;

/// Core error type for Groove
#[derive(Error, Debug)]
pub enum GrooveError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A fixture referenced a natural key that was never inserted
    #[error("Unresolved {kind} reference: {name:?}")]
    UnresolvedReference { kind: String, name: String },

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl GrooveError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create an unresolved reference error
    pub fn unresolved(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for GrooveError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
