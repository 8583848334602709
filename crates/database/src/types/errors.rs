//! Error types for the database layer

use thiserror::Error;

/// Store-level failure. Callers treat it as opaque: the message may contain
/// SQL or driver details and must not cross the service boundary.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Database migration error: {0}")]
    MigrationError(String),

    #[error("Database query error: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Column encoding error: {0}")]
    EncodingError(#[from] serde_json::Error),
}

impl DatabaseError {
    /// True when the store rejected the statement because of a constraint,
    /// such as a message pointing at a chat that no longer exists.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            DatabaseError::QueryError(sqlx::Error::Database(db_error)) => matches!(
                db_error.kind(),
                sqlx::error::ErrorKind::ForeignKeyViolation
                    | sqlx::error::ErrorKind::UniqueViolation
                    | sqlx::error::ErrorKind::NotNullViolation
                    | sqlx::error::ErrorKind::CheckViolation
            ),
            _ => false,
        }
    }
}
