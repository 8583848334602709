//! Error types for the gateway layer

use parley_access::AccessError;
use parley_chats::ChatError;
use parley_database::DatabaseError;
use thiserror::Error;
use tonic::Status;

/// Gateway error types
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("permission denied")]
    PermissionDenied(#[from] AccessError),

    #[error("internal error")]
    Internal(#[source] DatabaseError),
}

impl GatewayError {
    /// Status returned to the caller. Store details stay out of the message.
    pub fn status(&self) -> Status {
        match self {
            GatewayError::InvalidArgument(message) => Status::invalid_argument(message.clone()),
            GatewayError::PermissionDenied(_) => Status::permission_denied(self.to_string()),
            GatewayError::Internal(_) => Status::internal(self.to_string()),
        }
    }
}

impl From<ChatError> for GatewayError {
    fn from(error: ChatError) -> Self {
        match error {
            ChatError::Validation { message } => GatewayError::InvalidArgument(message),
            ChatError::Store(source) => GatewayError::Internal(source),
        }
    }
}

impl From<GatewayError> for Status {
    fn from(error: GatewayError) -> Self {
        error.status()
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
