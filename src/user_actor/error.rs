use thiserror::Error;

use crate::actor_framework::{FrameworkError, RecordId};

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(RecordId),
    #[error("Username already exists: {0}")]
    AlreadyExists(String),
    #[error("User validation error: {0}")]
    ValidationError(String),
    #[error("User id conflict: {0}")]
    Conflict(RecordId),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    /// Whether the caller can fix this by changing the request.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::AlreadyExists(_) | Self::ValidationError(_))
    }
}

impl From<FrameworkError> for UserError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound { id, .. } => Self::NotFound(id),
            FrameworkError::DuplicateKey { value, .. } => Self::AlreadyExists(value),
            FrameworkError::Validation(msg) => Self::ValidationError(msg),
            FrameworkError::Conflict { id, .. } => Self::Conflict(id),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}
