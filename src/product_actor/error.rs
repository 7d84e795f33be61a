use thiserror::Error;

use crate::actor_framework::{FrameworkError, RecordId};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(RecordId),
    #[error("SKU already exists: {0}")]
    AlreadyExists(String),
    #[error("Product validation error: {0}")]
    ValidationError(String),
    #[error("Product id conflict: {0}")]
    Conflict(RecordId),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::AlreadyExists(_) | Self::ValidationError(_))
    }
}

impl From<FrameworkError> for ProductError {
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
