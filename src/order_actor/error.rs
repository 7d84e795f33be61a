use thiserror::Error;

use crate::actor_framework::{FrameworkError, RecordId};

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(RecordId),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Order id conflict: {0}")]
    Conflict(RecordId),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::ValidationError(_))
    }
}

impl From<FrameworkError> for OrderError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound { id, .. } => Self::NotFound(id),
            FrameworkError::Validation(msg) => Self::ValidationError(msg),
            FrameworkError::Conflict { id, .. } => Self::Conflict(id),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}
