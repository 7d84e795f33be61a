use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SettingsError {
    #[error("Settings validation error: {0}")]
    ValidationError(String),
    /// The settings record was never seeded.
    #[error("Settings record missing")]
    Missing,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl SettingsError {
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}

impl From<FrameworkError> for SettingsError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound { .. } => Self::Missing,
            FrameworkError::Validation(msg) => Self::ValidationError(msg),
            other => Self::ActorCommunicationError(other.to_string()),
        }
    }
}
