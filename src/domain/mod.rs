//! Business records and the forms that create or edit them.
//!
//! Pure data structures with no actor-specific concerns.

pub mod user;
pub mod product;
pub mod order;
pub mod settings;

pub use user::*;
pub use product::*;
pub use order::*;
pub use settings::*;

use crate::actor_framework::FrameworkError;

pub(crate) fn require(field: &str, value: &str) -> Result<(), FrameworkError> {
    if value.trim().is_empty() {
        return Err(FrameworkError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn require_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), FrameworkError> {
    if !allowed.contains(&value) {
        return Err(FrameworkError::Validation(format!(
            "{field} must be one of {}, got '{value}'",
            allowed.join(", ")
        )));
    }
    Ok(())
}

pub(crate) fn require_email(field: &str, value: &str) -> Result<(), FrameworkError> {
    require(field, value)?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(FrameworkError::Validation(format!("{field} is not a valid email address"))),
    }
}
