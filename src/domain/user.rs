use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actor_framework::RecordId;

pub const USER_ROLES: [&str; 3] = ["admin", "editor", "viewer"];
pub const USER_STATUSES: [&str; 3] = ["active", "inactive", "banned"];

/// An administrator-managed account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: RecordId,
    /// Unique, fixed at creation.
    pub username: String,
    pub email: String,
    pub real_name: String,
    pub phone: String,
    pub role: String,
    pub status: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Form for creating a user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub real_name: String,
    #[serde(default)]
    pub phone: String,
    pub role: String,
    pub status: String,
}

/// Form for editing a user. Every editable field is replaced; the username is not editable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub email: String,
    pub real_name: String,
    #[serde(default)]
    pub phone: String,
    pub role: String,
    pub status: String,
}
