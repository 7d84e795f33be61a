use std::convert::Infallible;

use chrono::{DateTime, Utc};

use crate::actor_framework::{Entity, FrameworkError, RecordId};
use crate::domain::{require, require_email, require_one_of, User, UserCreate, UserUpdate, USER_ROLES, USER_STATUSES};
use crate::query::Searchable;

fn validate_profile(email: &str, real_name: &str, role: &str, status: &str) -> Result<(), FrameworkError> {
    require_email("email", email)?;
    require("real_name", real_name)?;
    require_one_of("role", role, &USER_ROLES)?;
    require_one_of("status", status, &USER_STATUSES)
}

impl Entity for User {
    type CreateParams = UserCreate;
    type Patch = UserUpdate;
    type Action = Infallible;

    const KIND: &'static str = "User";
    const UNIQUE_FIELD: Option<&'static str> = Some("username");

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.username)
    }

    fn create_key(params: &UserCreate) -> Option<&str> {
        Some(&params.username)
    }

    fn validate_create(params: &UserCreate) -> Result<(), FrameworkError> {
        require("username", &params.username)?;
        validate_profile(&params.email, &params.real_name, &params.role, &params.status)
    }

    /// Creates a new User from a validated form.
    ///
    /// The avatar is picked from the placeholder pool by id.
    fn from_create_params(id: RecordId, params: UserCreate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: params.username,
            email: params.email,
            real_name: params.real_name,
            phone: params.phone,
            role: params.role,
            status: params.status,
            avatar: format!("https://i.pravatar.cc/150?img={}", id % 70 + 1),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces email, real name, phone, role and status.
    fn on_update(&mut self, update: UserUpdate) -> Result<(), FrameworkError> {
        validate_profile(&update.email, &update.real_name, &update.role, &update.status)?;
        self.email = update.email;
        self.real_name = update.real_name;
        self.phone = update.phone;
        self.role = update.role;
        self.status = update.status;
        Ok(())
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), FrameworkError> {
        match action {}
    }
}

impl Searchable for User {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.username.as_str(), self.email.as_str(), self.real_name.as_str()]
    }

    fn filter_field(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> UserCreate {
        UserCreate {
            username: "alice".into(),
            email: "alice@example.com".into(),
            real_name: "Alice".into(),
            phone: String::new(),
            role: "editor".into(),
            status: "active".into(),
        }
    }

    #[test]
    fn create_validation() {
        assert!(User::validate_create(&form()).is_ok());

        let mut bad = form();
        bad.username = "  ".into();
        assert!(matches!(User::validate_create(&bad), Err(FrameworkError::Validation(_))));

        let mut bad = form();
        bad.email = "not-an-email".into();
        assert!(matches!(User::validate_create(&bad), Err(FrameworkError::Validation(_))));

        let mut bad = form();
        bad.role = "owner".into();
        assert!(matches!(User::validate_create(&bad), Err(FrameworkError::Validation(_))));
    }

    #[test]
    fn update_keeps_username_and_creation_time() {
        let now = Utc::now();
        let mut user = User::from_create_params(31, form(), now);
        assert_eq!(user.avatar, "https://i.pravatar.cc/150?img=32");

        user.on_update(UserUpdate {
            email: "a@b.c".into(),
            real_name: "Alice B".into(),
            phone: "13800000000".into(),
            role: "admin".into(),
            status: "banned".into(),
        })
        .unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.created_at, now);
        assert_eq!(user.role, "admin");
        assert_eq!(user.status, "banned");
    }
}
