use tracing::{debug, info, instrument};

use crate::actor_framework::{RecordId, ResourceClient};
use crate::domain::{User, UserCreate, UserUpdate};
use crate::user_actor::UserError;

/// Client for interacting with the User store.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
    default_page_size: usize,
}

impl_basic_client!(UserClient, User, UserError, user, users);

impl UserClient {
    /// Fails with [`UserError::AlreadyExists`] when the username is taken; nothing is stored then.
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn create_user(&self, form: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        let user = self.inner.create(form).await?;
        info!(user_id = user.id, "User created successfully");
        Ok(user)
    }

    #[instrument(skip(self, form))]
    pub async fn update_user(&self, id: RecordId, form: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        let user = self.inner.update(id, form).await?;
        info!(user_id = user.id, "User updated successfully");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn username_exists(&self, username: &str) -> Result<bool, UserError> {
        Ok(self.inner.exists_by_unique(username).await?)
    }
}
