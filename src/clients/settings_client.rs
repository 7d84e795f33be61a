use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{SettingsForm, SystemSettings, SETTINGS_ID};
use crate::settings_actor::SettingsError;

/// Client for the single system settings record.
#[derive(Clone)]
pub struct SettingsClient {
    inner: ResourceClient<SystemSettings>,
}

impl SettingsClient {
    pub fn new(inner: ResourceClient<SystemSettings>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn get_settings(&self) -> Result<SystemSettings, SettingsError> {
        debug!("Sending request");
        self.inner.get(SETTINGS_ID).await?.ok_or(SettingsError::Missing)
    }

    /// Replaces every field. On a validation failure the stored settings stay as they were.
    #[instrument(skip(self, form), fields(site_name = %form.site_name))]
    pub async fn save_settings(&self, form: SettingsForm) -> Result<SystemSettings, SettingsError> {
        debug!("Sending request");
        let settings = self.inner.update(SETTINGS_ID, form).await?;
        info!(total_saves = settings.total_saves, "Settings saved successfully");
        Ok(settings)
    }
}
