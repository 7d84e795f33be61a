use std::convert::Infallible;

use chrono::{DateTime, Utc};

use crate::actor_framework::{Entity, FrameworkError, RecordId};
use crate::domain::{require, require_email, SettingsForm, SystemSettings, SETTINGS_ID};

fn validate_settings(form: &SettingsForm) -> Result<(), FrameworkError> {
    require("site_name", &form.site_name)?;
    require_email("contact_email", &form.contact_email)?;
    require("currency", &form.currency)?;
    require("timezone", &form.timezone)?;
    require("language", &form.language)
}

impl SystemSettings {
    /// The record the store starts with.
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self::from_create_params(SETTINGS_ID, SettingsForm::default(), now)
    }
}

impl Entity for SystemSettings {
    type CreateParams = SettingsForm;
    type Patch = SettingsForm;
    type Action = Infallible;

    const KIND: &'static str = "Settings";

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    fn validate_create(params: &SettingsForm) -> Result<(), FrameworkError> {
        validate_settings(params)
    }

    fn from_create_params(id: RecordId, params: SettingsForm, now: DateTime<Utc>) -> Self {
        Self {
            id,
            values: params,
            total_saves: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn on_update(&mut self, form: SettingsForm) -> Result<(), FrameworkError> {
        validate_settings(&form)?;
        self.values = form;
        self.total_saves += 1;
        Ok(())
    }

    fn handle_action(&mut self, action: Infallible) -> Result<(), FrameworkError> {
        match action {}
    }
}
