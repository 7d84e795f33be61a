use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actor_framework::RecordId;

/// The settings store holds exactly one record, always under this id.
pub const SETTINGS_ID: RecordId = 1;

/// Site-wide options edited on the settings screen. Saving replaces every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsForm {
    pub site_name: String,
    pub site_description: String,
    pub site_logo: String,
    pub site_url: String,

    pub contact_email: String,
    pub contact_phone: String,
    pub contact_address: String,

    pub currency: String,
    pub timezone: String,
    pub language: String,
    pub date_format: String,

    pub theme_color: String,
    pub sidebar_color: String,

    pub enable_registration: bool,
    pub enable_comments: bool,
    pub enable_notifications: bool,
    pub maintenance_mode: bool,

    pub items_per_page: i64,
    /// Minutes.
    pub session_timeout: i64,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            site_name: "HTMX 管理后台".into(),
            site_description: "基于 HTMX、Bulma 和 Alpine.js 的现代化管理后台系统".into(),
            site_logo: String::new(),
            site_url: String::new(),
            contact_email: "admin@example.com".into(),
            contact_phone: "400-123-4567".into(),
            contact_address: String::new(),
            currency: "CNY".into(),
            timezone: "Asia/Shanghai".into(),
            language: "zh-CN".into(),
            date_format: "YYYY-MM-DD".into(),
            theme_color: String::new(),
            sidebar_color: String::new(),
            enable_registration: false,
            enable_comments: false,
            enable_notifications: false,
            maintenance_mode: false,
            items_per_page: 10,
            session_timeout: 30,
        }
    }
}

/// The stored settings plus save bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemSettings {
    #[serde(skip)]
    pub id: RecordId,
    #[serde(flatten)]
    pub values: SettingsForm,
    /// Successful saves since startup.
    pub total_saves: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
