use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "config/admin";
const ENV_PREFIX: &str = "ADMIN";

/// Tunables for the in-memory admin stores.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdminConfig {
    /// Mailbox size of each store actor.
    pub channel_buffer: usize,
    pub user_page_size: usize,
    pub product_page_size: usize,
    pub order_page_size: usize,
    /// Pre-load the mock users, products and orders on startup.
    pub seed_mock_data: bool,
    /// Products with less stock than this count as low stock.
    pub low_stock_threshold: i64,
    /// How many recent users and orders the dashboard shows.
    pub recent_limit: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            user_page_size: 10,
            product_page_size: 12,
            order_page_size: 10,
            seed_mock_data: true,
            low_stock_threshold: 10,
            recent_limit: 5,
        }
    }
}

impl AdminConfig {
    /// Defaults, then `config/admin.{toml,yaml,json}` if present, then `ADMIN__*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Empty stores, for tests and tools that bring their own data.
    pub fn without_seed() -> Self {
        Self {
            seed_mock_data: false,
            ..Self::default()
        }
    }
}
