//! Entity clients: the business-rule layer callers use for each list screen.

#[macro_use]
mod macros;

pub mod user_client;
pub mod product_client;
pub mod order_client;
pub mod settings_client;

pub use user_client::UserClient;
pub use product_client::ProductClient;
pub use order_client::OrderClient;
pub use settings_client::SettingsClient;
