//! System orchestration, configuration, startup, and shutdown logic.

pub mod admin_system;
pub mod settings;
pub mod telemetry;

pub use admin_system::*;
pub use settings::*;
pub use telemetry::*;
