//! # Admin Records
//!
//! In-memory data layer behind the users, products and orders admin screens.
//!
//! - **Stores** - one [`actor_framework::ResourceActor`] per entity type owns the only mutable copy
//!   of its collection and applies requests one at a time
//! - **Entity hooks** - validation, unique keys and field replacement rules → [`user_actor`],
//!   [`product_actor`], [`order_actor`], [`settings_actor`]
//! - **Clients** - the operations list screens call: list, get, create, update, delete,
//!   order status changes, and reading or saving the site settings → [`clients`]
//! - **Queries** - keyword/status filtering, newest-first ordering and pagination shared by every
//!   entity → [`query`], [`pagination`]
//! - **System** - startup, mock data seeding, configuration, tracing and shutdown → [`app_system`]
//!
//! Nothing is persisted. Restarting the process restores the mock data set.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use admin_records::app_system::{AdminConfig, AdminSystem};
//! use admin_records::query::SearchParams;
//!
//! let system = AdminSystem::new(&AdminConfig::default())?;
//! let page = system
//!     .user_client
//!     .list_users(&SearchParams::default().with_keyword("user1"))
//!     .await?;
//! println!("{} of {} users", page.items.len(), page.page_info.total);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod dashboard;
pub mod domain;
pub mod order_actor;
pub mod pagination;
pub mod product_actor;
pub mod query;
pub mod seed;
pub mod settings_actor;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
