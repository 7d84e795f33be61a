//! User store hooks: validation, username uniqueness and field replacement.

pub mod entity;
pub mod error;

pub use error::*;
