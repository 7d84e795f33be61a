//! Settings store hooks: a single record replaced wholesale on every save.

pub mod entity;
pub mod error;

pub use error::*;
