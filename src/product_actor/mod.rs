//! Product store hooks, including SKU uniqueness.

pub mod entity;
pub mod error;

pub use error::*;
