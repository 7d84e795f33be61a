//! Order store hooks. Orders are never edited wholesale; only their status moves.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
