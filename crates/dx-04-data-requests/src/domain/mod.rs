//! # Domain Layer

pub mod entities;
pub mod summary;

pub use entities::*;
pub use summary::*;
