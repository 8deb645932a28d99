//! # Domain Layer

pub mod entity;
pub mod errors;
pub mod namespace;

pub use entity::*;
pub use errors::*;
pub use namespace::*;
