//! # Domain Layer
//!
//! Pure functions: claim parsing, identity resolution and reference checks.

pub mod errors;
pub mod identity;
pub mod parser;
pub mod references;

pub use errors::*;
pub use identity::*;
pub use parser::*;
pub use references::*;
