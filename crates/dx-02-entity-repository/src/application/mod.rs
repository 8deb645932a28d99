//! # Application Layer

mod repository;

pub use repository::EntityRepository;
