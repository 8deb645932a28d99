//! # Ports Layer

pub mod inbound;

pub use inbound::DataRequestApi;
