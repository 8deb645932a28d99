//! # Entity Repository (dx-02)
//!
//! Generic CRUD over the ordered ledger, using key-prefix namespaces in
//! place of typed collections.
//!
//! ## Keying
//!
//! Every entity type declares a [`Namespace`] constant. An entity with id
//! `r1` in namespace `data_` lives under ledger key `data_r1`. Prefixing is
//! idempotent: `key("data_r1") == key("r1")`. Stored records carry the bare
//! id.
//!
//! ## Listing
//!
//! | [`ListStrategy`] | Mechanism |
//! |------------------|-----------|
//! | `RangeScan` | `get_state_by_range(prefix, successor(prefix))` then in-process selector evaluation |
//! | `PredicateQuery` | `get_query_result(selector)` restricted to keys inside the namespace |
//!
//! Both strategies return the same entities in the same (key) order. Records
//! flagged `deleted` are left out of every listing but stay readable by id.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): [`Namespace`], the [`Entity`] trait, errors.
//! - **Ports Layer** (`ports/`): the [`EntityCodec`] seam.
//! - **Adapters Layer** (`adapters/`): [`JsonCodec`], the default codec.
//! - **Application Layer** (`application/`): [`EntityRepository`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::JsonCodec;
pub use application::EntityRepository;
pub use config::{ListStrategy, RepositoryConfig};
pub use domain::{Entity, Namespace, RepositoryError};
pub use ports::EntityCodec;
