//! # Campaign Transactions (dx-05)
//!
//! Cost records of campaigns that consumed approved data, stored under the
//! `cost_` namespace. Plain CRUD: no approval semantics, no tombstones.

pub mod application;
pub mod domain;
pub mod ports;

pub use application::CampaignTransactionService;
pub use domain::{CampaignTransaction, COST_NAMESPACE};
pub use ports::CampaignTransactionApi;
