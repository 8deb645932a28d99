//! # User Notifications (dx-06)
//!
//! Messages addressed to data owners about requests touching their
//! attributes, stored under the `notification_` namespace.
//!
//! `createdOn` is the transaction timestamp of the creating invocation and
//! survives updates unchanged. No operation reads the wall clock.

pub mod application;
pub mod domain;
pub mod ports;

pub use application::NotificationService;
pub use domain::{UserNotification, NOTIFICATION_NAMESPACE};
pub use ports::NotificationApi;
