//! # Ports Layer

use crate::domain::UserNotification;
use dx_01_ledger_store::LedgerStore;
use shared_types::{ContractError, InvocationContext};

/// Primary API for user notifications.
pub trait NotificationApi {
    /// Store a new notification stamped with the transaction timestamp.
    fn create<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        notification: UserNotification,
    ) -> Result<UserNotification, ContractError>;

    fn read<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        notification_id: &str,
    ) -> Result<UserNotification, ContractError>;

    /// Full replacement that keeps the stored `createdOn`.
    fn update<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        notification_id: &str,
        notification: UserNotification,
    ) -> Result<UserNotification, ContractError>;

    fn delete<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        notification_id: &str,
    ) -> Result<(), ContractError>;

    fn exists<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        notification_id: &str,
    ) -> Result<bool, ContractError>;

    /// Notifications owned by `owner`. `NOT_FOUND` when none.
    fn find_by_owner<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        owner: &str,
    ) -> Result<Vec<UserNotification>, ContractError>;

    /// Like [`find_by_owner`](Self::find_by_owner) but empty is fine.
    fn find_notifications_by_owner<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        owner: &str,
    ) -> Result<Vec<UserNotification>, ContractError>;

    /// First notification of the campaign in key order.
    fn find_by_campaign<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        campaign_id: &str,
    ) -> Result<UserNotification, ContractError>;

    fn list_all<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Vec<UserNotification>, ContractError>;
}
