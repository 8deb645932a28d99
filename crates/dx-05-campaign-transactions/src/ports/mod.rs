//! # Ports Layer

use crate::domain::CampaignTransaction;
use dx_01_ledger_store::LedgerStore;
use shared_types::{ContractError, InvocationContext};

/// Primary API for campaign cost records.
pub trait CampaignTransactionApi {
    /// `ALREADY_EXISTS` if the transfer id is taken.
    fn create<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        transaction: CampaignTransaction,
    ) -> Result<CampaignTransaction, ContractError>;

    fn find_by_transfer_id<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        transfer_id: &str,
    ) -> Result<CampaignTransaction, ContractError>;

    /// Full replacement; `NOT_FOUND` if absent.
    fn update<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        transfer_id: &str,
        transaction: CampaignTransaction,
    ) -> Result<CampaignTransaction, ContractError>;

    fn delete<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        transfer_id: &str,
    ) -> Result<(), ContractError>;

    fn exists<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        transfer_id: &str,
    ) -> Result<bool, ContractError>;

    fn list_all<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Vec<CampaignTransaction>, ContractError>;

    /// Possibly empty.
    fn find_by_campaign<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        campaign_id: &str,
    ) -> Result<Vec<CampaignTransaction>, ContractError>;
}
