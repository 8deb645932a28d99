//! # Inbound Ports (Driving Ports)
//!
//! The data request contract as seen by the invocation router.

use crate::domain::{AttributeStatusSummary, DataRequest, DataRequestDraft};
use dx_01_ledger_store::LedgerStore;
use shared_types::{ContractError, InvocationContext};

/// Primary API for data requests.
///
/// Read operations take the store by shared reference and never write.
pub trait DataRequestApi {
    /// Store a new request.
    ///
    /// ## Errors
    ///
    /// - `ALREADY_EXISTS`: the key is occupied, even by a tombstone
    /// - `INVALID_ATTRIBUTE`: a claim names a code outside `attributeCodeList`
    /// - `UNAUTHORIZED`: an `approved` claim names an org other than the caller's
    fn create<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        draft: DataRequestDraft,
    ) -> Result<DataRequest, ContractError>;

    /// Read by id, tombstoned records included.
    fn read<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        request_id: &str,
    ) -> Result<DataRequest, ContractError>;

    /// Live requests linked to `campaign_id`. `NOT_FOUND` when none.
    fn find_by_campaign<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        campaign_id: &str,
    ) -> Result<Vec<DataRequest>, ContractError>;

    /// Replace an existing request. Claims are authorized before the write.
    fn update<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        request_id: &str,
        draft: DataRequestDraft,
    ) -> Result<DataRequest, ContractError>;

    /// Hard delete.
    fn delete<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        request_id: &str,
    ) -> Result<(), ContractError>;

    /// Every live request.
    fn list_all<S: LedgerStore + ?Sized>(&self, store: &S)
        -> Result<Vec<DataRequest>, ContractError>;

    fn exists<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        request_id: &str,
    ) -> Result<bool, ContractError>;

    /// Effective status of each requested attribute.
    fn attribute_statuses<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        request_id: &str,
    ) -> Result<AttributeStatusSummary, ContractError>;
}
