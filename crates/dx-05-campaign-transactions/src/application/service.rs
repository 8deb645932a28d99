use crate::domain::CampaignTransaction;
use crate::ports::CampaignTransactionApi;
use dx_01_ledger_store::{LedgerStore, Selector};
use dx_02_entity_repository::{EntityCodec, EntityRepository, JsonCodec, ListStrategy};
use shared_types::{ContractError, InvocationContext};
use tracing::info;

pub struct CampaignTransactionService<C = JsonCodec> {
    repository: EntityRepository<CampaignTransaction, C>,
}

impl CampaignTransactionService<JsonCodec> {
    pub fn new(strategy: ListStrategy) -> Self {
        Self::with_repository(EntityRepository::new(strategy))
    }
}

impl<C: EntityCodec> CampaignTransactionService<C> {
    pub fn with_repository(repository: EntityRepository<CampaignTransaction, C>) -> Self {
        Self { repository }
    }
}

impl<C: EntityCodec> CampaignTransactionApi for CampaignTransactionService<C> {
    fn create<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        transaction: CampaignTransaction,
    ) -> Result<CampaignTransaction, ContractError> {
        let stored = self.repository.create(store, transaction)?;
        info!(
            tx_id = %ctx.tx_id,
            transfer_id = %stored.id,
            campaign_id = %stored.campaign_id,
            "Created campaign transaction"
        );
        Ok(stored)
    }

    fn find_by_transfer_id<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        transfer_id: &str,
    ) -> Result<CampaignTransaction, ContractError> {
        Ok(self.repository.read(store, transfer_id)?)
    }

    fn update<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        transfer_id: &str,
        transaction: CampaignTransaction,
    ) -> Result<CampaignTransaction, ContractError> {
        let stored = self.repository.update(store, transfer_id, transaction)?;
        info!(tx_id = %ctx.tx_id, transfer_id = %stored.id, "Updated campaign transaction");
        Ok(stored)
    }

    fn delete<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        transfer_id: &str,
    ) -> Result<(), ContractError> {
        self.repository.delete(store, transfer_id)?;
        info!(tx_id = %ctx.tx_id, transfer_id = %transfer_id, "Deleted campaign transaction");
        Ok(())
    }

    fn exists<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        transfer_id: &str,
    ) -> Result<bool, ContractError> {
        Ok(self.repository.exists(store, transfer_id)?)
    }

    fn list_all<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Vec<CampaignTransaction>, ContractError> {
        Ok(self.repository.list_all(store)?)
    }

    fn find_by_campaign<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        campaign_id: &str,
    ) -> Result<Vec<CampaignTransaction>, ContractError> {
        let selector = Selector::all().with_field("campaignId", campaign_id);
        Ok(self.repository.find(store, &selector)?)
    }
}
