use crate::domain::{UserNotification, NOTIFICATION_NAMESPACE};
use crate::ports::NotificationApi;
use dx_01_ledger_store::{LedgerStore, Selector};
use dx_02_entity_repository::{EntityCodec, EntityRepository, JsonCodec, ListStrategy};
use shared_types::{ContractError, InvocationContext};
use tracing::info;

pub struct NotificationService<C = JsonCodec> {
    repository: EntityRepository<UserNotification, C>,
}

impl NotificationService<JsonCodec> {
    pub fn new(strategy: ListStrategy) -> Self {
        Self::with_repository(EntityRepository::new(strategy))
    }
}

impl<C: EntityCodec> NotificationService<C> {
    pub fn with_repository(repository: EntityRepository<UserNotification, C>) -> Self {
        Self { repository }
    }

    fn by_owner<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        owner: &str,
    ) -> Result<Vec<UserNotification>, ContractError> {
        let selector = Selector::all().with_field("owner", owner);
        Ok(self.repository.find(store, &selector)?)
    }
}

impl<C: EntityCodec> NotificationApi for NotificationService<C> {
    fn create<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        mut notification: UserNotification,
    ) -> Result<UserNotification, ContractError> {
        notification.created_on = ctx.tx_timestamp;
        let stored = self.repository.create(store, notification)?;
        info!(
            tx_id = %ctx.tx_id,
            notification_id = %stored.id,
            owner = %stored.owner,
            "Created user notification"
        );
        Ok(stored)
    }

    fn read<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        notification_id: &str,
    ) -> Result<UserNotification, ContractError> {
        Ok(self.repository.read(store, notification_id)?)
    }

    fn update<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        notification_id: &str,
        mut notification: UserNotification,
    ) -> Result<UserNotification, ContractError> {
        let current = self.repository.read(store, notification_id)?;
        notification.created_on = current.created_on;
        let stored = self.repository.update(store, notification_id, notification)?;
        info!(
            tx_id = %ctx.tx_id,
            notification_id = %stored.id,
            status = %stored.status,
            "Updated user notification"
        );
        Ok(stored)
    }

    fn delete<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        notification_id: &str,
    ) -> Result<(), ContractError> {
        self.repository.delete(store, notification_id)?;
        info!(
            tx_id = %ctx.tx_id,
            notification_id = %notification_id,
            "Deleted user notification"
        );
        Ok(())
    }

    fn exists<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        notification_id: &str,
    ) -> Result<bool, ContractError> {
        Ok(self.repository.exists(store, notification_id)?)
    }

    fn find_by_owner<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        owner: &str,
    ) -> Result<Vec<UserNotification>, ContractError> {
        let found = self.by_owner(store, owner)?;
        if found.is_empty() {
            return Err(ContractError::not_found(format!(
                "No {} found for owner {owner}",
                NOTIFICATION_NAMESPACE.entity_name()
            )));
        }
        Ok(found)
    }

    fn find_notifications_by_owner<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        owner: &str,
    ) -> Result<Vec<UserNotification>, ContractError> {
        self.by_owner(store, owner)
    }

    fn find_by_campaign<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        campaign_id: &str,
    ) -> Result<UserNotification, ContractError> {
        let selector = Selector::all().with_field("campaignId", campaign_id);
        self.repository
            .find(store, &selector)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ContractError::not_found(format!(
                    "No {} found for campaign {campaign_id}",
                    NOTIFICATION_NAMESPACE.entity_name()
                ))
            })
    }

    fn list_all<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Vec<UserNotification>, ContractError> {
        Ok(self.repository.list_all(store)?)
    }
}
