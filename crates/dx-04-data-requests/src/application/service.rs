use crate::domain::{
    AttributeStatusSummary, DataRequest, DataRequestDraft, DATA_REQUEST_NAMESPACE,
};
use crate::ports::DataRequestApi;
use dx_01_ledger_store::{LedgerStore, Selector};
use dx_02_entity_repository::{EntityCodec, EntityRepository, JsonCodec, ListStrategy};
use dx_03_approval_authorization::{
    check_attribute_references, parse_claims, ApprovalAuthorizer, ApprovalGuard,
};
use shared_types::{AttributeStatus, ContractError, InvocationContext};
use tracing::{info, warn};

/// Data request lifecycle service.
pub struct DataRequestService<A = ApprovalGuard, C = JsonCodec> {
    repository: EntityRepository<DataRequest, C>,
    authorizer: A,
}

impl<A: ApprovalAuthorizer> DataRequestService<A, JsonCodec> {
    pub fn new(authorizer: A, strategy: ListStrategy) -> Self {
        Self::with_repository(EntityRepository::new(strategy), authorizer)
    }
}

impl<A: ApprovalAuthorizer, C: EntityCodec> DataRequestService<A, C> {
    pub fn with_repository(repository: EntityRepository<DataRequest, C>, authorizer: A) -> Self {
        Self {
            repository,
            authorizer,
        }
    }

    pub fn authorizer(&self) -> &A {
        &self.authorizer
    }

    /// Parse, reference-check and authorize the claims carried by `draft`.
    fn validated_claims(
        &self,
        ctx: &InvocationContext,
        draft: &DataRequestDraft,
    ) -> Result<Vec<AttributeStatus>, ContractError> {
        let outcome = parse_claims(&draft.attribute_status_list);
        if !outcome.is_clean() {
            warn!(
                tx_id = %ctx.tx_id,
                request_id = %draft.request_id,
                skipped = ?outcome.skipped,
                "Ignored malformed approval claim fragments"
            );
        }
        check_attribute_references(&draft.attribute_code_list, &outcome.claims)?;
        self.authorizer.authorize(ctx, &outcome.claims)?;
        Ok(outcome.claims)
    }
}

impl<A: ApprovalAuthorizer, C: EntityCodec> DataRequestApi for DataRequestService<A, C> {
    fn create<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        draft: DataRequestDraft,
    ) -> Result<DataRequest, ContractError> {
        if self.repository.exists(store, &draft.request_id)? {
            return Err(ContractError::already_exists(format!(
                "DataRequest {} already exists",
                DATA_REQUEST_NAMESPACE.local_id(&draft.request_id)
            )));
        }
        let claims = self.validated_claims(ctx, &draft)?;
        let request = self.repository.create(store, draft.into_request(claims))?;
        info!(
            tx_id = %ctx.tx_id,
            request_id = %request.request_id,
            campaign_id = %request.campaign_id,
            attributes = request.attribute_code_list.len(),
            "Created data request"
        );
        Ok(request)
    }

    fn read<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        request_id: &str,
    ) -> Result<DataRequest, ContractError> {
        Ok(self.repository.read(store, request_id)?)
    }

    fn find_by_campaign<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        campaign_id: &str,
    ) -> Result<Vec<DataRequest>, ContractError> {
        let selector = Selector::all()
            .with_field("campaignId", campaign_id)
            .with_field("deleted", false);
        let found = self.repository.find(store, &selector)?;
        if found.is_empty() {
            return Err(ContractError::not_found(format!(
                "No live DataRequest found for campaign {campaign_id}"
            )));
        }
        Ok(found)
    }

    fn update<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        request_id: &str,
        draft: DataRequestDraft,
    ) -> Result<DataRequest, ContractError> {
        if !self.repository.exists(store, request_id)? {
            return Err(ContractError::not_found(format!(
                "DataRequest {} does not exist",
                DATA_REQUEST_NAMESPACE.local_id(request_id)
            )));
        }
        let claims = self.validated_claims(ctx, &draft)?;
        let request = self
            .repository
            .update(store, request_id, draft.into_request(claims))?;
        info!(
            tx_id = %ctx.tx_id,
            request_id = %request.request_id,
            claims = request.attribute_status_list.len(),
            deleted = request.deleted,
            "Updated data request"
        );
        Ok(request)
    }

    fn delete<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        request_id: &str,
    ) -> Result<(), ContractError> {
        self.repository.delete(store, request_id)?;
        info!(tx_id = %ctx.tx_id, request_id = %request_id, "Deleted data request");
        Ok(())
    }

    fn list_all<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<Vec<DataRequest>, ContractError> {
        Ok(self.repository.list_all(store)?)
    }

    fn exists<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        request_id: &str,
    ) -> Result<bool, ContractError> {
        Ok(self.repository.exists(store, request_id)?)
    }

    fn attribute_statuses<S: LedgerStore + ?Sized>(
        &self,
        store: &S,
        request_id: &str,
    ) -> Result<AttributeStatusSummary, ContractError> {
        let request = self.repository.read(store, request_id)?;
        Ok(AttributeStatusSummary::of(&request))
    }
}
