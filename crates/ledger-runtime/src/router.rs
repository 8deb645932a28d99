//! # Contract Router
//!
//! Dispatches a named invocation with string arguments to the owning
//! contract and renders the result as JSON text.
//!
//! Argument conventions:
//!
//! - lists (`attributeCodeList`, `approvers`) accept a JSON array or a
//!   comma-separated string
//! - optional numbers accept the empty string as "absent"
//! - booleans are `true`/`false` in any letter case
//! - create/update functions also accept the whole record as one JSON
//!   object argument (after the id, for updates)

use crate::config::{ConfigError, RuntimeConfig};
use dx_01_ledger_store::LedgerStore;
use dx_02_entity_repository::ListStrategy;
use dx_03_approval_authorization::{ApprovalGuard, AuthorizationConfig};
use dx_04_data_requests::{DataRequestApi, DataRequestDraft, DataRequestService};
use dx_05_campaign_transactions::{
    CampaignTransaction, CampaignTransactionApi, CampaignTransactionService,
};
use dx_06_user_notifications::{NotificationApi, NotificationService, UserNotification};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{ContractError, ErrorCode, InvocationContext};
use tracing::debug;

pub const DATA_REQUEST_CONTRACT: &str = "dataRequestBlock";
pub const COST_CONTRACT: &str = "CostTransactionRequest";
pub const NOTIFICATION_CONTRACT: &str = "notificationRequestBlock";

const DATA_REQUEST_FIELDS: usize = 12;
const COST_FIELDS: usize = 12;
const NOTIFICATION_FIELDS: usize = 8;

/// The invocation surface of all three contracts.
pub struct ContractRouter {
    data_requests: DataRequestService,
    cost_transfers: CampaignTransactionService,
    notifications: NotificationService,
}

impl ContractRouter {
    pub fn new(
        authorization: AuthorizationConfig,
        strategy: ListStrategy,
    ) -> Result<Self, ContractError> {
        let guard = ApprovalGuard::new(authorization)?;
        Ok(Self {
            data_requests: DataRequestService::new(guard, strategy),
            cost_transfers: CampaignTransactionService::new(strategy),
            notifications: NotificationService::new(strategy),
        })
    }

    pub fn from_config(config: &RuntimeConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.authorization.clone(),
            config.repository.list_strategy,
        )
        .map_err(|e| ConfigError::Invalid(e.message))
    }

    pub fn data_requests(&self) -> &DataRequestService {
        &self.data_requests
    }

    pub fn cost_transfers(&self) -> &CampaignTransactionService {
        &self.cost_transfers
    }

    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }

    /// Run one invocation.
    ///
    /// An empty `contract` selects `dataRequestBlock`. A function written as
    /// `contract:function` overrides `contract`.
    pub fn invoke<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        contract: &str,
        function: &str,
        args: &[String],
    ) -> Result<String, ContractError> {
        let (contract, function) = match function.split_once(':') {
            Some((contract, function)) => (contract, function),
            None => (contract, function),
        };
        debug!(
            tx_id = %ctx.tx_id,
            contract = %contract,
            function = %function,
            args = args.len(),
            "Dispatching invocation"
        );

        let args = Args::new(function, args);
        match contract {
            "" | DATA_REQUEST_CONTRACT => self.invoke_data_request(store, ctx, &args),
            COST_CONTRACT => self.invoke_cost_transfer(store, ctx, &args),
            NOTIFICATION_CONTRACT => self.invoke_notification(store, ctx, &args),
            other => Err(ContractError::invalid_argument(format!(
                "Unknown contract {other}"
            ))),
        }
    }

    fn invoke_data_request<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        args: &Args<'_>,
    ) -> Result<String, ContractError> {
        let svc = &self.data_requests;
        match args.function {
            "InitLedger" => {
                args.arity(&[0])?;
                Ok(String::new())
            }
            "CreateDataRequest" => {
                args.arity(&[1, DATA_REQUEST_FIELDS])?;
                let draft = if args.len() == 1 {
                    args.json(0)?
                } else {
                    data_request_draft(args, 0)?
                };
                to_json(&svc.create(store, ctx, draft)?)
            }
            "FindByRequestId" => {
                args.arity(&[1])?;
                to_json(&svc.read(&*store, args.text(0))?)
            }
            "FindByCampaignId" => {
                args.arity(&[1])?;
                to_json(&svc.find_by_campaign(&*store, args.text(0))?)
            }
            "UpdateDataRequest" => {
                args.arity(&[2, DATA_REQUEST_FIELDS])?;
                let draft = if args.len() == 2 {
                    args.json(1)?
                } else {
                    data_request_draft(args, 0)?
                };
                to_json(&svc.update(store, ctx, args.text(0), draft)?)
            }
            "DeleteDataRequest" => {
                args.arity(&[1])?;
                svc.delete(store, ctx, args.text(0))?;
                Ok(String::new())
            }
            "DataRequestExists" => {
                args.arity(&[1])?;
                to_json(&svc.exists(&*store, args.text(0))?)
            }
            "GetAllDataRequests" => {
                args.arity(&[0])?;
                to_json(&svc.list_all(&*store)?)
            }
            "GetAttributeStatuses" => {
                args.arity(&[1])?;
                to_json(&svc.attribute_statuses(&*store, args.text(0))?)
            }
            _ => Err(args.unknown(DATA_REQUEST_CONTRACT)),
        }
    }

    fn invoke_cost_transfer<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        args: &Args<'_>,
    ) -> Result<String, ContractError> {
        let svc = &self.cost_transfers;
        match args.function {
            "InitLedger" => {
                args.arity(&[0])?;
                Ok(String::new())
            }
            "CreateCampaignTransaction" => {
                args.arity(&[1, COST_FIELDS])?;
                let transaction = if args.len() == 1 {
                    args.json(0)?
                } else {
                    campaign_transaction(args)?
                };
                to_json(&svc.create(store, ctx, transaction)?)
            }
            "FindByTransferId" => {
                args.arity(&[1])?;
                to_json(&svc.find_by_transfer_id(&*store, args.text(0))?)
            }
            "UpdateCampaignTransaction" => {
                args.arity(&[2, COST_FIELDS])?;
                let transaction = if args.len() == 2 {
                    args.json(1)?
                } else {
                    campaign_transaction(args)?
                };
                to_json(&svc.update(store, ctx, args.text(0), transaction)?)
            }
            "DeleteCostTransfer" => {
                args.arity(&[1])?;
                svc.delete(store, ctx, args.text(0))?;
                Ok(String::new())
            }
            "CostTransferExists" | "CampaignTransactionExists" => {
                args.arity(&[1])?;
                to_json(&svc.exists(&*store, args.text(0))?)
            }
            "GetAllCostTransfers" => {
                args.arity(&[0])?;
                to_json(&svc.list_all(&*store)?)
            }
            "FindCostTransfersByCampaignId" => {
                args.arity(&[1])?;
                to_json(&svc.find_by_campaign(&*store, args.text(0))?)
            }
            _ => Err(args.unknown(COST_CONTRACT)),
        }
    }

    fn invoke_notification<S: LedgerStore + ?Sized>(
        &self,
        store: &mut S,
        ctx: &InvocationContext,
        args: &Args<'_>,
    ) -> Result<String, ContractError> {
        let svc = &self.notifications;
        match args.function {
            "InitNotificationLedger" | "InitLedger" => {
                args.arity(&[0])?;
                Ok(String::new())
            }
            "CreateUserNotification" => {
                args.arity(&[1, NOTIFICATION_FIELDS])?;
                let notification = if args.len() == 1 {
                    args.json(0)?
                } else {
                    user_notification(args)?
                };
                to_json(&svc.create(store, ctx, notification)?)
            }
            "ReadNotification" => {
                args.arity(&[1])?;
                to_json(&svc.read(&*store, args.text(0))?)
            }
            "UpdateNotification" => {
                args.arity(&[2, NOTIFICATION_FIELDS])?;
                let notification = if args.len() == 2 {
                    args.json(1)?
                } else {
                    user_notification(args)?
                };
                to_json(&svc.update(store, ctx, args.text(0), notification)?)
            }
            "DeleteNotification" => {
                args.arity(&[1])?;
                svc.delete(store, ctx, args.text(0))?;
                Ok(String::new())
            }
            "NotificationExists" => {
                args.arity(&[1])?;
                to_json(&svc.exists(&*store, args.text(0))?)
            }
            "FindByOwner" => {
                args.arity(&[1])?;
                to_json(&svc.find_by_owner(&*store, args.text(0))?)
            }
            "FindNotificationsByOwner" => {
                args.arity(&[1])?;
                to_json(&svc.find_notifications_by_owner(&*store, args.text(0))?)
            }
            "FindByCampaignId" => {
                args.arity(&[1])?;
                to_json(&svc.find_by_campaign(&*store, args.text(0))?)
            }
            "GetAllUserNotifications" => {
                args.arity(&[0])?;
                to_json(&svc.list_all(&*store)?)
            }
            _ => Err(args.unknown(NOTIFICATION_CONTRACT)),
        }
    }
}

fn data_request_draft(args: &Args<'_>, offset: usize) -> Result<DataRequestDraft, ContractError> {
    Ok(DataRequestDraft {
        request_id: args.text(offset).to_string(),
        description: args.text(offset + 1).to_string(),
        created_on: args.text(offset + 2).to_string(),
        updated_on: args.text(offset + 3).to_string(),
        created_by: args.text(offset + 4).to_string(),
        owner: args.text(offset + 5).to_string(),
        attribute_code_list: args.list(offset + 6)?,
        attribute_status_list: args.text(offset + 7).to_string(),
        approvers: args.list(offset + 8)?,
        campaign_id: args.text(offset + 9).to_string(),
        cost_per_impression: args.opt_f64(offset + 10)?,
        deleted: args.bool(offset + 11)?,
    })
}

fn campaign_transaction(args: &Args<'_>) -> Result<CampaignTransaction, ContractError> {
    Ok(CampaignTransaction {
        id: args.text(0).to_string(),
        data_request_id: args.text(1).to_string(),
        campaign_id: args.text(2).to_string(),
        cost_per_impression: args.opt_f64(3)?,
        channel_cost_per_impression: args.opt_f64(4)?,
        intersection_data_count: args.opt_i64(5)?,
        channel: args.text(6).to_string(),
        total_cost: args.opt_f64(7)?,
        data_cost: args.opt_f64(8)?,
        platform_share: args.opt_f64(9)?,
        data_provider_share: args.text(10).to_string(),
        data_provider_share_list: args.text(11).to_string(),
    })
}

fn user_notification(args: &Args<'_>) -> Result<UserNotification, ContractError> {
    Ok(UserNotification {
        id: args.text(0).to_string(),
        request_id: args.text(1).to_string(),
        campaign_id: args.text(2).to_string(),
        count: args.opt_i64(3)?.unwrap_or_default(),
        attribute_list: args.text(4).to_string(),
        owner: args.text(5).to_string(),
        created_on: 0,
        message: args.text(6).to_string(),
        status: args.text(7).to_string(),
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ContractError> {
    serde_json::to_string(value)
        .map_err(|e| ContractError::new(ErrorCode::SerializationError, e.to_string()))
}

/// Positional string arguments of one invocation.
struct Args<'a> {
    function: &'a str,
    values: &'a [String],
}

impl<'a> Args<'a> {
    fn new(function: &'a str, values: &'a [String]) -> Self {
        Self { function, values }
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn arity(&self, counts: &[usize]) -> Result<(), ContractError> {
        if counts.contains(&self.values.len()) {
            return Ok(());
        }
        let expected = counts
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(" or ");
        Err(ContractError::invalid_argument(format!(
            "{} expects {expected} arguments, got {}",
            self.function,
            self.values.len()
        )))
    }

    fn text(&self, index: usize) -> &'a str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    fn invalid(&self, index: usize, what: &str) -> ContractError {
        ContractError::invalid_argument(format!(
            "{} argument {index} ({:?}) is not {what}",
            self.function,
            self.text(index)
        ))
    }

    fn bool(&self, index: usize) -> Result<bool, ContractError> {
        match self.text(index).trim() {
            v if v.eq_ignore_ascii_case("true") => Ok(true),
            v if v.eq_ignore_ascii_case("false") || v.is_empty() => Ok(false),
            _ => Err(self.invalid(index, "a boolean")),
        }
    }

    fn opt_f64(&self, index: usize) -> Result<Option<f64>, ContractError> {
        match self.text(index).trim() {
            "" => Ok(None),
            v => v
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Some)
                .ok_or_else(|| self.invalid(index, "a number")),
        }
    }

    fn opt_i64(&self, index: usize) -> Result<Option<i64>, ContractError> {
        match self.text(index).trim() {
            "" => Ok(None),
            v => v
                .parse::<i64>()
                .map(Some)
                .map_err(|_| self.invalid(index, "an integer")),
        }
    }

    fn list(&self, index: usize) -> Result<Vec<String>, ContractError> {
        let raw = self.text(index).trim();
        if raw.starts_with('[') {
            return serde_json::from_str(raw).map_err(|_| self.invalid(index, "a JSON string array"));
        }
        Ok(raw
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn json<T: DeserializeOwned>(&self, index: usize) -> Result<T, ContractError> {
        serde_json::from_str(self.text(index))
            .map_err(|e| self.invalid(index, &format!("a valid JSON record ({e})")))
    }

    fn unknown(&self, contract: &str) -> ContractError {
        ContractError::invalid_argument(format!(
            "Unknown function {} on contract {contract}",
            self.function
        ))
    }
}
