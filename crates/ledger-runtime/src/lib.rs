//! # Ledger Runtime
//!
//! Hosts the three contracts behind one invocation surface.
//!
//! ## Contracts
//!
//! | Contract | Namespace | Functions |
//! |----------|-----------|-----------|
//! | `dataRequestBlock` (default) | `data_` | `CreateDataRequest`, `FindByRequestId`, `FindByCampaignId`, `UpdateDataRequest`, `DeleteDataRequest`, `DataRequestExists`, `GetAllDataRequests`, `GetAttributeStatuses` |
//! | `CostTransactionRequest` | `cost_` | `CreateCampaignTransaction`, `FindByTransferId`, `UpdateCampaignTransaction`, `DeleteCostTransfer`, `CostTransferExists`, `CampaignTransactionExists`, `GetAllCostTransfers`, `FindCostTransfersByCampaignId` |
//! | `notificationRequestBlock` | `notification_` | `CreateUserNotification`, `ReadNotification`, `UpdateNotification`, `DeleteNotification`, `NotificationExists`, `FindByOwner`, `FindNotificationsByOwner`, `FindByCampaignId`, `GetAllUserNotifications` |
//!
//! `InitLedger` and `InitNotificationLedger` are accepted and do nothing.
//!
//! ## Startup Sequence
//!
//! 1. Load [`RuntimeConfig`] (TOML file, then `DX_*` environment overrides)
//! 2. Validate the authorization table
//! 3. Initialize logging
//! 4. Open the ledger file and dispatch through [`ContractRouter`]

pub mod config;
pub mod logging;
pub mod router;

pub use config::{ConfigError, LedgerConfig, LoggingConfig, RuntimeConfig};
pub use logging::init_logging;
pub use router::{
    ContractRouter, COST_CONTRACT, DATA_REQUEST_CONTRACT, NOTIFICATION_CONTRACT,
};
