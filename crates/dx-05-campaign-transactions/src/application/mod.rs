mod service;

pub use service::CampaignTransactionService;
