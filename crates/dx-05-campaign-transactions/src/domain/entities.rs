use dx_02_entity_repository::{Entity, Namespace};
use serde::{Deserialize, Serialize};

pub const COST_NAMESPACE: Namespace = Namespace::new("cost_", "CampaignTransaction");

/// Settlement of one campaign against one data request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignTransaction {
    /// Bare transfer id; the ledger key is `cost_<id>`.
    pub id: String,
    pub data_request_id: String,
    pub campaign_id: String,
    pub cost_per_impression: Option<f64>,
    pub channel_cost_per_impression: Option<f64>,
    pub intersection_data_count: Option<i64>,
    pub channel: String,
    pub total_cost: Option<f64>,
    pub data_cost: Option<f64>,
    pub platform_share: Option<f64>,
    pub data_provider_share: String,
    pub data_provider_share_list: String,
}

impl CampaignTransaction {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl Entity for CampaignTransaction {
    const NAMESPACE: Namespace = COST_NAMESPACE;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
