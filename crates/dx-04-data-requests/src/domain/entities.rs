//! # Data Request Entities

use dx_02_entity_repository::{Entity, Namespace};
use serde::{Deserialize, Serialize};
use shared_types::AttributeStatus;

/// Ledger namespace of data requests.
pub const DATA_REQUEST_NAMESPACE: Namespace = Namespace::new("data_", "DataRequest");

/// A request for a set of attributes that must collect per-organization
/// approvals before the linked campaign may use them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequest {
    /// Bare id; the ledger key is `data_<requestId>`.
    pub request_id: String,
    pub description: String,
    pub created_on: String,
    pub updated_on: String,
    pub created_by: String,
    pub owner: String,
    /// Attribute codes requested, in order.
    pub attribute_code_list: Vec<String>,
    /// Approval claims, in order.
    pub attribute_status_list: Vec<AttributeStatus>,
    pub approvers: Vec<String>,
    /// Soft foreign key to the campaign.
    pub campaign_id: String,
    pub cost_per_impression: Option<f64>,
    /// Tombstone; excluded from listings.
    pub deleted: bool,
}

impl Entity for DataRequest {
    const NAMESPACE: Namespace = DATA_REQUEST_NAMESPACE;

    fn id(&self) -> &str {
        &self.request_id
    }

    fn set_id(&mut self, id: String) {
        self.request_id = id;
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

/// Client-supplied state for a create or update. The claim list arrives in
/// its textual notation and is parsed by the service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataRequestDraft {
    pub request_id: String,
    pub description: String,
    pub created_on: String,
    pub updated_on: String,
    pub created_by: String,
    pub owner: String,
    pub attribute_code_list: Vec<String>,
    /// `AttributeStatus(name=.., orgId=.., status=..)` repeated.
    pub attribute_status_list: String,
    pub approvers: Vec<String>,
    pub campaign_id: String,
    pub cost_per_impression: Option<f64>,
    pub deleted: bool,
}

impl DataRequestDraft {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            ..Self::default()
        }
    }

    /// Combine with already-parsed claims into the stored record.
    pub fn into_request(self, claims: Vec<AttributeStatus>) -> DataRequest {
        DataRequest {
            request_id: self.request_id,
            description: self.description,
            created_on: self.created_on,
            updated_on: self.updated_on,
            created_by: self.created_by,
            owner: self.owner,
            attribute_code_list: self.attribute_code_list,
            attribute_status_list: claims,
            approvers: self.approvers,
            campaign_id: self.campaign_id,
            cost_per_impression: self.cost_per_impression,
            deleted: self.deleted,
        }
    }
}
