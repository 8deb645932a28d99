//! # Attribute Status Summary
//!
//! Effective approval state of each requested attribute code.

use crate::domain::DataRequest;
use serde::{Deserialize, Serialize};
use shared_types::ApprovalStatus;

/// Effective state of one requested attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeState {
    pub code: String,
    /// Status text as claimed, or `pending` when no claim names the code.
    pub status: String,
    /// Org of the deciding claim.
    pub org_id: Option<String>,
    /// False when the status text is outside the recognized domain.
    pub recognized: bool,
}

impl AttributeState {
    /// Only `approved` passes the authorization guard, so only `approved`
    /// counts here. `deemedApproved` is informational.
    pub fn is_approved(&self) -> bool {
        ApprovalStatus::parse(&self.status) == Some(ApprovalStatus::Approved)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeStatusSummary {
    pub request_id: String,
    pub attributes: Vec<AttributeState>,
    /// Every requested code carries an `approved` claim.
    pub fully_approved: bool,
}

impl AttributeStatusSummary {
    pub fn of(request: &DataRequest) -> Self {
        let attributes: Vec<AttributeState> = request
            .attribute_code_list
            .iter()
            .map(|code| {
                match request
                    .attribute_status_list
                    .iter()
                    .rev()
                    .find(|claim| claim.name == *code)
                {
                    Some(claim) => AttributeState {
                        code: code.clone(),
                        status: claim.status.clone(),
                        org_id: Some(claim.org_id.clone()),
                        recognized: claim.approval_status().is_some(),
                    },
                    None => AttributeState {
                        code: code.clone(),
                        status: ApprovalStatus::Pending.as_str().to_string(),
                        org_id: None,
                        recognized: true,
                    },
                }
            })
            .collect();

        let fully_approved =
            !attributes.is_empty() && attributes.iter().all(AttributeState::is_approved);

        Self {
            request_id: request.request_id.clone(),
            attributes,
            fully_approved,
        }
    }

    /// Codes whose status text is outside the recognized domain.
    pub fn unrecognized(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|a| !a.recognized)
            .map(|a| a.code.as_str())
            .collect()
    }
}
