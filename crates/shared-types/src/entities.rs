//! # Approval Claim Entities
//!
//! Defines the attribute approval claim embedded in every data request and
//! the status domain the lifecycle recognizes.
//!
//! A claim's `status` is free-form text on the wire. Only an explicit
//! `approved` (any letter case) is an authorization-relevant transition;
//! every other value passes through unchecked.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The status value that triggers authorization checking.
pub const APPROVED_STATUS: &str = "approved";

/// One approval claim: `orgId` asserts `status` for attribute `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeStatus {
    /// Attribute code the claim refers to.
    pub name: String,
    /// Organization asserting the claim.
    pub org_id: String,
    /// Claimed status, kept verbatim.
    pub status: String,
}

impl AttributeStatus {
    pub fn new(
        name: impl Into<String>,
        org_id: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            org_id: org_id.into(),
            status: status.into(),
        }
    }

    /// True when this claim asserts `approved` (case-insensitive).
    pub fn is_approval(&self) -> bool {
        self.status.eq_ignore_ascii_case(APPROVED_STATUS)
    }

    /// The recognized status, if the claim's text names one.
    pub fn approval_status(&self) -> Option<ApprovalStatus> {
        ApprovalStatus::parse(&self.status)
    }
}

/// Canonical text notation: `AttributeStatus(name=x, orgId=A, status=approved)`.
impl fmt::Display for AttributeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AttributeStatus(name={}, orgId={}, status={})",
            self.name, self.org_id, self.status
        )
    }
}

/// Per-attribute approval state.
///
/// `Pending` is the implicit state of any requested attribute that has no
/// claim yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    DeemedApproved,
    DeemedRejected,
}

impl ApprovalStatus {
    pub const ALL: [ApprovalStatus; 5] = [
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
        ApprovalStatus::DeemedApproved,
        ApprovalStatus::DeemedRejected,
    ];

    /// Parse a claim status, ignoring letter case.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
    }

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
            ApprovalStatus::DeemedApproved => "deemedApproved",
            ApprovalStatus::DeemedRejected => "deemedRejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
