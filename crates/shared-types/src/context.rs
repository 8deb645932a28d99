//! # Invocation Context
//!
//! The per-invocation values supplied by the hosting ledger. A contract call
//! receives exactly one [`InvocationContext`] and must derive every decision
//! from it plus the current ledger state.

use serde::{Deserialize, Serialize};

/// Credential of the client that submitted the invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientIdentity {
    /// Membership service provider id of the submitting organization.
    pub msp_id: String,
    /// Distinguished name of the client certificate subject.
    pub subject: String,
}

impl ClientIdentity {
    pub fn new(msp_id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            msp_id: msp_id.into(),
            subject: subject.into(),
        }
    }
}

/// Everything a contract call may know about the invocation itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InvocationContext {
    /// Transaction id assigned by the ledger.
    pub tx_id: String,
    /// Transaction timestamp (seconds since epoch) assigned by the ledger.
    pub tx_timestamp: u64,
    /// Caller credential.
    pub creator: ClientIdentity,
}

impl InvocationContext {
    pub fn new(tx_id: impl Into<String>, tx_timestamp: u64, creator: ClientIdentity) -> Self {
        Self {
            tx_id: tx_id.into(),
            tx_timestamp,
            creator,
        }
    }

    /// Certificate subject of the caller.
    pub fn subject(&self) -> &str {
        &self.creator.subject
    }

    /// MSP id of the caller.
    pub fn msp_id(&self) -> &str {
        &self.creator.msp_id
    }
}
