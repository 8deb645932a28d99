//! Authorization configuration: the recognized peers and the
//! identity-to-org table.

use crate::domain::{AuthorizationError, PeerIdentity, UNKNOWN_IDENTITY};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizationConfig {
    /// Recognized peers, matched in order.
    pub peers: Vec<PeerIdentity>,
    /// Identity key -> org id the identity may approve for.
    pub org_table: BTreeMap<String, String>,
}

impl Default for AuthorizationConfig {
    fn default() -> Self {
        Self {
            peers: vec![
                PeerIdentity::new("org1-peer1", "org1.example.com").with_msp_id("Org1MSP"),
                PeerIdentity::new("org2-peer1", "org2.example.com").with_msp_id("Org2MSP"),
            ],
            org_table: BTreeMap::from([
                ("org1-peer1".to_string(), "Org1MSP".to_string()),
                ("org2-peer1".to_string(), "Org2MSP".to_string()),
            ]),
        }
    }
}

impl AuthorizationConfig {
    pub fn validate(&self) -> Result<(), AuthorizationError> {
        let mut keys = BTreeSet::new();
        for peer in &self.peers {
            if peer.key.trim().is_empty() || peer.subject_marker.trim().is_empty() {
                return Err(invalid("peer key and subject marker must be non-empty"));
            }
            if peer.key == UNKNOWN_IDENTITY {
                return Err(invalid(format!(
                    "peer key \"{UNKNOWN_IDENTITY}\" is reserved"
                )));
            }
            if !keys.insert(peer.key.as_str()) {
                return Err(invalid(format!("duplicate peer key {}", peer.key)));
            }
        }

        for (identity, org_id) in &self.org_table {
            if identity == UNKNOWN_IDENTITY {
                return Err(invalid(format!(
                    "org table must not grant an org to \"{UNKNOWN_IDENTITY}\""
                )));
            }
            if !keys.contains(identity.as_str()) {
                return Err(invalid(format!(
                    "org table entry {identity} names no configured peer"
                )));
            }
            if org_id.trim().is_empty() {
                return Err(invalid(format!("org table entry {identity} has an empty org id")));
            }
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> AuthorizationError {
    AuthorizationError::InvalidConfig {
        reason: reason.into(),
    }
}
