//! # Identity Resolution
//!
//! Maps a caller certificate to a canonical peer-identity key by matching
//! subject markers against an ordered list of recognized peers.

use serde::{Deserialize, Serialize};
use shared_types::ClientIdentity;

/// Key assigned to every caller no peer entry recognizes.
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// One recognized peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerIdentity {
    /// Canonical identity key, looked up in the org table.
    pub key: String,
    /// Substring that must occur in the certificate subject.
    pub subject_marker: String,
    /// When set, the caller's MSP id must also match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msp_id: Option<String>,
}

impl PeerIdentity {
    pub fn new(key: impl Into<String>, subject_marker: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            subject_marker: subject_marker.into(),
            msp_id: None,
        }
    }

    pub fn with_msp_id(mut self, msp_id: impl Into<String>) -> Self {
        self.msp_id = Some(msp_id.into());
        self
    }

    pub fn matches(&self, caller: &ClientIdentity) -> bool {
        caller.subject.contains(&self.subject_marker)
            && self
                .msp_id
                .as_deref()
                .map_or(true, |msp| msp == caller.msp_id)
    }
}

/// First-match resolver over an ordered peer list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityResolver {
    peers: Vec<PeerIdentity>,
}

impl IdentityResolver {
    pub fn new(peers: Vec<PeerIdentity>) -> Self {
        Self { peers }
    }

    pub fn peers(&self) -> &[PeerIdentity] {
        &self.peers
    }

    /// Identity key for `caller`, or [`UNKNOWN_IDENTITY`].
    pub fn resolve(&self, caller: &ClientIdentity) -> &str {
        self.peers
            .iter()
            .find(|peer| peer.matches(caller))
            .map_or(UNKNOWN_IDENTITY, |peer| peer.key.as_str())
    }
}
