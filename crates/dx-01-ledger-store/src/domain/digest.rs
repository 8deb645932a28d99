//! # State Digest
//!
//! SHA3-256 over the full ordered key space. Two ledgers hold byte-identical
//! state exactly when their digests are equal, which is how replayed
//! executions are compared.

use crate::domain::LedgerError;
use crate::ports::LedgerStore;
use sha3::{Digest, Sha3_256};

/// Digest of the whole ledger: `len(key) || key || len(value) || value` for
/// every entry in key order, lengths as little-endian u64.
pub fn state_digest<S: LedgerStore + ?Sized>(store: &S) -> Result<[u8; 32], LedgerError> {
    let mut hasher = Sha3_256::new();
    for entry in store.get_state_by_range("", "")? {
        hasher.update((entry.key.len() as u64).to_le_bytes());
        hasher.update(entry.key.as_bytes());
        hasher.update((entry.value.len() as u64).to_le_bytes());
        hasher.update(&entry.value);
    }
    Ok(hasher.finalize().into())
}

/// Hex rendering of [`state_digest`].
pub fn state_digest_hex<S: LedgerStore + ?Sized>(store: &S) -> Result<String, LedgerError> {
    state_digest(store).map(hex::encode)
}
