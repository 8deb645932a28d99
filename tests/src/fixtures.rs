//! Shared fixtures for the integration suites.

use dx_01_ledger_store::LedgerStore;
use dx_02_entity_repository::ListStrategy;
use dx_03_approval_authorization::{AuthorizationConfig, PeerIdentity};
use ledger_runtime::ContractRouter;
use shared_types::{ClientIdentity, ContractError, InvocationContext};
use std::collections::BTreeMap;

pub const ORG1_SUBJECT: &str = "x509::CN=peer1.org1.example.com,OU=peer::CN=ca.org1.example.com";
pub const ORG2_SUBJECT: &str = "x509::CN=peer1.org2.example.com,OU=peer::CN=ca.org2.example.com";

/// `org1-peer1` approves for org `A`, `org2-peer1` for org `B`.
pub fn authorization() -> AuthorizationConfig {
    AuthorizationConfig {
        peers: vec![
            PeerIdentity::new("org1-peer1", "peer1.org1.example.com").with_msp_id("Org1MSP"),
            PeerIdentity::new("org2-peer1", "peer1.org2.example.com").with_msp_id("Org2MSP"),
        ],
        org_table: BTreeMap::from([
            ("org1-peer1".to_string(), "A".to_string()),
            ("org2-peer1".to_string(), "B".to_string()),
        ]),
    }
}

pub fn router(strategy: ListStrategy) -> ContractRouter {
    ContractRouter::new(authorization(), strategy).unwrap()
}

pub fn org_a(tx_id: &str, timestamp: u64) -> InvocationContext {
    InvocationContext::new(tx_id, timestamp, ClientIdentity::new("Org1MSP", ORG1_SUBJECT))
}

pub fn org_b(tx_id: &str, timestamp: u64) -> InvocationContext {
    InvocationContext::new(tx_id, timestamp, ClientIdentity::new("Org2MSP", ORG2_SUBJECT))
}

pub fn stranger(tx_id: &str, timestamp: u64) -> InvocationContext {
    InvocationContext::new(
        tx_id,
        timestamp,
        ClientIdentity::new("Org3MSP", "x509::CN=peer0.org3.example.com"),
    )
}

pub fn call<S: LedgerStore + ?Sized>(
    router: &ContractRouter,
    store: &mut S,
    ctx: &InvocationContext,
    contract: &str,
    function: &str,
    args: &[&str],
) -> Result<String, ContractError> {
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    router.invoke(store, ctx, contract, function, &args)
}

/// Positional `CreateDataRequest` / `UpdateDataRequest` arguments.
pub fn data_request_args<'a>(
    request_id: &'a str,
    campaign_id: &'a str,
    codes: &'a str,
    claims: &'a str,
) -> Vec<&'a str> {
    vec![
        request_id,
        "attribute request",
        "2024-01-01",
        "",
        "alice",
        "alice",
        codes,
        claims,
        "",
        campaign_id,
        "",
        "false",
    ]
}
