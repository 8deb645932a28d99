//! # Namespace Isolation
//!
//! The three contracts share one ledger. Each entity family lives under its
//! own key prefix, and every listing or lookup stays inside that prefix
//! whichever list strategy is configured.

#[cfg(test)]
mod tests {
    use crate::fixtures::{call, data_request_args, org_a, router};
    use dx_01_ledger_store::{InMemoryLedger, LedgerStore};
    use dx_02_entity_repository::ListStrategy;
    use ledger_runtime::{ContractRouter, COST_CONTRACT, DATA_REQUEST_CONTRACT, NOTIFICATION_CONTRACT};
    use serde_json::{json, Value};
    use shared_types::ErrorCode;

    /// One data request, one cost transfer and one notification, all for
    /// campaign `c1` and all with id `r1`.
    fn populate(router: &ContractRouter, ledger: &mut InMemoryLedger) {
        call(
            router,
            ledger,
            &org_a("tx1", 100),
            DATA_REQUEST_CONTRACT,
            "CreateDataRequest",
            &data_request_args("r1", "c1", "x", ""),
        )
        .unwrap();
        let cost = json!({
            "id": "r1",
            "dataRequestId": "r1",
            "campaignId": "c1",
            "costPerImpression": 0.25,
            "channel": "web",
            "totalCost": 10.0,
        })
        .to_string();
        call(router, ledger, &org_a("tx2", 101), COST_CONTRACT, "CreateCampaignTransaction", &[&cost])
            .unwrap();
        let notification = json!({
            "id": "r1",
            "requestId": "r1",
            "campaignId": "c1",
            "count": 3,
            "owner": "alice",
            "message": "review requested",
            "status": "unread",
        })
        .to_string();
        call(
            router,
            ledger,
            &org_a("tx3", 102),
            NOTIFICATION_CONTRACT,
            "CreateUserNotification",
            &[&notification],
        )
        .unwrap();
    }

    fn list(router: &ContractRouter, ledger: &mut InMemoryLedger, contract: &str, function: &str) -> Vec<Value> {
        let raw = call(router, ledger, &org_a("q", 0), contract, function, &[]).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_same_id_lands_under_distinct_prefixes() {
        let router = router(ListStrategy::RangeScan);
        let mut ledger = InMemoryLedger::new();
        populate(&router, &mut ledger);

        assert_eq!(ledger.len(), 3);
        for key in ["data_r1", "cost_r1", "notification_r1"] {
            assert!(ledger.get_state(key).unwrap().is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_listings_stay_inside_their_namespace() {
        for strategy in [ListStrategy::RangeScan, ListStrategy::PredicateQuery] {
            let router = router(strategy);
            let mut ledger = InMemoryLedger::new();
            populate(&router, &mut ledger);

            let requests = list(&router, &mut ledger, DATA_REQUEST_CONTRACT, "GetAllDataRequests");
            assert_eq!(requests.len(), 1);
            assert_eq!(requests[0]["requestId"], "r1");

            let costs = list(&router, &mut ledger, COST_CONTRACT, "GetAllCostTransfers");
            assert_eq!(costs.len(), 1);
            assert_eq!(costs[0]["channel"], "web");

            let notifications =
                list(&router, &mut ledger, NOTIFICATION_CONTRACT, "GetAllUserNotifications");
            assert_eq!(notifications.len(), 1);
            assert_eq!(notifications[0]["owner"], "alice");
        }
    }

    #[test]
    fn test_campaign_lookups_do_not_cross_entity_families() {
        let router = router(ListStrategy::PredicateQuery);
        let mut ledger = InMemoryLedger::new();
        populate(&router, &mut ledger);

        let raw = call(&router, &mut ledger, &org_a("q", 0), DATA_REQUEST_CONTRACT, "FindByCampaignId", &["c1"])
            .unwrap();
        let requests: Vec<Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].get("attributeCodeList").is_some());

        let raw = call(&router, &mut ledger, &org_a("q", 0), NOTIFICATION_CONTRACT, "FindByCampaignId", &["c1"])
            .unwrap();
        let notification: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(notification["message"], "review requested");

        let raw = call(
            &router,
            &mut ledger,
            &org_a("q", 0),
            COST_CONTRACT,
            "FindCostTransfersByCampaignId",
            &["c1"],
        )
        .unwrap();
        let costs: Vec<Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(costs.len(), 1);
        assert_eq!(costs[0]["dataRequestId"], "r1");
    }

    #[test]
    fn test_deleting_one_family_leaves_the_others() {
        let router = router(ListStrategy::RangeScan);
        let mut ledger = InMemoryLedger::new();
        populate(&router, &mut ledger);

        call(&router, &mut ledger, &org_a("tx4", 103), COST_CONTRACT, "DeleteCostTransfer", &["r1"])
            .unwrap();

        assert!(ledger.get_state("cost_r1").unwrap().is_none());
        assert!(ledger.get_state("data_r1").unwrap().is_some());
        assert!(ledger.get_state("notification_r1").unwrap().is_some());

        let exists = call(&router, &mut ledger, &org_a("q", 0), DATA_REQUEST_CONTRACT, "DataRequestExists", &["r1"])
            .unwrap();
        assert_eq!(exists, "true");

        let err = call(&router, &mut ledger, &org_a("q", 0), COST_CONTRACT, "FindByTransferId", &["r1"])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_returned_id_reads_back_the_created_record() {
        let router = router(ListStrategy::RangeScan);
        let mut ledger = InMemoryLedger::new();

        let raw = call(
            &router,
            &mut ledger,
            &org_a("tx1", 100),
            DATA_REQUEST_CONTRACT,
            "CreateDataRequest",
            &data_request_args("data_x", "c1", "x", ""),
        )
        .unwrap();
        let created: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(created["requestId"], "x");
        let id = created["requestId"].as_str().unwrap();
        let raw = call(&router, &mut ledger, &org_a("q", 0), DATA_REQUEST_CONTRACT, "FindByRequestId", &[id])
            .unwrap();
        assert_eq!(serde_json::from_str::<Value>(&raw).unwrap(), created);

        let err = call(
            &router,
            &mut ledger,
            &org_a("tx2", 101),
            DATA_REQUEST_CONTRACT,
            "CreateDataRequest",
            &data_request_args("data_data_x", "c1", "x", ""),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_foreign_json_under_a_prefix_is_ignored_by_queries() {
        let router = router(ListStrategy::PredicateQuery);
        let mut ledger = InMemoryLedger::new();
        populate(&router, &mut ledger);
        ledger
            .put_state("other_r1", br#"{"campaignId":"c1","owner":"alice"}"#)
            .unwrap();

        let raw = call(&router, &mut ledger, &org_a("q", 0), NOTIFICATION_CONTRACT, "FindByOwner", &["alice"])
            .unwrap();
        let found: Vec<Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["id"], "r1");
    }
}
