//! # Approval Flow
//!
//! A data request collecting approvals from two organizations, driven
//! through the contract router against a file-backed ledger.

#[cfg(test)]
mod tests {
    use crate::fixtures::{call, data_request_args, org_a, org_b, router, stranger};
    use dx_01_ledger_store::{state_digest, FileBackedLedger, LedgerStore};
    use dx_02_entity_repository::ListStrategy;
    use ledger_runtime::DATA_REQUEST_CONTRACT;
    use serde_json::Value;
    use shared_types::ErrorCode;

    const C: &str = DATA_REQUEST_CONTRACT;

    fn read(router: &ledger_runtime::ContractRouter, ledger: &mut FileBackedLedger, id: &str) -> Value {
        let raw = call(router, ledger, &org_a("read", 0), C, "FindByRequestId", &[id]).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_unauthorized_approval_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.bin");
        let router = router(ListStrategy::RangeScan);

        let mut ledger = FileBackedLedger::open(&path).unwrap();
        call(
            &router,
            &mut ledger,
            &org_a("tx1", 100),
            C,
            "CreateDataRequest",
            &data_request_args("r1", "c1", "x", ""),
        )
        .unwrap();
        let original = read(&router, &mut ledger, "r1");
        let before = state_digest(&ledger).unwrap();

        let err = call(
            &router,
            &mut ledger,
            &org_a("tx2", 101),
            C,
            "UpdateDataRequest",
            &data_request_args("r1", "c1", "x", "AttributeStatus(name=x, orgId=B, status=approved)"),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert!(err.message.contains("org B"));

        assert_eq!(read(&router, &mut ledger, "r1"), original);
        assert_eq!(state_digest(&ledger).unwrap(), before);
        assert_eq!(original["attributeStatusList"], serde_json::json!([]));

        drop(ledger);
        let reopened = FileBackedLedger::open(&path).unwrap();
        assert_eq!(state_digest(&reopened).unwrap(), before);
    }

    #[test]
    fn test_completion_needs_approvals_the_guard_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let router = router(ListStrategy::PredicateQuery);
        let mut ledger = FileBackedLedger::open(dir.path().join("ledger.bin")).unwrap();
        let summary = |router: &ledger_runtime::ContractRouter, ledger: &mut FileBackedLedger| -> Value {
            let raw = call(router, ledger, &org_a("q", 0), C, "GetAttributeStatuses", &["r1"]).unwrap();
            serde_json::from_str(&raw).unwrap()
        };

        call(
            &router,
            &mut ledger,
            &org_a("tx1", 100),
            C,
            "CreateDataRequest",
            &data_request_args("r1", "c1", "[\"age\",\"zip\"]", ""),
        )
        .unwrap();

        call(
            &router,
            &mut ledger,
            &org_a("tx2", 110),
            C,
            "UpdateDataRequest",
            &data_request_args("r1", "c1", "age,zip", "AttributeStatus(name=age, orgId=A, status=approved)"),
        )
        .unwrap();
        let partial = summary(&router, &mut ledger);
        assert_eq!(partial["fullyApproved"], false);
        assert_eq!(partial["attributes"][0]["status"], "approved");
        assert_eq!(partial["attributes"][1]["status"], "pending");

        // An update replaces the whole list, so org B cannot resubmit A's approval.
        let before = state_digest(&ledger).unwrap();
        let err = call(
            &router,
            &mut ledger,
            &org_b("tx3", 120),
            C,
            "UpdateDataRequest",
            &data_request_args(
                "r1",
                "c1",
                "age,zip",
                "AttributeStatus(name=age, orgId=A, status=approved)AttributeStatus(name=zip, orgId=B, status=approved)",
            ),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(state_digest(&ledger).unwrap(), before);

        // Ungated statuses are stored but never complete a request.
        call(
            &router,
            &mut ledger,
            &stranger("tx4", 130),
            C,
            "UpdateDataRequest",
            &data_request_args(
                "r1",
                "c1",
                "age,zip",
                "AttributeStatus(name=age, orgId=A, status=deemedApproved)AttributeStatus(name=zip, orgId=B, status=deemedApproved)",
            ),
        )
        .unwrap();
        let deemed = summary(&router, &mut ledger);
        assert_eq!(deemed["attributes"][1]["status"], "deemedApproved");
        assert_eq!(deemed["fullyApproved"], false);

        call(
            &router,
            &mut ledger,
            &org_b("tx5", 140),
            C,
            "UpdateDataRequest",
            &data_request_args(
                "r1",
                "c1",
                "age,zip",
                "AttributeStatus(name=age, orgId=B, status=approved), AttributeStatus(name=zip, orgId=B, status=approved)",
            ),
        )
        .unwrap();
        let complete = summary(&router, &mut ledger);
        assert_eq!(complete["fullyApproved"], true);
        assert_eq!(complete["attributes"][0]["orgId"], "B");
        assert_eq!(complete["attributes"][1]["orgId"], "B");
    }

    #[test]
    fn test_unknown_caller_may_only_post_non_approvals() {
        let dir = tempfile::tempdir().unwrap();
        let router = router(ListStrategy::RangeScan);
        let mut ledger = FileBackedLedger::open(dir.path().join("ledger.bin")).unwrap();
        call(
            &router,
            &mut ledger,
            &org_a("tx1", 100),
            C,
            "CreateDataRequest",
            &data_request_args("r1", "c1", "x", ""),
        )
        .unwrap();

        call(
            &router,
            &mut ledger,
            &stranger("tx2", 101),
            C,
            "UpdateDataRequest",
            &data_request_args("r1", "c1", "x", "AttributeStatus(name=x, orgId=A, status=rejected)"),
        )
        .unwrap();

        let err = call(
            &router,
            &mut ledger,
            &stranger("tx3", 102),
            C,
            "UpdateDataRequest",
            &data_request_args("r1", "c1", "x", "AttributeStatus(name=x, orgId=A, status=Approved)"),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert_eq!(read(&router, &mut ledger, "r1")["attributeStatusList"][0]["status"], "rejected");
        assert!(ledger.get_state("data_r1").unwrap().is_some());
    }

    #[test]
    fn test_claims_for_unrequested_codes_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let router = router(ListStrategy::RangeScan);
        let mut ledger = FileBackedLedger::open(dir.path().join("ledger.bin")).unwrap();
        call(
            &router,
            &mut ledger,
            &org_a("tx1", 100),
            C,
            "CreateDataRequest",
            &data_request_args("r1", "c1", "x", ""),
        )
        .unwrap();
        let err = call(
            &router,
            &mut ledger,
            &org_a("tx2", 101),
            C,
            "UpdateDataRequest",
            &data_request_args("r1", "c1", "x", "AttributeStatus(name=y, orgId=A, status=approved)"),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAttribute);
    }
}
