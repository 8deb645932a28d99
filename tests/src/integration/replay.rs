//! # Deterministic Replay
//!
//! Every endorsing peer executes the same invocations independently. The
//! resulting ledgers must be byte-identical regardless of the backing store
//! or the configured list strategy.

#[cfg(test)]
mod tests {
    use crate::fixtures::{call, data_request_args, org_a, org_b, router};
    use dx_01_ledger_store::{state_digest, FileBackedLedger, InMemoryLedger, LedgerStore};
    use dx_02_entity_repository::ListStrategy;
    use ledger_runtime::{COST_CONTRACT, DATA_REQUEST_CONTRACT, NOTIFICATION_CONTRACT};
    use proptest::prelude::*;
    use shared_types::InvocationContext;

    #[derive(Debug)]
    struct Step {
        ctx: InvocationContext,
        contract: &'static str,
        function: &'static str,
        args: Vec<String>,
    }

    fn step(ctx: InvocationContext, contract: &'static str, function: &'static str, args: &[&str]) -> Step {
        Step {
            ctx,
            contract,
            function,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn scenario() -> Vec<Step> {
        vec![
            step(
                org_a("tx1", 100),
                DATA_REQUEST_CONTRACT,
                "CreateDataRequest",
                &data_request_args("r1", "c1", "age,zip", ""),
            ),
            step(
                org_a("tx2", 110),
                DATA_REQUEST_CONTRACT,
                "UpdateDataRequest",
                &data_request_args("r1", "c1", "age,zip", "AttributeStatus(name=zip, orgId=B, status=approved)"),
            ),
            step(
                org_b("tx3", 120),
                DATA_REQUEST_CONTRACT,
                "UpdateDataRequest",
                &data_request_args("r1", "c1", "age,zip", "AttributeStatus(name=zip, orgId=B, status=approved)"),
            ),
            step(
                org_a("tx4", 130),
                COST_CONTRACT,
                "CreateCampaignTransaction",
                &[r#"{"id":"t1","dataRequestId":"r1","campaignId":"c1","totalCost":12.5}"#],
            ),
            step(
                org_a("tx5", 140),
                NOTIFICATION_CONTRACT,
                "CreateUserNotification",
                &[r#"{"id":"n1","requestId":"r1","campaignId":"c1","owner":"alice","status":"unread"}"#],
            ),
            step(
                org_a("tx6", 150),
                NOTIFICATION_CONTRACT,
                "UpdateNotification",
                &["n1", r#"{"id":"n1","requestId":"r1","campaignId":"c1","owner":"alice","status":"read"}"#],
            ),
            step(
                org_a("tx7", 160),
                DATA_REQUEST_CONTRACT,
                "CreateDataRequest",
                &data_request_args("r2", "c2", "age", ""),
            ),
            step(org_a("tx8", 170), DATA_REQUEST_CONTRACT, "DeleteDataRequest", &["r2"]),
        ]
    }

    /// Apply each step, recording whether it succeeded.
    fn replay<S: LedgerStore + ?Sized>(strategy: ListStrategy, store: &mut S, steps: &[Step]) -> Vec<bool> {
        let router = router(strategy);
        steps
            .iter()
            .map(|s| {
                router
                    .invoke(store, &s.ctx, s.contract, s.function, &s.args)
                    .is_ok()
            })
            .collect()
    }

    #[test]
    fn test_memory_and_file_ledgers_agree() {
        let steps = scenario();
        let dir = tempfile::tempdir().unwrap();

        let mut memory = InMemoryLedger::new();
        let mut file = FileBackedLedger::open(dir.path().join("ledger.bin")).unwrap();

        let outcomes = replay(ListStrategy::RangeScan, &mut memory, &steps);
        assert_eq!(replay(ListStrategy::RangeScan, &mut file, &steps), outcomes);
        assert_eq!(outcomes, vec![true, false, true, true, true, true, true, true]);

        assert_eq!(state_digest(&memory).unwrap(), state_digest(&file).unwrap());
    }

    #[test]
    fn test_list_strategy_does_not_change_written_state() {
        let steps = scenario();
        let mut scanned = InMemoryLedger::new();
        let mut queried = InMemoryLedger::new();
        replay(ListStrategy::RangeScan, &mut scanned, &steps);
        replay(ListStrategy::PredicateQuery, &mut queried, &steps);
        assert_eq!(state_digest(&scanned).unwrap(), state_digest(&queried).unwrap());
    }

    #[test]
    fn test_reopened_file_ledger_matches_replay() {
        let steps = scenario();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.bin");

        let expected = {
            let mut file = FileBackedLedger::open(&path).unwrap();
            replay(ListStrategy::RangeScan, &mut file, &steps);
            state_digest(&file).unwrap()
        };

        let reopened = FileBackedLedger::open(&path).unwrap();
        assert_eq!(state_digest(&reopened).unwrap(), expected);
        assert!(reopened.get_state("data_r2").unwrap().is_none());
    }

    #[test]
    fn test_timestamps_come_from_the_transaction() {
        let steps = scenario();
        let mut first = InMemoryLedger::new();
        let mut second = InMemoryLedger::new();
        replay(ListStrategy::RangeScan, &mut first, &steps);
        std::thread::sleep(std::time::Duration::from_millis(5));
        replay(ListStrategy::RangeScan, &mut second, &steps);
        assert_eq!(state_digest(&first).unwrap(), state_digest(&second).unwrap());

        let raw = first.get_state("notification_n1").unwrap().unwrap();
        let stored: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(stored["createdOn"], 140);
    }

    fn arb_step() -> impl Strategy<Value = Step> {
        let id = prop::sample::select(vec!["r1", "r2", "r3"]);
        let approver = prop::bool::ANY;
        (0u8..4, id, approver, 0u64..1_000).prop_map(|(op, id, as_b, ts)| {
            let ctx = if as_b { org_b("tx", ts) } else { org_a("tx", ts) };
            match op {
                0 => step(
                    ctx,
                    DATA_REQUEST_CONTRACT,
                    "CreateDataRequest",
                    &data_request_args(id, "c1", "x", ""),
                ),
                1 => step(
                    ctx,
                    DATA_REQUEST_CONTRACT,
                    "UpdateDataRequest",
                    &data_request_args(id, "c1", "x", "AttributeStatus(name=x, orgId=A, status=approved)"),
                ),
                2 => step(ctx, DATA_REQUEST_CONTRACT, "DeleteDataRequest", &[id]),
                _ => step(ctx, NOTIFICATION_CONTRACT, "DeleteNotification", &[id]),
            }
        })
    }

    proptest! {
        #[test]
        fn prop_replay_is_deterministic(steps in prop::collection::vec(arb_step(), 0..24)) {
            let mut scanned = InMemoryLedger::new();
            let mut queried = InMemoryLedger::new();
            let a = replay(ListStrategy::RangeScan, &mut scanned, &steps);
            let b = replay(ListStrategy::PredicateQuery, &mut queried, &steps);
            prop_assert_eq!(a, b);
            prop_assert_eq!(state_digest(&scanned).unwrap(), state_digest(&queried).unwrap());
        }
    }
}
