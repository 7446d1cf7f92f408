//! Registry properties exercised through the dispatcher on every backend.

use journal_core::storage::{Ledger, MemoryLedger, SqliteLedger};
use journal_core::store::{decode_index, INDEX_KEY};
use journal_core::{Chaincode, JournalError};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn journal(cpr: &str) -> Vec<String> {
    args(&["Name", cpr, "open", "active", "2024-01-01T00:00:00Z"])
}

fn index_of<L: Ledger>(cc: &Chaincode<L>) -> Vec<String> {
    decode_index(&cc.query("read", &args(&[INDEX_KEY])).unwrap()).unwrap()
}

fn backends() -> Vec<(&'static str, Box<dyn Fn() -> Chaincode<Box<dyn Ledger>>>)> {
    vec![
        (
            "memory",
            Box::new(|| Chaincode::new(Box::new(MemoryLedger::new()) as Box<dyn Ledger>)),
        ),
        (
            "sqlite",
            Box::new(|| {
                Chaincode::new(
                    Box::new(SqliteLedger::open_in_memory().unwrap()) as Box<dyn Ledger>
                )
            }),
        ),
    ]
}

#[test]
fn test_append_order_matches_call_order() {
    for (name, make) in backends() {
        let mut cc = make();
        cc.init(&args(&["1"])).unwrap();
        let cprs: Vec<String> = (0..25).rev().map(|i| format!("cpr-{:03}", i)).collect();
        for cpr in &cprs {
            cc.invoke("init_journal", &journal(cpr)).unwrap();
        }
        assert_eq!(index_of(&cc), cprs, "backend {}", name);
    }
}

#[test]
fn test_every_duplicate_is_rejected() {
    for (name, make) in backends() {
        let mut cc = make();
        cc.init(&args(&["1"])).unwrap();
        for cpr in ["a", "b", "c"] {
            cc.invoke("init_journal", &journal(cpr)).unwrap();
        }
        for cpr in ["a", "b", "c"] {
            let err = cc.invoke("init_journal", &journal(cpr)).unwrap_err();
            assert!(
                matches!(err, JournalError::DuplicateKey(_)),
                "backend {}",
                name
            );
        }
        assert_eq!(index_of(&cc), vec!["a", "b", "c"], "backend {}", name);
    }
}

#[test]
fn test_reset_empties_index_regardless_of_prior_state() {
    for (name, make) in backends() {
        let mut cc = make();
        cc.init(&args(&["1"])).unwrap();
        cc.invoke("init_journal", &journal("x")).unwrap();
        cc.invoke("write", &args(&["free", "form"])).unwrap();

        cc.init(&args(&["2"])).unwrap();

        assert!(index_of(&cc).is_empty(), "backend {}", name);
    }
}

#[test]
fn test_raw_round_trip_for_plain_keys() {
    for (name, make) in backends() {
        let mut cc = make();
        for (key, value) in [("k", "v"), ("with space", ""), ("ünïcode", "välue"), ("x", "{\"a\":1}")] {
            cc.invoke("write", &args(&[key, value])).unwrap();
            assert_eq!(
                cc.query("read", &args(&[key])).unwrap(),
                value.as_bytes(),
                "backend {}",
                name
            );
        }
    }
}

#[test]
fn test_create_requires_bootstrap() {
    for (name, make) in backends() {
        let mut cc = make();
        let err = cc.invoke("init_journal", &journal("1")).unwrap_err();
        assert!(
            matches!(err, JournalError::LookupFailure(_)),
            "backend {}",
            name
        );
        assert!(matches!(
            cc.query("read", &args(&["1"])),
            Err(JournalError::LookupFailure(_))
        ));
    }
}
