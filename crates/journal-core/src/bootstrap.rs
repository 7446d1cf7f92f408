//! Ledger bootstrap: seed the counter and clear the journal index.

use tracing::info;

use crate::args::expect_count;
use crate::error::{JournalError, Result};
use crate::storage::Ledger;
use crate::store::RecordStore;

/// Reset the ledger from the single argument `initial_counter`.
///
/// Writes the counter, then an empty index. Journal records already in the
/// ledger are left in place but are no longer indexed; `reconcile_index`
/// brings them back.
///
/// # Errors
///
/// Returns `JournalError::InvalidArgument` if there is not exactly one
/// argument or it is not a decimal integer. A failed counter write aborts
/// before the index is touched.
pub fn reset<L: Ledger>(store: &mut RecordStore<L>, args: &[String]) -> Result<i64> {
    expect_count(args, 1, "initial counter")?;
    let counter: i64 = args[0].parse().map_err(|_| {
        JournalError::InvalidArgument(format!(
            "expecting integer value for the counter, got {:?}",
            args[0]
        ))
    })?;

    store.put_counter(counter)?;
    store.put_index(&[])?;
    info!(counter, "ledger reset");
    Ok(counter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryLedger;
    use crate::store::{COUNTER_KEY, INDEX_KEY};

    fn one(value: &str) -> Vec<String> {
        vec![value.to_string()]
    }

    #[test]
    fn test_reset_writes_counter_and_empty_index() {
        let mut store = RecordStore::new(MemoryLedger::new());
        assert_eq!(reset(&mut store, &one("100")).unwrap(), 100);
        assert_eq!(store.get_raw(COUNTER_KEY).unwrap(), b"100");
        assert_eq!(store.get_raw(INDEX_KEY).unwrap(), b"[]");
    }

    #[test]
    fn test_reset_clears_existing_index() {
        let mut store = RecordStore::new(MemoryLedger::new());
        store.put_index(&["a".to_string(), "b".to_string()]).unwrap();
        reset(&mut store, &one("0")).unwrap();
        assert!(store.get_index().unwrap().is_empty());
    }

    #[test]
    fn test_reset_normalizes_sign_and_zeros() {
        let mut store = RecordStore::new(MemoryLedger::new());
        reset(&mut store, &one("+007")).unwrap();
        assert_eq!(store.get_raw(COUNTER_KEY).unwrap(), b"7");
        reset(&mut store, &one("-12")).unwrap();
        assert_eq!(store.get_counter().unwrap(), Some(-12));
    }

    #[test]
    fn test_reset_rejects_bad_arguments() {
        let mut store = RecordStore::new(MemoryLedger::new());
        for bad in [vec![], one("ten"), one(""), one(" 5"), vec!["1".into(), "2".into()]] {
            assert!(matches!(
                reset(&mut store, &bad),
                Err(JournalError::InvalidArgument(_))
            ));
        }
        assert!(store.ledger().is_empty());
    }
}
