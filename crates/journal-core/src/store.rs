//! Typed record store over a ledger.
//!
//! Raw keys, journal records, the journal index and the bootstrap counter all
//! share the ledger's flat namespace. This layer keeps the reserved keys out
//! of reach of raw writes so callers can never clobber them by choosing a
//! colliding name.

use tracing::debug;

use crate::error::{JournalError, Result};
use crate::journal::Journal;
use crate::storage::Ledger;

/// Key holding the JSON array of journal keys.
pub const INDEX_KEY: &str = "_journalindex";

/// Key holding the bootstrap counter as a decimal string.
pub const COUNTER_KEY: &str = "_counter";

/// Keys owned by the store itself.
pub const RESERVED_KEYS: [&str; 2] = [INDEX_KEY, COUNTER_KEY];

/// Whether `key` is owned by the store and closed to raw writes.
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Decode a stored index.
///
/// A JSON `null` decodes as the empty index; older ledgers wrote `null` when
/// the index was cleared.
pub fn decode_index(bytes: &[u8]) -> Result<Vec<String>> {
    let index: Option<Vec<String>> = serde_json::from_slice(bytes).map_err(|e| {
        JournalError::DeserializationFailure(format!("journal index is malformed: {}", e))
    })?;
    Ok(index.unwrap_or_default())
}

pub fn encode_index(index: &[String]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(index)?)
}

/// Record store owning its ledger.
pub struct RecordStore<L> {
    ledger: L,
}

impl<L: Ledger> RecordStore<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn into_inner(self) -> L {
        self.ledger
    }

    // --- Raw access ---

    /// Read the bytes stored under any key, reserved keys included.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::LookupFailure` naming the key if it is absent
    /// or the ledger read fails.
    pub fn get_raw(&self, key: &str) -> Result<Vec<u8>> {
        match self.ledger.get(key) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(JournalError::LookupFailure(format!(
                "failed to get state for {}",
                key
            ))),
            Err(err) => Err(JournalError::LookupFailure(format!(
                "failed to get state for {}: {}",
                key, err
            ))),
        }
    }

    /// Write bytes verbatim under a caller-chosen key.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::InvalidArgument` for reserved keys and
    /// `JournalError::StorageFailure` if the ledger write fails.
    pub fn put_raw(&mut self, key: &str, value: &[u8]) -> Result<()> {
        if is_reserved(key) {
            return Err(JournalError::InvalidArgument(format!(
                "key {} is reserved",
                key
            )));
        }
        debug!(key, bytes = value.len(), "raw put");
        self.ledger.put(key, value)
    }

    pub fn exists(&self, key: &str) -> Result<bool> {
        self.ledger.exists(key)
    }

    /// Every key in the ledger, ascending.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.ledger.keys()
    }

    // --- Journals ---

    /// Read the journal stored under `cpr`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::DeserializationFailure` if the key holds a
    /// value that is not a journal.
    pub fn get_journal(&self, cpr: &str) -> Result<Option<Journal>> {
        match self.ledger.get(cpr)? {
            Some(bytes) => Journal::from_bytes(&bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Write a journal record and the index that lists it as one batch.
    pub fn commit_journal(&mut self, journal: &Journal, index: &[String]) -> Result<()> {
        let writes = vec![
            (journal.cpr.clone(), journal.to_bytes()?),
            (INDEX_KEY.to_string(), encode_index(index)?),
        ];
        self.ledger.put_batch(&writes)
    }

    // --- Index ---

    /// Read the journal index.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::LookupFailure` if the index was never written
    /// (the ledger has not been bootstrapped) or cannot be read, and
    /// `JournalError::DeserializationFailure` if it is malformed.
    pub fn get_index(&self) -> Result<Vec<String>> {
        let bytes = self
            .ledger
            .get(INDEX_KEY)
            .map_err(|e| {
                JournalError::LookupFailure(format!("failed to get journal index: {}", e))
            })?
            .ok_or_else(|| {
                JournalError::LookupFailure("failed to get journal index".to_string())
            })?;
        decode_index(&bytes)
    }

    pub fn put_index(&mut self, index: &[String]) -> Result<()> {
        self.ledger.put(INDEX_KEY, &encode_index(index)?)
    }

    // --- Counter ---

    pub fn put_counter(&mut self, value: i64) -> Result<()> {
        self.ledger.put(COUNTER_KEY, value.to_string().as_bytes())
    }

    /// Read the bootstrap counter, if the ledger has been bootstrapped.
    pub fn get_counter(&self) -> Result<Option<i64>> {
        let Some(bytes) = self.ledger.get(COUNTER_KEY)? else {
            return Ok(None);
        };
        let text = String::from_utf8(bytes).map_err(|e| {
            JournalError::DeserializationFailure(format!("counter is not UTF-8: {}", e))
        })?;
        text.parse().map(Some).map_err(|e| {
            JournalError::DeserializationFailure(format!(
                "counter {:?} is not an integer: {}",
                text, e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryLedger;

    fn store() -> RecordStore<MemoryLedger> {
        RecordStore::new(MemoryLedger::new())
    }

    #[test]
    fn test_raw_round_trip() {
        let mut store = store();
        store.put_raw("greeting", b"hello").unwrap();
        assert_eq!(store.get_raw("greeting").unwrap(), b"hello");
    }

    #[test]
    fn test_get_raw_missing_names_key() {
        let store = store();
        let err = store.get_raw("nowhere").unwrap_err();
        assert!(matches!(err, JournalError::LookupFailure(ref msg) if msg.contains("nowhere")));
    }

    #[test]
    fn test_put_raw_rejects_reserved_keys() {
        let mut store = store();
        for key in RESERVED_KEYS {
            let err = store.put_raw(key, b"[]").unwrap_err();
            assert!(matches!(err, JournalError::InvalidArgument(_)));
        }
        assert!(store.ledger().is_empty());
    }

    #[test]
    fn test_reserved_keys_are_readable() {
        let mut store = store();
        store.put_index(&[]).unwrap();
        assert_eq!(store.get_raw(INDEX_KEY).unwrap(), b"[]");
    }

    #[test]
    fn test_missing_index_is_lookup_failure() {
        let store = store();
        assert!(matches!(
            store.get_index(),
            Err(JournalError::LookupFailure(_))
        ));
    }

    #[test]
    fn test_decode_index_accepts_null() {
        assert!(decode_index(b"null").unwrap().is_empty());
        assert_eq!(decode_index(br#"["a","b"]"#).unwrap(), vec!["a", "b"]);
        assert!(matches!(
            decode_index(b"not json"),
            Err(JournalError::DeserializationFailure(_))
        ));
    }

    #[test]
    fn test_get_journal_distinguishes_absent_and_malformed() {
        let mut store = store();
        assert!(store.get_journal("1").unwrap().is_none());
        store.put_raw("1", b"plain text").unwrap();
        assert!(matches!(
            store.get_journal("1"),
            Err(JournalError::DeserializationFailure(_))
        ));
    }

    #[test]
    fn test_commit_journal_writes_record_and_index() {
        let mut store = store();
        let journal = Journal::new("Alice", "1", "open", "active", "t");
        store
            .commit_journal(&journal, &["1".to_string()])
            .unwrap();
        assert_eq!(store.get_journal("1").unwrap(), Some(journal));
        assert_eq!(store.get_index().unwrap(), vec!["1"]);
    }

    #[test]
    fn test_counter_round_trip() {
        let mut store = store();
        assert_eq!(store.get_counter().unwrap(), None);
        store.put_counter(-7).unwrap();
        assert_eq!(store.get_raw(COUNTER_KEY).unwrap(), b"-7");
        assert_eq!(store.get_counter().unwrap(), Some(-7));
    }
}
