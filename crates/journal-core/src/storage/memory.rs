//! In-memory ledger backend.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::storage::traits::Ledger;

/// Ledger held entirely in memory. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    state: BTreeMap<String, Vec<u8>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

impl Ledger for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.state.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.state.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn put_batch(&mut self, writes: &[(String, Vec<u8>)]) -> Result<()> {
        for (key, value) in writes {
            self.state.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.state.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.state.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_is_none() {
        let ledger = MemoryLedger::new();
        assert!(ledger.get("missing").unwrap().is_none());
        assert!(!ledger.exists("missing").unwrap());
    }

    #[test]
    fn test_put_overwrites() {
        let mut ledger = MemoryLedger::new();
        ledger.put("k", b"one").unwrap();
        ledger.put("k", b"two").unwrap();
        assert_eq!(ledger.get("k").unwrap().as_deref(), Some(&b"two"[..]));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_keys_are_sorted() {
        let mut ledger = MemoryLedger::new();
        ledger
            .put_batch(&[
                ("b".to_string(), b"2".to_vec()),
                ("a".to_string(), b"1".to_vec()),
            ])
            .unwrap();
        assert_eq!(ledger.keys().unwrap(), vec!["a", "b"]);
    }
}
