//! Ledger trait definition.
//!
//! The `Ledger` trait is the key-value substrate the record store is built
//! on. Backends only move opaque bytes; all structure is imposed by callers.

use crate::error::Result;

/// Key-value ledger interface.
///
/// All implementations must ensure:
/// - Single-key `get` and `put` are atomic
/// - Writes are durable once they return `Ok`
/// - `put_batch` applies all writes or none where the backend supports it
pub trait Ledger: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if present, `Ok(None)` if the key was never
    /// written.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::LookupFailure` if the backend read fails.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::StorageFailure` if the backend write fails.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Write several key-value pairs as one unit.
    ///
    /// Both shipped backends apply the batch atomically. A backend that
    /// cannot may fall back to sequential puts, in which case a failure can
    /// leave a prefix of the batch applied.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::StorageFailure` if any write fails.
    fn put_batch(&mut self, writes: &[(String, Vec<u8>)]) -> Result<()>;

    /// Check whether a value is stored under `key`.
    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// List every stored key in ascending order.
    fn keys(&self) -> Result<Vec<String>>;
}

impl<L: Ledger + ?Sized> Ledger for Box<L> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<()> {
        (**self).put(key, value)
    }

    fn put_batch(&mut self, writes: &[(String, Vec<u8>)]) -> Result<()> {
        (**self).put_batch(writes)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        (**self).exists(key)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }
}
