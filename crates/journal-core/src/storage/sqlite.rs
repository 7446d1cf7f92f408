//! SQLite ledger backend.
//!
//! Every key lives in one `state` table. Single puts are individual
//! statements; batches run inside one transaction, so a record and its index
//! slot land together or not at all.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::{JournalError, Result};
use crate::fs::{rename_with_fallback, temp_sibling};
use crate::storage::traits::Ledger;

/// Current on-disk layout version, stored in the `meta` table.
pub const FORMAT_VERSION: &str = "1";

/// File-backed ledger.
pub struct SqliteLedger {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteLedger {
    fn read_error(err: rusqlite::Error) -> JournalError {
        JournalError::LookupFailure(format!("SQLite error: {}", err))
    }

    fn write_error(err: rusqlite::Error) -> JournalError {
        JournalError::StorageFailure(format!("SQLite error: {}", err))
    }

    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| JournalError::StorageFailure("SQLite connection poisoned".to_string()))
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS state (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL
            );
            "#,
        )
        .map_err(Self::write_error)?;
        conn.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES ('format_version', ?1)",
            [FORMAT_VERSION],
        )
        .map_err(Self::write_error)?;
        Ok(())
    }

    /// Open the ledger at `path`, creating the file and schema if missing.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::StorageFailure` if the file cannot be opened or
    /// the schema cannot be created.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path).map_err(Self::write_error)?;
        Self::init_schema(&conn)?;
        debug!(path = %path.display(), "opened sqlite ledger");
        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Mutex::new(conn),
        })
    }

    /// Open a ledger that lives only as long as this value.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(Self::write_error)?;
        Self::init_schema(&conn)?;
        Ok(Self {
            path: None,
            conn: Mutex::new(conn),
        })
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Layout version recorded when the file was created.
    pub fn format_version(&self) -> Result<String> {
        let conn = self.lock_conn()?;
        conn.query_row(
            "SELECT value FROM meta WHERE key = 'format_version'",
            [],
            |row| row.get(0),
        )
        .map_err(Self::read_error)
    }

    /// Write a consistent copy of the ledger to `destination`.
    ///
    /// The copy is produced with `VACUUM INTO` next to the destination and
    /// renamed into place, so a reader never sees a half-written backup.
    ///
    /// # Returns
    ///
    /// Returns the size of the backup in bytes.
    pub fn backup_to(&self, destination: &Path) -> Result<u64> {
        let temp_path = temp_sibling(destination, "journal-backup")?;
        let temp_str = temp_path.to_str().ok_or_else(|| {
            JournalError::InvalidArgument("Backup path is not valid UTF-8".to_string())
        })?;

        {
            let conn = self.lock_conn()?;
            conn.execute("VACUUM INTO ?1", [temp_str])
                .map_err(Self::write_error)?;
        }
        rename_with_fallback(&temp_path, destination)?;

        let bytes = std::fs::metadata(destination)?.len();
        debug!(destination = %destination.display(), bytes, "ledger backup written");
        Ok(bytes)
    }
}

impl Ledger for SqliteLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let conn = self.lock_conn()?;
        conn.query_row("SELECT value FROM state WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()
        .map_err(Self::read_error)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map_err(Self::write_error)?;
        Ok(())
    }

    fn put_batch(&mut self, writes: &[(String, Vec<u8>)]) -> Result<()> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction().map_err(Self::write_error)?;
        for (key, value) in writes {
            tx.execute(
                "INSERT INTO state (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(Self::write_error)?;
        }
        tx.commit().map_err(Self::write_error)?;
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        let conn = self.lock_conn()?;
        let found: Option<i64> = conn
            .query_row("SELECT 1 FROM state WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Self::read_error)?;
        Ok(found.is_some())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare("SELECT key FROM state ORDER BY key")
            .map_err(Self::read_error)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(Self::read_error)?;
        let mut keys = Vec::new();
        for row in rows {
            keys.push(row.map_err(Self::read_error)?);
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_round_trip() {
        let mut ledger = SqliteLedger::open_in_memory().unwrap();
        assert!(ledger.get("k").unwrap().is_none());
        ledger.put("k", b"v1").unwrap();
        ledger.put("k", b"v2").unwrap();
        assert_eq!(ledger.get("k").unwrap().as_deref(), Some(&b"v2"[..]));
        assert!(ledger.exists("k").unwrap());
    }

    #[test]
    fn test_batch_and_keys() {
        let mut ledger = SqliteLedger::open_in_memory().unwrap();
        ledger
            .put_batch(&[
                ("zeta".to_string(), b"z".to_vec()),
                ("alpha".to_string(), b"a".to_vec()),
            ])
            .unwrap();
        assert_eq!(ledger.keys().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_failed_batch_rolls_back_earlier_writes() {
        let mut ledger = SqliteLedger::open_in_memory().unwrap();
        ledger
            .lock_conn()
            .unwrap()
            .execute_batch(
                "CREATE TRIGGER reject_index BEFORE INSERT ON state
                 WHEN NEW.key = '_journalindex'
                 BEGIN SELECT RAISE(ABORT, 'index write rejected'); END;",
            )
            .unwrap();

        let err = ledger
            .put_batch(&[
                ("1".to_string(), b"record".to_vec()),
                ("_journalindex".to_string(), br#"["1"]"#.to_vec()),
            ])
            .unwrap_err();

        assert!(matches!(
            err,
            JournalError::StorageFailure(ref msg) if msg.contains("rejected")
        ));
        assert!(ledger.get("1").unwrap().is_none());
        assert!(ledger.keys().unwrap().is_empty());
    }

    #[test]
    fn test_format_version_recorded() {
        let ledger = SqliteLedger::open_in_memory().unwrap();
        assert_eq!(ledger.format_version().unwrap(), FORMAT_VERSION);
        assert!(ledger.path().is_none());
    }
}
