//! Journal registry: creation with uniqueness enforcement and index upkeep.
//!
//! The registry owns one invariant: the journal index lists exactly the keys
//! that hold a journal record, each once, in creation order. Creation checks
//! the key and the index before writing anything, then commits the record
//! and the extended index in a single ledger batch.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{JournalError, Result};
use crate::journal::Journal;
use crate::storage::Ledger;
use crate::store::{is_reserved, RecordStore};

/// Outcome of checking the index against the records in the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexReport {
    /// Valid index entries, in index order
    pub indexed: Vec<String>,

    /// Index entries with no journal record behind them
    pub dangling: Vec<String>,

    /// Repeated index entries (one item per extra occurrence)
    pub duplicates: Vec<String>,

    /// Journal records missing from the index, ascending
    pub unindexed: Vec<String>,

    /// Whether the index was rewritten
    #[serde(default)]
    pub repaired: bool,
}

impl IndexReport {
    pub fn is_consistent(&self) -> bool {
        self.dangling.is_empty() && self.duplicates.is_empty() && self.unindexed.is_empty()
    }

    /// The index that would satisfy the invariant.
    fn rebuilt_index(&self) -> Vec<String> {
        self.indexed
            .iter()
            .chain(self.unindexed.iter())
            .cloned()
            .collect()
    }
}

/// Journal registry over a record store.
pub struct JournalRegistry<L> {
    store: RecordStore<L>,
}

impl<L: Ledger> JournalRegistry<L> {
    pub fn new(store: RecordStore<L>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore<L> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore<L> {
        &mut self.store
    }

    pub fn into_store(self) -> RecordStore<L> {
        self.store
    }

    /// Create a journal from `name, cpr, status, state, timestamp`.
    ///
    /// Arguments are validated before the ledger is touched.
    pub fn create_journal(&mut self, args: &[String]) -> Result<Journal> {
        let journal = Journal::from_args(args)?;
        self.create(&journal)?;
        Ok(journal)
    }

    /// Store a new journal and append its key to the index.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the key is reserved
    /// - `LookupFailure` if the key probe or the index read fails
    /// - `DuplicateKey` if the key already holds a value or is already indexed
    /// - `DeserializationFailure` if the stored index is malformed
    /// - `StorageFailure` if the batch write fails; nothing is written
    ///
    /// The key probe and index read run before the batch, outside any ledger
    /// transaction. Uniqueness therefore holds within one process only; two
    /// processes creating against the same file can lose an index entry,
    /// which `reconcile_index` restores.
    pub fn create(&mut self, journal: &Journal) -> Result<()> {
        let cpr = journal.cpr.as_str();
        if is_reserved(cpr) {
            return Err(JournalError::InvalidArgument(
                "2nd argument must not be a reserved key".to_string(),
            ));
        }

        let occupied = self
            .store
            .exists(cpr)
            .map_err(|e| JournalError::LookupFailure(format!("failed to get cpr-nr: {}", e)))?;
        if occupied {
            warn!(cpr, "rejected journal: key already holds a value");
            return Err(JournalError::DuplicateKey(
                "this cpr-nr already exists".to_string(),
            ));
        }

        let mut index = self.store.get_index()?;
        if index.iter().any(|existing| existing == cpr) {
            warn!(cpr, "rejected journal: key already indexed without a record");
            return Err(JournalError::DuplicateKey(
                "this cpr-nr is already in the journal index".to_string(),
            ));
        }
        index.push(cpr.to_string());

        self.store.commit_journal(journal, &index)?;
        info!(cpr, indexed = index.len(), "journal created");
        Ok(())
    }

    /// Every indexed journal, in index order.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::LookupFailure` if an index entry has no record
    /// or its record is stored under another journal's key.
    pub fn list_journals(&self) -> Result<Vec<Journal>> {
        let index = self.store.get_index()?;
        let mut journals = Vec::with_capacity(index.len());
        for cpr in &index {
            let journal = self.store.get_journal(cpr)?.ok_or_else(|| {
                JournalError::LookupFailure(format!(
                    "journal index lists {} but no record exists",
                    cpr
                ))
            })?;
            if journal.cpr != *cpr {
                return Err(JournalError::LookupFailure(format!(
                    "journal index lists {} but its record carries cpr-nr {}",
                    cpr, journal.cpr
                )));
            }
            journals.push(journal);
        }
        Ok(journals)
    }

    /// Compare the index with a full key scan without changing anything.
    pub fn verify_index(&self) -> Result<IndexReport> {
        let index = self.store.get_index()?;
        let journals = self.scan_journal_keys()?;

        let mut report = IndexReport::default();
        let mut seen = HashSet::new();
        for cpr in index {
            if !seen.insert(cpr.clone()) {
                report.duplicates.push(cpr);
            } else if journals.contains(&cpr) {
                report.indexed.push(cpr);
            } else {
                report.dangling.push(cpr);
            }
        }
        report.unindexed = journals
            .into_iter()
            .filter(|cpr| !seen.contains(cpr))
            .collect();

        debug!(
            indexed = report.indexed.len(),
            dangling = report.dangling.len(),
            duplicates = report.duplicates.len(),
            unindexed = report.unindexed.len(),
            "index verified"
        );
        Ok(report)
    }

    /// Rewrite the index so it lists exactly the stored journals.
    ///
    /// Valid entries keep their order, duplicates and dangling entries are
    /// dropped, unindexed journals are appended in key order. Running it on a
    /// consistent ledger writes nothing.
    pub fn reconcile_index(&mut self) -> Result<IndexReport> {
        let mut report = self.verify_index()?;
        if report.is_consistent() {
            return Ok(report);
        }

        let rebuilt = report.rebuilt_index();
        self.store.put_index(&rebuilt)?;
        report.repaired = true;
        warn!(
            dangling = ?report.dangling,
            duplicates = ?report.duplicates,
            unindexed = ?report.unindexed,
            entries = rebuilt.len(),
            "journal index rebuilt"
        );
        Ok(report)
    }

    /// Keys whose value decodes to a journal carrying that same key.
    fn scan_journal_keys(&self) -> Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        for key in self.store.keys()? {
            if is_reserved(&key) {
                continue;
            }
            match self.store.get_journal(&key) {
                Ok(Some(journal)) if journal.cpr == key => {
                    found.insert(key);
                }
                Ok(_) | Err(JournalError::DeserializationFailure(_)) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(found)
    }
}
