//! The journal record.
//!
//! A journal is stored as a JSON object under its `cpr` key. The field order
//! on the wire is `name`, `cpr_nr`, `status`, `state`, `timestamp`.

use serde::{Deserialize, Serialize};

use crate::args::{expect_count, require_non_empty};
use crate::error::Result;

/// Number of positional arguments `init_journal` takes.
pub const JOURNAL_ARG_COUNT: usize = 5;

/// A journal record.
///
/// `status` and `state` are opaque strings; nothing in the core interprets
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// Informational display name
    pub name: String,

    /// Business identifier, also the ledger key of the record
    #[serde(rename = "cpr_nr")]
    pub cpr: String,

    pub status: String,

    pub state: String,

    pub timestamp: String,
}

impl Journal {
    pub fn new(
        name: impl Into<String>,
        cpr: impl Into<String>,
        status: impl Into<String>,
        state: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cpr: cpr.into(),
            status: status.into(),
            state: state.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Build a journal from `name, cpr, status, state, timestamp`.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::InvalidArgument` if the count is not 5 or any
    /// argument is empty. The message names the offending position.
    pub fn from_args(args: &[String]) -> Result<Self> {
        expect_count(
            args,
            JOURNAL_ARG_COUNT,
            "name, cpr-nr, status, state, timestamp",
        )?;
        Ok(Self::new(
            require_non_empty(args, 0)?,
            require_non_empty(args, 1)?,
            require_non_empty(args, 2)?,
            require_non_empty(args, 3)?,
            require_non_empty(args, 4)?,
        ))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a stored record.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::DeserializationFailure` for anything that is
    /// not a complete journal object, including empty input.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
