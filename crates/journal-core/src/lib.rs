//! # Journal Core
//!
//! Core library for the journal registry - a ledger-backed record store with
//! one uniquely keyed record type and a maintained index of its keys.
//!
//! This crate provides the domain logic and ledger abstractions independent
//! of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: `Ledger` trait and its backends (memory, SQLite)
//! - **store**: typed record store over a ledger, guarding reserved keys
//! - **journal**: the journal record and argument validation
//! - **registry**: journal creation, enumeration and index reconciliation
//! - **bootstrap**: counter seeding and index reset
//! - **chaincode**: init/invoke/query dispatch by function name

mod args;
pub mod bootstrap;
pub mod chaincode;
pub mod error;
pub mod fs;
pub mod journal;
pub mod registry;
pub mod storage;
pub mod store;

pub use chaincode::Chaincode;
pub use error::{JournalError, Result};
pub use journal::Journal;
pub use registry::{IndexReport, JournalRegistry};
pub use storage::Ledger;
pub use store::RecordStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
