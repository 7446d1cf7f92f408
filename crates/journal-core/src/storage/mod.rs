//! Ledger abstraction and backends.

pub mod memory;
pub mod sqlite;
pub mod traits;

pub use memory::MemoryLedger;
pub use sqlite::SqliteLedger;
pub use traits::Ledger;
