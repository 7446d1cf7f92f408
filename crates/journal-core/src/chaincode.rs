//! Invocation surface: `init`, `invoke` and `query` by function name.
//!
//! Every handler takes positional string arguments and returns bytes. Handlers
//! that only mutate return an empty payload.

use tracing::{info, warn};

use crate::args::{expect_count, require_non_empty};
use crate::bootstrap;
use crate::error::{JournalError, Result};
use crate::registry::JournalRegistry;
use crate::storage::Ledger;
use crate::store::RecordStore;

/// Dispatcher owning the ledger.
pub struct Chaincode<L> {
    registry: JournalRegistry<L>,
}

impl<L: Ledger> Chaincode<L> {
    pub fn new(ledger: L) -> Self {
        Self {
            registry: JournalRegistry::new(RecordStore::new(ledger)),
        }
    }

    pub fn registry(&self) -> &JournalRegistry<L> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut JournalRegistry<L> {
        &mut self.registry
    }

    pub fn into_ledger(self) -> L {
        self.registry.into_store().into_inner()
    }

    /// Bootstrap the ledger: `[initial_counter]`.
    pub fn init(&mut self, args: &[String]) -> Result<Vec<u8>> {
        info!("init is running");
        bootstrap::reset(self.registry.store_mut(), args)?;
        Ok(Vec::new())
    }

    /// Run a mutating function.
    pub fn invoke(&mut self, function: &str, args: &[String]) -> Result<Vec<u8>> {
        info!(function, args = args.len(), "invoke is running");
        match function {
            "init" => self.init(args),
            "write" => self.write(args),
            "init_journal" => {
                self.registry.create_journal(args)?;
                Ok(Vec::new())
            }
            "reconcile_index" => {
                expect_count(args, 0, "no arguments")?;
                let report = self.registry.reconcile_index()?;
                Ok(serde_json::to_vec(&report)?)
            }
            other => {
                warn!(function = other, "invoke did not find function");
                Err(JournalError::UnknownOperation(format!(
                    "received unknown function invocation: {}",
                    other
                )))
            }
        }
    }

    /// Run a read-only function.
    pub fn query(&self, function: &str, args: &[String]) -> Result<Vec<u8>> {
        info!(function, args = args.len(), "query is running");
        match function {
            "read" => {
                expect_count(args, 1, "key")?;
                self.registry.store().get_raw(&args[0])
            }
            "list_journals" => {
                expect_count(args, 0, "no arguments")?;
                Ok(serde_json::to_vec(&self.registry.list_journals()?)?)
            }
            "verify_index" => {
                expect_count(args, 0, "no arguments")?;
                Ok(serde_json::to_vec(&self.registry.verify_index()?)?)
            }
            other => {
                warn!(function = other, "query did not find function");
                Err(JournalError::UnknownOperation(format!(
                    "received unknown function query: {}",
                    other
                )))
            }
        }
    }

    /// `[key, value]`: store `value` verbatim under `key`.
    fn write(&mut self, args: &[String]) -> Result<Vec<u8>> {
        expect_count(args, 2, "key, value")?;
        let key = require_non_empty(args, 0)?;
        self.registry.store_mut().put_raw(key, args[1].as_bytes())?;
        Ok(Vec::new())
    }
}
