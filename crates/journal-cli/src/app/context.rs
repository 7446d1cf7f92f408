//! Application context for the journal CLI.
//!
//! Bundles the parsed CLI arguments with the loaded config file so handlers
//! do not have to re-resolve paths.

use std::path::{Path, PathBuf};

use journal_core::storage::SqliteLedger;
use journal_core::Chaincode;

use crate::cli::Cli;
use crate::config::JournalConfig;
use crate::errors::CliError;

use super::resolver::{
    load_config, missing_ledger_hint, missing_ledger_message, resolve_config_path,
    resolve_ledger_path,
};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config_path: PathBuf,
    config: JournalConfig,
}

impl<'a> AppContext<'a> {
    /// Create a new application context, reading the config file if present.
    pub fn new(cli: &'a Cli) -> anyhow::Result<Self> {
        let config_path = resolve_config_path(cli)?;
        let config = load_config(&config_path)?;
        Ok(Self {
            cli,
            config_path,
            config,
        })
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn config(&self) -> &JournalConfig {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Path of the ledger this invocation targets.
    pub fn ledger_path(&self) -> anyhow::Result<PathBuf> {
        resolve_ledger_path(self.cli, &self.config)
    }

    /// Open an existing ledger.
    ///
    /// Fails with a not-found error instead of creating an empty file, so a
    /// mistyped path never turns into a fresh ledger.
    pub fn open_chaincode(&self) -> anyhow::Result<Chaincode<SqliteLedger>> {
        let path = self.ledger_path()?;
        if !path.exists() {
            return Err(
                CliError::not_found(missing_ledger_message(&path), missing_ledger_hint()).into(),
            );
        }
        Ok(Chaincode::new(SqliteLedger::open(&path)?))
    }

    /// Open the ledger, creating it if it does not exist yet.
    pub fn create_chaincode(&self) -> anyhow::Result<(Chaincode<SqliteLedger>, PathBuf)> {
        let path = self.ledger_path()?;
        let ledger = SqliteLedger::open(&path)?;
        Ok((Chaincode::new(ledger), path))
    }
}
