//! Path resolution for config and ledger files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, default_ledger_path, read_config, JournalConfig};

/// Resolve the config file path: `--config` / `JOURNAL_CONFIG`, else XDG default.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(value) = cli.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if it exists, otherwise an empty config.
pub fn load_config(config_path: &Path) -> anyhow::Result<JournalConfig> {
    if config_path.exists() {
        read_config(config_path)
    } else {
        Ok(JournalConfig::default())
    }
}

/// Resolve the ledger path from CLI args, then config, then the XDG default.
pub fn resolve_ledger_path(cli: &Cli, config: &JournalConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.ledger.as_deref() {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.ledger.path.as_deref() {
        return Ok(PathBuf::from(path));
    }
    default_ledger_path()
}

/// Error message when ledger file is missing.
pub fn missing_ledger_message(path: &Path) -> String {
    format!("No ledger found at {}", path.display())
}

/// Hint shown alongside a missing ledger.
pub fn missing_ledger_hint() -> String {
    "Run:\n  journal init <COUNTER>\n\nOr specify a ledger path:\n  JOURNAL_LEDGER_PATH=/path/to/journal.db journal init 0".to_string()
}
