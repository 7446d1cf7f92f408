//! CLI error types for structured error handling.
//!
//! Core errors arrive wrapped in `anyhow::Error`; this module recovers their
//! kind and maps it to an exit code.

use std::fmt;

use journal_core::JournalError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug, Clone)]
pub enum CliError {
    /// Resource not found (ledger file, key, index)
    NotFound { message: String, hint: Option<String> },

    /// Invalid user input or unknown function
    InvalidInput(String),

    /// Journal key already taken
    DuplicateKey(String),

    /// Index inconsistent or stored data malformed
    IntegrityFailed { message: String, hint: Option<String> },

    /// Ledger write failed
    Storage(String),

    /// Anything else
    Other(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::IntegrityFailed { message, hint } => {
                match hint {
                    Some(h) => write!(f, "{}\n{}", message, h),
                    None => write!(f, "{}", message),
                }
            }
            CliError::InvalidInput(message)
            | CliError::DuplicateKey(message)
            | CliError::Storage(message)
            | CliError::Other(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl From<&JournalError> for CliError {
    fn from(err: &JournalError) -> Self {
        let message = err.to_string();
        match err {
            JournalError::InvalidArgument(_) | JournalError::UnknownOperation(_) => {
                CliError::InvalidInput(message)
            }
            JournalError::LookupFailure(_) => CliError::NotFound {
                message,
                hint: None,
            },
            JournalError::DuplicateKey(_) => CliError::DuplicateKey(message),
            JournalError::DeserializationFailure(_) => CliError::IntegrityFailed {
                message,
                hint: Some("Hint: Run `journal check` to inspect the index.".to_string()),
            },
            JournalError::StorageFailure(_) => CliError::Storage(message),
        }
    }
}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an IntegrityFailed error with message and hint.
    pub fn integrity_failed(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::IntegrityFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Recover the most specific error carried by an `anyhow::Error`.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        if let Some(cli) = err.downcast_ref::<CliError>() {
            return cli.clone();
        }
        if let Some(core) = err.downcast_ref::<JournalError>() {
            return CliError::from(core);
        }
        CliError::Other(format!("{:#}", err))
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::DuplicateKey(_) => exit_codes::DUPLICATE_KEY,
            CliError::IntegrityFailed { .. } => exit_codes::INTEGRITY_FAILED,
            CliError::Storage(_) => exit_codes::STORAGE_FAILED,
            CliError::Other(_) => exit_codes::GENERAL,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}
