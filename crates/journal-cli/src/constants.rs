//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure with no more specific code.
    pub const GENERAL: i32 = 1;

    /// Ledger, key or index not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid arguments or unknown function name.
    pub const INVALID_INPUT: i32 = 4;

    /// A journal with this key already exists.
    pub const DUPLICATE_KEY: i32 = 5;

    /// Index check failed or a stored value was malformed.
    pub const INTEGRITY_FAILED: i32 = 6;

    /// Ledger write failed.
    pub const STORAGE_FAILED: i32 = 7;
}
