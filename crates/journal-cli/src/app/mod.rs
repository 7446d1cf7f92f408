//! Application-level utilities for the journal CLI.
//!
//! This module provides:
//! - Path resolution for config and ledger files
//! - The per-invocation context handed to command handlers

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
