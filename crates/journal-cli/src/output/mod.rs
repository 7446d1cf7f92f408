//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying journals,
//! index reports and raw payloads.

mod json;
mod text;

// Re-export public API
pub use json::print_json;
pub use text::{journal_table, print_payload, report_lines};
