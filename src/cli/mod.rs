//! CLI support for scim-filter-parser
//!
//! Provides programmatic access to the `scimfilter` commands so they can be
//! embedded in other tools.

mod check;
mod convert;

pub use check::{CheckOptions, CheckResult, OutputFormat, execute_check, execute_tokens};
pub use convert::{expression_to_json, path_to_json, root_to_json};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Lexer, parser or configuration error
    #[error("Parse error: {0}")]
    Parse(#[from] crate::FilterError),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Pass a filter argument or pipe one to stdin.")]
    NoInput,
}
