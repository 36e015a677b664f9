//! Parse filters and paths from the command line

use super::{CliError, convert::root_to_json};
use crate::{
    lexer::Lexer,
    parser::{Parser, ParserMode, ScimVersion},
};

/// How a successful parse is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Canonical filter text
    #[default]
    Text,
    /// JSON rendering of the syntax tree
    Json,
}

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The filter or path to parse
    pub input: String,
    pub mode: ParserMode,
    pub version: ScimVersion,
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Only validate syntax, print nothing else
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Canonical text of the parsed input
    Text(String),
    /// Syntax tree as JSON
    Json(serde_json::Value),
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let parser = Parser::new(options.mode, options.version)?;
    let root = parser.parse(options.input.trim_end_matches(['\r', '\n']))?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    Ok(match options.format {
        OutputFormat::Text => CheckResult::Text(root.to_string()),
        OutputFormat::Json => CheckResult::Json(root_to_json(&root)),
    })
}

/// One line per token: index, byte offset, kind and text.
pub fn execute_tokens(input: &str, version: ScimVersion) -> Result<Vec<String>, CliError> {
    let tokens = Lexer::scim(version).scan(input.trim_end_matches(['\r', '\n']))?;

    Ok(tokens
        .iter()
        .map(|t| format!("{:>4} {:>5}  {:<13} {:?}", t.position, t.offset, t.kind, t.text))
        .collect())
}
