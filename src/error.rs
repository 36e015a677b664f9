//! Error types for filter and path parsing.
//!
//! Every failure aborts the parse that raised it; a caller receives exactly one
//! [`FilterError`] describing the first problem found scanning left to right.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Main error type for lexing and parsing SCIM filters and paths.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    /// No configured token rule matched the remaining input.
    #[error("Unknown token at offset {offset}: {preview}...")]
    UnknownToken { offset: usize, preview: String },

    /// The token stream did not conform to the grammar.
    #[error("line 0, col {offset}... Error: Expected {{{expected}}}, got {found}")]
    Syntax {
        offset: usize,
        expected: String,
        found: Found,
    },

    /// An attribute path violated the RFC 7644 shape rules.
    #[error("Attribute path failed to parse: {0}")]
    AttributePath(#[from] AttributePathError),

    /// A value filter contained another value filter.
    #[error("Value filter failed to parse: nested value filters are not allowed")]
    ValueFilterNesting,

    /// The parser or lexer was configured in an unsupported way.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Structural problems with an attribute path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributePathError {
    #[error(
        "Provided attribute path '{0}' is too long. Only one sub-attribute allowed as per RFC 7644."
    )]
    TooManySubAttributes(String),

    #[error("Provided attribute path '{0}' has no attribute name")]
    EmptyAttributeName(String),

    #[error("Provided attribute path '{0}' has an empty sub-attribute")]
    EmptySubAttribute(String),
}

/// What the parser actually saw where it expected something else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token(String),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(text) => write!(f, "'{}'", text),
            Found::EndOfInput => write!(f, "end of string"),
        }
    }
}

impl FilterError {
    /// Byte offset into the input the error points at, when it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            FilterError::UnknownToken { offset, .. } | FilterError::Syntax { offset, .. } => {
                Some(*offset)
            }
            _ => None,
        }
    }
}
