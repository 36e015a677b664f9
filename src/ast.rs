//! # SCIM Filter Grammar - Abstract Syntax Tree
//!
//! This module defines the tokens and the abstract syntax tree produced when
//! parsing SCIM filters and attribute paths (RFC 7644 §3.4.2.2 and §3.5.2).
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[attribute_path]** - `schema:attribute.subAttribute` references
//! - **[operators]** - The ten comparison operators
//! - **[expressions]** - Expression, term and factor nodes
//! - **[path]** - Root node for PATCH paths
//!
//! ## Grammar
//!
//! ```text
//! Expression → Term (WS "or" WS Expression)?
//! Term       → Factor (WS "and" WS Term)?
//! Factor     → "not" WS "(" Expression ")"
//!            | "(" Expression ")"
//!            | AttributePath "[" Expression "]"
//!            | AttributePath WS Operator (WS CompareValue)?
//! Path       → AttributePath ("[" Expression "]" ("." Name)?)?
//! ```
//!
//! `and` binds tighter than `or`; both chain to the right.
//!
//! ## Examples
//!
//! ```text
//! userName eq "bjensen"
//! title pr and userType eq "Employee"
//! emails[type eq "work" and value co "@example.com"]
//! not (meta.lastModified gt "2011-05-13T04:42:34Z")
//! ```
pub mod attribute_path;
pub mod expressions;
pub mod operators;
pub mod path;
pub mod tokens;

pub use attribute_path::AttributePath;
pub use expressions::{
    ComparisonExpression, Expression, Factor, GroupedExpression, NegatedExpression, Term,
    ValuePath,
};
pub use operators::ComparisonOperator;
pub use path::Path;
pub use tokens::{Token, TokenKind};
