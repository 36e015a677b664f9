pub mod ast;
pub mod cli;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{
    AttributePath, ComparisonExpression, ComparisonOperator, Expression, Factor,
    GroupedExpression, NegatedExpression, Path, Term, Token, TokenKind, ValuePath,
};
pub use cursor::TokenCursor;
pub use error::{AttributePathError, FilterError, Found, Result};
pub use lexer::{Lexer, LexerConfig, MatchGuard, TokenRule};
pub use parser::{Parser, ParserMode, Root, ScimVersion, parse_filter, parse_path};
pub use value::CompareValue;
