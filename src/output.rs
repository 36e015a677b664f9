//! Canonical text rendering for the filter AST.
//!
//! Every node implements [`Display`](std::fmt::Display). The rendering is the
//! inverse of parsing: feeding it back to the parser yields an equal tree.
//!
//! - Logical operators are separated by single spaces
//! - Groups render with parentheses, negation as `not (..)`
//! - Numbers use the shortest representation that round-trips
//! - Strings are re-quoted exactly as written, escapes included
//!
//! # Examples
//!
//! ```
//! use scim_filter_parser::{parse_filter, ScimVersion};
//!
//! let expr = parse_filter(
//!     r#"emails[type eq "work"]   and   not (title pr)"#,
//!     ScimVersion::V2,
//! )
//! .unwrap();
//! assert_eq!(expr.to_string(), r#"emails[type eq "work"] and not (title pr)"#);
//! ```
use std::fmt;

use crate::{
    ast::{
        AttributePath, ComparisonExpression, ComparisonOperator, Expression, Factor,
        GroupedExpression, NegatedExpression, Path, Term, ValuePath,
    },
    parser::Root,
    value::CompareValue,
};

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(schema) = &self.schema {
            write!(f, "{}:", schema)?;
        }
        f.write_str(&self.attribute_name)?;
        if let Some(sub_attribute) = &self.sub_attribute {
            write!(f, ".{}", sub_attribute)?;
        }
        Ok(())
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for CompareValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareValue::Null => f.write_str("null"),
            CompareValue::Bool(b) => write!(f, "{}", b),
            CompareValue::Number(n) => write!(f, "{}", n),
            CompareValue::String { value, .. } => write!(f, "\"{}\"", value),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Disjunction { left, right } => write!(f, "{} or {}", left, right),
            Expression::Term(term) => fmt::Display::fmt(term, f),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Conjunction { left, right } => write!(f, "{} and {}", left, right),
            Term::Factor(factor) => fmt::Display::fmt(factor, f),
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factor::Comparison(comparison) => fmt::Display::fmt(comparison, f),
            Factor::Grouped(group) => fmt::Display::fmt(group, f),
            Factor::Negated(negated) => fmt::Display::fmt(negated, f),
            Factor::ValuePath(value_path) => fmt::Display::fmt(value_path, f),
        }
    }
}

impl fmt::Display for ComparisonExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.operator)?;
        if let Some(right) = &self.right {
            write!(f, " {}", right)?;
        }
        Ok(())
    }
}

impl fmt::Display for GroupedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.inner)
    }
}

impl fmt::Display for NegatedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not {}", self.inner)
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.attribute_path, self.value_filter)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.attribute_path, f)?;
        if let Some(value_filter) = &self.value_filter {
            write!(f, "[{}]", value_filter)?;
            if let Some(sub_attribute) = &self.sub_attribute {
                write!(f, ".{}", sub_attribute)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Filter(expr) => fmt::Display::fmt(expr, f),
            Root::Path(path) => fmt::Display::fmt(path, f),
        }
    }
}
