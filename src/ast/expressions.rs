use crate::{
    ast::{AttributePath, ComparisonOperator},
    error::{FilterError, Result},
    value::CompareValue,
};

/// Top level of a filter: a chain of terms joined by `or`.
///
/// The chain is right-associative: `a or b or c` is
/// `Disjunction(a, Disjunction(b, c))`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `left or right`
    Disjunction {
        left: Term,
        right: Box<Expression>,
    },
    /// A lone term with no `or`
    Term(Term),
}

/// A chain of factors joined by `and`, binding tighter than `or`.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// `left and right`
    Conjunction { left: Factor, right: Box<Term> },
    /// A lone factor with no `and`
    Factor(Factor),
}

/// The atoms of a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    /// `userName eq "bjensen"`, `title pr`
    Comparison(ComparisonExpression),
    /// `(expression)`
    Grouped(GroupedExpression),
    /// `not (expression)`
    Negated(NegatedExpression),
    /// `emails[type eq "work"]`
    ValuePath(ValuePath),
}

/// Attribute compared against a literal, or tested for presence.
///
/// `right` is `None` exactly when `operator` is [`ComparisonOperator::Present`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonExpression {
    pub left: AttributePath,
    pub operator: ComparisonOperator,
    pub right: Option<CompareValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupedExpression {
    pub inner: Box<Expression>,
}

/// Negation always wraps a parenthesized group.
#[derive(Debug, Clone, PartialEq)]
pub struct NegatedExpression {
    pub inner: GroupedExpression,
}

/// Filter applied to the values of a multi-valued attribute.
///
/// Value filters may not nest; see [`ValuePath::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValuePath {
    pub attribute_path: AttributePath,
    pub value_filter: Box<Expression>,
}

impl Expression {
    /// Returns the factor when the expression is a single factor with no
    /// logical operators around it.
    pub fn as_factor(&self) -> Option<&Factor> {
        match self {
            Expression::Term(Term::Factor(factor)) => Some(factor),
            _ => None,
        }
    }

    pub fn as_comparison(&self) -> Option<&ComparisonExpression> {
        match self.as_factor()? {
            Factor::Comparison(comparison) => Some(comparison),
            _ => None,
        }
    }

    /// True if a value path occurs anywhere in the expression tree.
    pub fn contains_value_path(&self) -> bool {
        match self {
            Expression::Disjunction { left, right } => {
                left.contains_value_path() || right.contains_value_path()
            }
            Expression::Term(term) => term.contains_value_path(),
        }
    }
}

impl Term {
    pub fn contains_value_path(&self) -> bool {
        match self {
            Term::Conjunction { left, right } => {
                left.contains_value_path() || right.contains_value_path()
            }
            Term::Factor(factor) => factor.contains_value_path(),
        }
    }
}

impl Factor {
    pub fn contains_value_path(&self) -> bool {
        match self {
            Factor::Comparison(_) => false,
            Factor::Grouped(group) => group.inner.contains_value_path(),
            Factor::Negated(negated) => negated.inner.inner.contains_value_path(),
            Factor::ValuePath(_) => true,
        }
    }
}

impl From<Factor> for Expression {
    fn from(factor: Factor) -> Self {
        Expression::Term(Term::Factor(factor))
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Expression::Term(term)
    }
}

impl ComparisonExpression {
    pub fn present(left: AttributePath) -> Self {
        ComparisonExpression {
            left,
            operator: ComparisonOperator::Present,
            right: None,
        }
    }

    pub fn new(left: AttributePath, operator: ComparisonOperator, right: CompareValue) -> Self {
        ComparisonExpression {
            left,
            operator,
            right: Some(right),
        }
    }
}

impl GroupedExpression {
    pub fn new(inner: Expression) -> Self {
        GroupedExpression {
            inner: Box::new(inner),
        }
    }
}

impl NegatedExpression {
    pub fn new(inner: GroupedExpression) -> Self {
        NegatedExpression { inner }
    }
}

impl ValuePath {
    /// Fails with [`FilterError::ValueFilterNesting`] if the filter contains
    /// another value path at any depth.
    pub fn new(attribute_path: AttributePath, value_filter: Expression) -> Result<Self> {
        if value_filter.contains_value_path() {
            return Err(FilterError::ValueFilterNesting);
        }
        Ok(ValuePath {
            attribute_path,
            value_filter: Box::new(value_filter),
        })
    }
}
