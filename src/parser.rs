use crate::{
    ast::{
        AttributePath, ComparisonExpression, ComparisonOperator, Expression, Factor,
        GroupedExpression, NegatedExpression, Path, Term, TokenKind, ValuePath,
    },
    cursor::TokenCursor,
    error::{FilterError, Found, Result},
    lexer::Lexer,
    value::CompareValue,
};

/// Token kinds an attribute path is built from.
const ATTRIBUTE_PATH_KINDS: &[TokenKind] = &[
    TokenKind::Number,
    TokenKind::Name,
    TokenKind::Colon,
    TokenKind::Slash,
    TokenKind::Dot,
];

/// Token kinds that end an attribute path.
const ATTRIBUTE_PATH_STOP_KINDS: &[TokenKind] = &[TokenKind::Whitespace, TokenKind::OpenBracket];

/// Token kinds skipped when looking ahead for a value filter's `[`.
const VALUE_PATH_LOOKAHEAD_KINDS: &[TokenKind] = &[TokenKind::Name, TokenKind::Dot];

/// SCIM protocol version whose grammar is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ScimVersion {
    /// SCIM 1.1: no value filters, no path mode
    V1,
    /// SCIM 2.0 (RFC 7644)
    #[default]
    V2,
}

impl ScimVersion {
    pub fn supports_value_filters(&self) -> bool {
        !matches!(self, ScimVersion::V1)
    }
}

/// Entry production the parser starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ParserMode {
    /// `filter` query parameter
    #[default]
    Filter,
    /// PATCH operation `path`
    Path,
}

/// Result of a parse, depending on the parser mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Root {
    Filter(Expression),
    Path(Path),
}

impl Root {
    pub fn into_filter(self) -> Option<Expression> {
        match self {
            Root::Filter(expr) => Some(expr),
            Root::Path(_) => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Root::Path(path) => Some(path),
            Root::Filter(_) => None,
        }
    }
}

/// Parser for SCIM filters and paths.
///
/// A parser can be reused for any number of inputs; every call to
/// [`parse`](Parser::parse) scans and parses from scratch.
///
/// # Examples
///
/// ```
/// use scim_filter_parser::{Parser, ParserMode, Root, ScimVersion};
///
/// let parser = Parser::new(ParserMode::Filter, ScimVersion::V2).unwrap();
/// let root = parser.parse(r#"userName eq "bjensen""#).unwrap();
/// assert!(matches!(root, Root::Filter(_)));
///
/// assert!(Parser::new(ParserMode::Path, ScimVersion::V1).is_err());
/// ```
pub struct Parser {
    mode: ParserMode,
    version: ScimVersion,
    lexer: Lexer,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::filter(ScimVersion::default())
    }
}

impl Parser {
    /// Fails with [`FilterError::Configuration`] when path mode is requested
    /// for SCIM 1.1.
    pub fn new(mode: ParserMode, version: ScimVersion) -> Result<Self> {
        if mode == ParserMode::Path && !version.supports_value_filters() {
            return Err(FilterError::Configuration(
                "Path mode is available only in SCIM version 2".to_string(),
            ));
        }

        Ok(Parser {
            mode,
            version,
            lexer: Lexer::scim(version),
        })
    }

    /// Filter-mode parser; valid for every version.
    pub fn filter(version: ScimVersion) -> Self {
        Parser {
            mode: ParserMode::Filter,
            version,
            lexer: Lexer::scim(version),
        }
    }

    pub fn mode(&self) -> ParserMode {
        self.mode
    }

    pub fn version(&self) -> ScimVersion {
        self.version
    }

    pub fn parse(&self, input: &str) -> Result<Root> {
        match self.mode {
            ParserMode::Filter => self.run(input, |g| g.expression()).map(Root::Filter),
            ParserMode::Path => self.run(input, |g| g.path()).map(Root::Path),
        }
    }

    fn run<T, F>(&self, input: &str, entry: F) -> Result<T>
    where
        F: FnOnce(&mut Grammar<'_>) -> Result<T>,
    {
        log::debug!(
            "parsing {:?} in {:?} mode for SCIM {:?}",
            input,
            self.mode,
            self.version
        );

        let tokens = self.lexer.scan(input)?;
        let mut grammar = Grammar {
            cursor: TokenCursor::new(&tokens),
            input,
            version: self.version,
        };

        let node = entry(&mut grammar)?;
        grammar.expect_end()?;
        Ok(node)
    }
}

/// Parses a filter expression.
///
/// # Examples
///
/// ```
/// use scim_filter_parser::{parse_filter, ComparisonOperator, ScimVersion};
///
/// let expr = parse_filter("title pr", ScimVersion::V2).unwrap();
/// let comparison = expr.as_comparison().unwrap();
/// assert_eq!(comparison.operator, ComparisonOperator::Present);
/// assert!(comparison.right.is_none());
/// ```
pub fn parse_filter(input: &str, version: ScimVersion) -> Result<Expression> {
    Parser::filter(version).run(input, |g| g.expression())
}

/// Parses a PATCH path. Fails with a configuration error for SCIM 1.1.
pub fn parse_path(input: &str, version: ScimVersion) -> Result<Path> {
    Parser::new(ParserMode::Path, version)?.run(input, |g| g.path())
}

/// Recursive-descent state for a single parse.
struct Grammar<'a> {
    cursor: TokenCursor<'a>,
    input: &'a str,
    version: ScimVersion,
}

impl<'a> Grammar<'a> {
    /// Expression → Term (WS "or" WS Expression)?
    fn expression(&mut self) -> Result<Expression> {
        let left = self.term()?;

        if self.at_logical_operator("or") {
            self.logical_operator()?;
            let right = self.expression()?;
            return Ok(Expression::Disjunction {
                left,
                right: Box::new(right),
            });
        }

        Ok(Expression::Term(left))
    }

    /// Term → Factor (WS "and" WS Term)?
    fn term(&mut self) -> Result<Term> {
        let left = self.factor()?;

        if self.at_logical_operator("and") {
            self.logical_operator()?;
            let right = self.term()?;
            return Ok(Term::Conjunction {
                left,
                right: Box::new(right),
            });
        }

        Ok(Term::Factor(left))
    }

    fn factor(&mut self) -> Result<Factor> {
        if self.cursor.token().is_some_and(|t| t.is_name("not")) {
            self.negated_expression().map(Factor::Negated)
        } else if self.cursor.is_token(TokenKind::OpenParen) {
            self.grouped_expression().map(Factor::Grouped)
        } else if self.is_value_path_incoming() && self.version.supports_value_filters() {
            self.value_path().map(Factor::ValuePath)
        } else {
            self.comparison_expression().map(Factor::Comparison)
        }
    }

    fn at_logical_operator(&mut self, word: &str) -> bool {
        self.cursor.is_token(TokenKind::Whitespace)
            && self.cursor.glimpse().is_some_and(|t| t.is_name(word))
    }

    fn logical_operator(&mut self) -> Result<()> {
        self.expect(TokenKind::Whitespace)?;
        self.expect(TokenKind::Name)?;
        self.expect(TokenKind::Whitespace)
    }

    fn is_value_path_incoming(&mut self) -> bool {
        let after_path = self.cursor.peek_while(VALUE_PATH_LOOKAHEAD_KINDS);
        self.cursor.reset_peek();
        after_path.is_some_and(|t| t.is(TokenKind::OpenBracket))
    }

    fn negated_expression(&mut self) -> Result<NegatedExpression> {
        self.expect(TokenKind::Name)?;
        self.expect(TokenKind::Whitespace)?;
        Ok(NegatedExpression::new(self.grouped_expression()?))
    }

    fn grouped_expression(&mut self) -> Result<GroupedExpression> {
        self.expect(TokenKind::OpenParen)?;
        let inner = self.expression()?;
        self.expect(TokenKind::CloseParen)?;
        Ok(GroupedExpression::new(inner))
    }

    fn value_path(&mut self) -> Result<ValuePath> {
        let attribute_path = self.attribute_path()?;
        self.expect(TokenKind::OpenBracket)?;
        let value_filter = self.expression()?;
        self.expect(TokenKind::CloseBracket)?;
        ValuePath::new(attribute_path, value_filter)
    }

    fn comparison_expression(&mut self) -> Result<ComparisonExpression> {
        let left = self.attribute_path()?;
        self.expect(TokenKind::Whitespace)?;

        let operator = self.comparison_operator()?;
        if operator.is_present() {
            return Ok(ComparisonExpression::present(left));
        }

        self.expect(TokenKind::Whitespace)?;
        let right = self.compare_value()?;
        Ok(ComparisonExpression::new(left, operator, right))
    }

    fn attribute_path(&mut self) -> Result<AttributePath> {
        let mut raw = String::new();

        while let Some(token) = self.cursor.token() {
            if token.is_any(ATTRIBUTE_PATH_STOP_KINDS) {
                break;
            }
            if !token.is_any(ATTRIBUTE_PATH_KINDS) {
                return Err(self.syntax_error("attribute path"));
            }
            raw.push_str(&token.text);
            self.cursor.move_next();
        }

        if raw.is_empty() {
            return Err(self.syntax_error("attribute path"));
        }

        Ok(AttributePath::parse(&raw)?)
    }

    fn comparison_operator(&mut self) -> Result<ComparisonOperator> {
        let operator = self
            .cursor
            .token()
            .filter(|t| t.is(TokenKind::Name))
            .and_then(|t| ComparisonOperator::from_name(&t.text))
            .ok_or_else(|| self.syntax_error("comparison operator"))?;

        self.cursor.move_next();
        Ok(operator)
    }

    fn compare_value(&mut self) -> Result<CompareValue> {
        let Some(token) = self.cursor.token() else {
            return Err(self.syntax_error("compare value"));
        };

        let value = match token.kind {
            TokenKind::Name if token.text == "true" => CompareValue::Bool(true),
            TokenKind::Name if token.text == "false" => CompareValue::Bool(false),
            TokenKind::Name if token.text == "null" => CompareValue::Null,
            TokenKind::Number => match token.text.parse::<f64>() {
                Ok(n) if n.is_finite() => CompareValue::Number(n),
                _ => return Err(self.syntax_error("compare value")),
            },
            TokenKind::String => CompareValue::string(unquote(&token.text)),
            _ => return Err(self.syntax_error("compare value")),
        };

        self.cursor.move_next();
        Ok(value)
    }

    /// Path → AttributePath ("[" Expression "]" ("." Name)?)?
    fn path(&mut self) -> Result<Path> {
        let attribute_path = self.attribute_path()?;

        if self.cursor.is_at_end() {
            return Ok(Path::new(attribute_path));
        }
        if !self.cursor.is_token(TokenKind::OpenBracket) {
            return Err(self.syntax_error("path"));
        }

        self.expect(TokenKind::OpenBracket)?;
        let value_filter = self.expression()?;
        self.expect(TokenKind::CloseBracket)?;
        let value_path = ValuePath::new(attribute_path, value_filter)?;

        if !self.cursor.is_token(TokenKind::Dot) {
            return Ok(Path::with_value_path(value_path, None));
        }
        self.cursor.move_next();

        let sub_attribute = match self.cursor.token() {
            Some(token) if token.is(TokenKind::Name) => {
                self.cursor.move_next();
                Some(token.text.clone())
            }
            _ => None,
        };

        Ok(Path::with_value_path(value_path, sub_attribute))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        if !self.cursor.is_token(kind) {
            return Err(self.syntax_error(kind.name()));
        }
        self.cursor.move_next();
        Ok(())
    }

    fn expect_end(&self) -> Result<()> {
        if self.cursor.is_at_end() {
            Ok(())
        } else {
            Err(self.syntax_error("end of input"))
        }
    }

    fn syntax_error(&self, expected: &str) -> FilterError {
        let (offset, found) = match self.cursor.token() {
            Some(token) => (token.offset, Found::Token(token.text.clone())),
            None => (self.input.len(), Found::EndOfInput),
        };

        FilterError::Syntax {
            offset,
            expected: expected.to_string(),
            found,
        }
    }
}

/// Strips exactly one leading and one trailing quote; escapes are kept.
fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(text)
}
