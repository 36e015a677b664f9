use std::{fmt::Debug, sync::LazyLock};

use regex::Regex;

use crate::{
    ast::{Token, TokenKind},
    error::{FilterError, Result},
    parser::ScimVersion,
};

/// Longest slice of remaining input quoted in an unknown-token error.
const PREVIEW_CHARS: usize = 16;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+").unwrap());
// JSON number syntax: https://tools.ietf.org/html/rfc8259#section-6
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?").unwrap()
});
static STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"(?:[^"\\]|\\.)*""#).unwrap());
static DOT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\.").unwrap());
static COLON: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^:").unwrap());
static SLASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/").unwrap());
static OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(").unwrap());
static CLOSE_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\)").unwrap());
static NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\-_]+").unwrap());
static OPEN_BRACKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[").unwrap());
static CLOSE_BRACKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\]").unwrap());

/// Accepts or rejects a pattern match, given the remaining input and the
/// match length.
pub type MatchGuard = fn(&str, usize) -> bool;

/// One entry of a lexer configuration: a token kind and the pattern that
/// recognizes it at the start of the remaining input.
#[derive(Debug, Clone)]
pub struct TokenRule<K = TokenKind> {
    pub kind: K,
    pattern: Regex,
    guard: Option<MatchGuard>,
}

impl<K> TokenRule<K> {
    /// Compiles `source` anchored to the start of the remaining input.
    pub fn new(kind: K, source: &str) -> Result<Self> {
        Regex::new(&format!("^(?:{})", source))
            .map(|pattern| TokenRule::anchored(kind, pattern))
            .map_err(|e| {
                FilterError::Configuration(format!("invalid token pattern '{}': {}", source, e))
            })
    }

    /// `pattern` must already start with `^`.
    fn anchored(kind: K, pattern: Regex) -> Self {
        TokenRule {
            kind,
            pattern,
            guard: None,
        }
    }

    /// Rejects matches for which `guard` returns false, letting later rules
    /// try the same offset.
    pub fn with_guard(mut self, guard: MatchGuard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Length in bytes of the non-empty match at the start of `input`.
    fn match_len(&self, input: &str) -> Option<usize> {
        self.pattern
            .find(input)
            .filter(|m| m.start() == 0 && !m.is_empty())
            .map(|m| m.end())
            .filter(|&len| self.guard.is_none_or(|guard| guard(input, len)))
    }
}

/// Ordered list of token rules.
///
/// Order is significant: at every offset the first rule that matches wins,
/// even if a later rule would match a longer prefix.
#[derive(Debug, Clone)]
pub struct LexerConfig<K = TokenKind> {
    rules: Vec<TokenRule<K>>,
}

impl<K> LexerConfig<K> {
    pub fn new(rules: Vec<TokenRule<K>>) -> Self {
        LexerConfig { rules }
    }

    /// Builds a configuration from pattern source strings. Each pattern is
    /// anchored to the start of the remaining input.
    pub fn from_patterns<'p>(patterns: impl IntoIterator<Item = (K, &'p str)>) -> Result<Self> {
        let rules = patterns
            .into_iter()
            .map(|(kind, source)| TokenRule::new(kind, source))
            .collect::<Result<Vec<_>>>()?;
        Ok(LexerConfig { rules })
    }

    pub fn rules(&self) -> &[TokenRule<K>] {
        &self.rules
    }
}

/// JSON numbers have no leading zeros: `0` or `-0` directly followed by a
/// digit is not a number, so `01` falls through to the name rule.
fn no_leading_zero(input: &str, len: usize) -> bool {
    let integer = &input[..len];
    let followed_by_digit = input.as_bytes().get(len).is_some_and(u8::is_ascii_digit);
    !(matches!(integer, "0" | "-0") && followed_by_digit)
}

impl LexerConfig<TokenKind> {
    /// Token rules of the SCIM filter grammar. Brackets are only recognized
    /// from SCIM 2.0 on.
    pub fn scim(version: ScimVersion) -> Self {
        let mut rules = vec![
            TokenRule::anchored(TokenKind::Whitespace, WHITESPACE.clone()),
            TokenRule::anchored(TokenKind::Number, NUMBER.clone()).with_guard(no_leading_zero),
            TokenRule::anchored(TokenKind::String, STRING.clone()),
            TokenRule::anchored(TokenKind::Dot, DOT.clone()),
            TokenRule::anchored(TokenKind::Colon, COLON.clone()),
            TokenRule::anchored(TokenKind::Slash, SLASH.clone()),
            TokenRule::anchored(TokenKind::OpenParen, OPEN_PAREN.clone()),
            TokenRule::anchored(TokenKind::CloseParen, CLOSE_PAREN.clone()),
            TokenRule::anchored(TokenKind::Name, NAME.clone()),
        ];

        if version.supports_value_filters() {
            rules.push(TokenRule::anchored(TokenKind::OpenBracket, OPEN_BRACKET.clone()));
            rules.push(TokenRule::anchored(TokenKind::CloseBracket, CLOSE_BRACKET.clone()));
        }

        LexerConfig { rules }
    }
}

/// Regex-driven tokenizer.
pub struct Lexer<K = TokenKind> {
    config: LexerConfig<K>,
}

impl<K: Copy + Eq + Debug> Lexer<K> {
    pub fn new(config: LexerConfig<K>) -> Self {
        Lexer { config }
    }

    pub fn config(&self) -> &LexerConfig<K> {
        &self.config
    }

    /// Splits `input` into tokens.
    ///
    /// Fails with [`FilterError::UnknownToken`] at the first offset where no
    /// rule matches.
    pub fn scan(&self, input: &str) -> Result<Vec<Token<K>>> {
        let mut tokens = Vec::new();
        let mut offset = 0;

        while offset < input.len() {
            let rest = &input[offset..];
            let matched = self
                .config
                .rules
                .iter()
                .find_map(|rule| rule.match_len(rest).map(|len| (rule.kind, len)));

            let Some((kind, len)) = matched else {
                return Err(FilterError::UnknownToken {
                    offset,
                    preview: rest.chars().take(PREVIEW_CHARS).collect(),
                });
            };

            let token = Token::new(kind, &rest[..len], offset, tokens.len());
            log::trace!("token {:?} {:?} at {}", token.kind, token.text, offset);
            tokens.push(token);
            offset += len;
        }

        log::debug!("scanned {} tokens from {} bytes", tokens.len(), input.len());
        Ok(tokens)
    }
}

impl Lexer<TokenKind> {
    pub fn scim(version: ScimVersion) -> Self {
        Lexer::new(LexerConfig::scim(version))
    }
}

#[test]
fn test_scim_rule_order() {
    let kinds: Vec<TokenKind> = LexerConfig::scim(ScimVersion::V2)
        .rules()
        .iter()
        .map(|rule| rule.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Whitespace,
            TokenKind::Number,
            TokenKind::String,
            TokenKind::Dot,
            TokenKind::Colon,
            TokenKind::Slash,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Name,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
        ]
    );
    assert_eq!(LexerConfig::scim(ScimVersion::V1).rules().len(), 9);
}

#[test]
fn test_first_rule_wins_over_longer_match() {
    let config = LexerConfig::from_patterns([("short", "ab"), ("long", "abc")]).unwrap();
    let err = Lexer::new(config).scan("abc").unwrap_err();
    assert_eq!(
        err,
        FilterError::UnknownToken {
            offset: 2,
            preview: "c".to_string()
        }
    );
}
