use std::fmt;

/// Lexical categories of the SCIM filter and path grammars.
///
/// The bracket kinds are only produced when the active grammar version
/// supports value filters (SCIM 2.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One or more whitespace characters
    Whitespace,

    /// JSON number literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -1.5
    /// 100.019e5
    /// ```
    Number,

    /// Double-quoted string literal, quotes included
    ///
    /// # Examples
    /// ```text
    /// "bjensen"
    /// "say \"hi\""
    /// ```
    String,

    /// `.` separating an attribute from its sub-attribute
    Dot,

    /// `:` separating schema URN segments
    Colon,

    /// `/`
    Slash,

    /// `(`
    OpenParen,

    /// `)`
    CloseParen,

    /// Attribute names, operators and keywords
    ///
    /// # Examples
    /// ```text
    /// userName
    /// eq
    /// not
    /// x509Certificates
    /// ```
    Name,

    /// `[` opening a value filter
    OpenBracket,

    /// `]` closing a value filter
    CloseBracket,
}

impl TokenKind {
    /// Stable lower-case name used in error messages and tooling output.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Dot => "dot",
            TokenKind::Colon => "colon",
            TokenKind::Slash => "slash",
            TokenKind::OpenParen => "open_paren",
            TokenKind::CloseParen => "close_paren",
            TokenKind::Name => "name",
            TokenKind::OpenBracket => "open_bracket",
            TokenKind::CloseBracket => "close_bracket",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A single lexed token.
///
/// `offset` is the byte offset of the token in the scanned input and
/// `position` its 0-based index in the token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<K = TokenKind> {
    pub kind: K,
    pub text: String,
    pub offset: usize,
    pub position: usize,
}

impl<K: Copy + Eq> Token<K> {
    pub fn new(kind: K, text: impl Into<String>, offset: usize, position: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            offset,
            position,
        }
    }

    pub fn is(&self, kind: K) -> bool {
        self.kind == kind
    }

    pub fn is_any(&self, kinds: &[K]) -> bool {
        kinds.contains(&self.kind)
    }
}

impl Token<TokenKind> {
    /// True when this is a `Name` token spelled exactly `word`.
    pub fn is_name(&self, word: &str) -> bool {
        self.kind == TokenKind::Name && self.text == word
    }
}
