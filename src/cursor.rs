use crate::ast::{Token, TokenKind};

/// Read-only cursor over a scanned token sequence.
///
/// Holds two independent positions: the committed `position`, and a
/// speculative `peek` offset relative to it. Peeking never moves the
/// committed position; moving the committed position resets the peek offset.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a, K = TokenKind> {
    tokens: &'a [Token<K>],
    position: usize,
    peek: usize,
}

impl<'a, K: Copy + Eq> TokenCursor<'a, K> {
    pub fn new(tokens: &'a [Token<K>]) -> Self {
        TokenCursor {
            tokens,
            position: 0,
            peek: 1,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Current token, `None` once the cursor has passed the last token.
    pub fn token(&self) -> Option<&'a Token<K>> {
        self.tokens.get(self.position)
    }

    /// The token right after the current one.
    pub fn look_ahead(&self) -> Option<&'a Token<K>> {
        self.tokens.get(self.position + 1)
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Advances by one token. Returns false once there is no current token.
    pub fn move_next(&mut self) -> bool {
        self.peek = 1;
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        self.token().is_some()
    }

    pub fn reset(&mut self) {
        self.position = 0;
        self.peek = 1;
    }

    pub fn reset_position(&mut self, position: usize) {
        self.position = position.min(self.tokens.len());
    }

    pub fn reset_peek(&mut self) {
        self.peek = 1;
    }

    /// Advances past every token whose kind is in `kinds`.
    pub fn skip_while(&mut self, kinds: &[K]) {
        while self.token().is_some_and(|t| t.is_any(kinds)) {
            self.move_next();
        }
    }

    /// Advances until the current token has `kind`, or the end is reached.
    pub fn skip_until(&mut self, kind: K) {
        while self.token().is_some_and(|t| !t.is(kind)) {
            self.move_next();
        }
    }

    /// Returns the token after the last peeked one, starting with the token
    /// after the current one.
    pub fn peek(&mut self) -> Option<&'a Token<K>> {
        let token = self.tokens.get(self.position + self.peek);
        self.peek += 1;
        token
    }

    /// Peeks past tokens whose kind is in `kinds` and returns the first one
    /// that is not. The peek offset stays advanced; call
    /// [`reset_peek`](Self::reset_peek) afterwards.
    pub fn peek_while(&mut self, kinds: &[K]) -> Option<&'a Token<K>> {
        let mut token = self.peek();
        while let Some(t) = token {
            if !t.is_any(kinds) {
                break;
            }
            token = self.peek();
        }
        token
    }

    /// Peeks one token and rewinds the peek offset.
    pub fn glimpse(&mut self) -> Option<&'a Token<K>> {
        let token = self.peek();
        self.reset_peek();
        token
    }

    pub fn is_token(&self, kind: K) -> bool {
        self.token().is_some_and(|t| t.is(kind))
    }

    pub fn is_next_token(&self, kind: K) -> bool {
        self.look_ahead().is_some_and(|t| t.is(kind))
    }

    pub fn is_token_any(&self, kinds: &[K]) -> bool {
        self.token().is_some_and(|t| t.is_any(kinds))
    }

    pub fn is_next_token_any(&self, kinds: &[K]) -> bool {
        self.look_ahead().is_some_and(|t| t.is_any(kinds))
    }
}

#[cfg(test)]
fn algebra_tokens(input: &str) -> Vec<Token<&'static str>> {
    use crate::lexer::{Lexer, LexerConfig};

    let config = LexerConfig::from_patterns([
        ("whitespace", r"\s+"),
        ("number", r"\d+"),
        ("plus", r"\+"),
        ("minus", "-"),
        ("mul", r"\*"),
        ("div", "/"),
    ])
    .unwrap();
    Lexer::new(config).scan(input).unwrap()
}

#[test]
fn test_move_next() {
    let tokens = algebra_tokens("2 +3 /4 -1 ");
    let mut cursor = TokenCursor::new(&tokens);

    assert_eq!(cursor.token().unwrap().kind, "number");
    assert_eq!(cursor.token().unwrap().text, "2");
    assert_eq!(cursor.look_ahead().unwrap().kind, "whitespace");

    cursor.move_next();
    cursor.move_next();
    assert_eq!(cursor.token().unwrap().kind, "plus");
    assert_eq!(cursor.look_ahead().unwrap().text, "3");

    cursor.move_next();
    cursor.move_next();
    cursor.move_next();
    assert_eq!(cursor.token().unwrap().kind, "div");
    assert_eq!(cursor.look_ahead().unwrap().text, "4");

    for _ in 0..5 {
        cursor.move_next();
    }
    assert_eq!(cursor.token().unwrap().kind, "whitespace");
    assert!(cursor.look_ahead().is_none());

    assert!(!cursor.move_next());
    assert!(!cursor.move_next());
    assert!(cursor.is_at_end());
}

#[test]
fn test_peek() {
    let tokens = algebra_tokens("2 +3 /4 -1 ");
    let mut cursor = TokenCursor::new(&tokens);

    cursor.move_next();
    cursor.move_next();
    assert_eq!(cursor.peek().unwrap().text, "3");
    assert_eq!(cursor.peek().unwrap().text, " ");

    cursor.move_next();
    cursor.move_next();
    cursor.peek();
    assert_eq!(cursor.peek().unwrap().text, "4");
    assert_eq!(cursor.token().unwrap().text, " ");

    cursor.reset_peek();
    assert_eq!(cursor.peek().unwrap().text, "/");
}

#[test]
fn test_peek_while() {
    let tokens = algebra_tokens("1 2 3+4");
    let mut cursor = TokenCursor::new(&tokens);

    let token = cursor.peek_while(&["number", "whitespace"]).unwrap();
    assert_eq!(token.kind, "plus");
    assert_eq!(cursor.position(), 0);

    cursor.reset_peek();
    assert!(cursor.peek_while(&["number", "whitespace", "plus"]).is_none());
}

#[test]
fn test_skip() {
    let tokens = algebra_tokens("2 +3 /4 -1 ");
    let mut cursor = TokenCursor::new(&tokens);

    cursor.move_next();
    cursor.skip_until("minus");
    assert_eq!(cursor.token().unwrap().kind, "minus");
    assert_eq!(cursor.look_ahead().unwrap().text, "1");

    cursor.reset();
    cursor.skip_while(&["number", "whitespace"]);
    assert!(cursor.is_token("plus"));
}

#[test]
fn test_check_tokens() {
    let tokens = algebra_tokens("2 +3 /4 -1 ");
    let mut cursor = TokenCursor::new(&tokens);

    assert!(!cursor.is_next_token("number"));
    assert!(cursor.is_next_token("whitespace"));

    cursor.move_next();
    cursor.move_next();
    assert!(cursor.is_token_any(&["minus", "plus"]));
    assert!(cursor.is_next_token_any(&["number"]));

    cursor.move_next();
    assert!(cursor.is_token("number"));
}

#[test]
fn test_reset_position_and_glimpse() {
    let tokens = algebra_tokens("2 +3 /4 -1 ");
    let mut cursor = TokenCursor::new(&tokens);

    for _ in 0..5 {
        cursor.move_next();
    }
    cursor.reset_position(0);
    assert_eq!(cursor.token().unwrap().text, "2");

    cursor.move_next();
    assert_eq!(cursor.glimpse().unwrap().text, "+");
    assert_eq!(cursor.glimpse().unwrap().text, "+");
    assert_eq!(cursor.glimpse().unwrap().text, "+");
}
