//! Positional navigation over a token slice
//!
//! [`TokenCursor`] is `Copy`: speculative lookahead copies the cursor and
//! scans the copy, so a probe can never disturb the committed position.

use super::lexer::Token;
use super::token_kind::TokenKind;
use text_size::TextSize;

static EOF_TOKEN: Token<'static> = Token::eof(TextSize::new(0), 0, 0);

/// Saved cursor position for backtracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

/// Read cursor over an immutable token slice
#[derive(Debug, Clone, Copy)]
pub struct TokenCursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'t, 'a> TokenCursor<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn tokens(&self) -> &'t [Token<'a>] {
        self.tokens
    }

    /// Index of the current token
    pub fn position(&self) -> usize {
        self.pos
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    /// Current token; past the end this is an `EOF` sentinel
    pub fn peek(&self) -> &'t Token<'a> {
        self.peek_ahead(0)
    }

    pub fn peek_ahead(&self, n: usize) -> &'t Token<'a> {
        match self.tokens.get(self.pos + n) {
            Some(token) => token,
            None => self.tokens.last().filter(|t| t.kind == TokenKind::EOF).unwrap_or(&EOF_TOKEN),
        }
    }

    /// Token just before the current one
    pub fn previous(&self) -> &'t Token<'a> {
        self.pos
            .checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
            .unwrap_or(&EOF_TOKEN)
    }

    pub fn kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    pub fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind())
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len() || self.at(TokenKind::EOF)
    }

    /// Kind of the next token after whitespace and newlines, without moving
    pub fn next_significant(&self) -> TokenKind {
        let mut probe = *self;
        probe.skip_whitespace_and_newlines();
        probe.kind()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Consume the current token and return it. At the end this returns the
    /// `EOF` sentinel without moving.
    pub fn advance(&mut self) -> &'t Token<'a> {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        self.eat_any(&[kind])
    }

    /// Consume the current token if it has any of the given kinds
    pub fn eat_any(&mut self, kinds: &[TokenKind]) -> bool {
        if self.at_any(kinds) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while self.at(TokenKind::WHITESPACE) {
            self.pos += 1;
        }
    }

    pub fn skip_whitespace_and_newlines(&mut self) {
        while self.kind().is_trivia() {
            self.pos += 1;
        }
    }

    /// Skip whitespace, newlines and comments
    pub fn skip_trivia(&mut self) {
        while self.kind().is_trivia() || self.kind().is_comment() {
            self.pos += 1;
        }
    }

    // =========================================================================
    // Backtracking
    // =========================================================================

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0.min(self.tokens.len());
    }

    /// Token at an absolute index; past the end this is an `EOF` sentinel
    pub fn token_at(&self, index: usize) -> &'t Token<'a> {
        match self.tokens.get(index) {
            Some(token) => token,
            None => self.tokens.last().filter(|t| t.kind == TokenKind::EOF).unwrap_or(&EOF_TOKEN),
        }
    }

    /// Tokens from `from` up to (not including) the current position
    pub fn consumed_since(&self, from: Checkpoint) -> &'t [Token<'a>] {
        let start = from.0.min(self.pos);
        &self.tokens[start..self.pos]
    }
}

impl Checkpoint {
    pub fn index(self) -> usize {
        self.0
    }
}
