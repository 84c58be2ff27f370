//! Hand-written lexer for C++ header source
//!
//! Produces a position-tagged token stream that always ends in a single
//! `EOF` token. Malformed or pathological input never aborts the scan:
//! every problem becomes an `ERROR` token carrying a [`LexErrorKind`], and
//! each scan step is guaranteed to advance.

use std::borrow::Cow;

use text_size::{TextRange, TextSize};

use super::errors::ErrorCode;
use super::keywords::keyword_kind;
use super::token_kind::TokenKind;

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
    /// 1-based line of the first character
    pub line: u32,
    /// 1-based column (in characters) of the first character
    pub column: u32,
    /// Set on `ERROR` tokens
    pub error: Option<LexErrorKind>,
}

impl<'a> Token<'a> {
    /// End-of-input sentinel at the given position
    pub const fn eof(offset: TextSize, line: u32, column: u32) -> Token<'static> {
        Token {
            kind: TokenKind::EOF,
            text: "",
            offset,
            line,
            column,
            error: None,
        }
    }

    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::ERROR
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.error {
            Some(err) => write!(f, "ERROR({err}) at {}:{}", self.line, self.column),
            None => write!(f, "{:?}:{:?} at {}:{}", self.kind, self.text, self.line, self.column),
        }
    }
}

/// Why the lexer emitted an `ERROR` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexErrorKind {
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("excessive whitespace")]
    ExcessiveWhitespace,
    #[error("identifier too long")]
    IdentifierTooLong,
    #[error("numeric literal too long")]
    NumberTooLong,
    #[error("string or character literal too long")]
    LiteralTooLong,
    #[error("comment too long")]
    CommentTooLong,
    #[error("token limit exceeded")]
    TokenLimit,
    #[error("scan iteration limit exceeded")]
    IterationLimit,
    #[error("input position limit exceeded")]
    PositionLimit,
    #[error("lexer failed to advance")]
    Stalled,
}

impl LexErrorKind {
    /// Diagnostic code reported when this error reaches the parser
    pub fn code(self) -> ErrorCode {
        match self {
            Self::UnexpectedCharacter | Self::Stalled => ErrorCode::E0101,
            Self::UnterminatedString | Self::UnterminatedChar => ErrorCode::E0102,
            Self::UnterminatedBlockComment => ErrorCode::E0103,
            Self::NumberTooLong => ErrorCode::E0104,
            Self::ExcessiveWhitespace
            | Self::IdentifierTooLong
            | Self::LiteralTooLong
            | Self::CommentTooLong => ErrorCode::E0105,
            Self::TokenLimit | Self::IterationLimit | Self::PositionLimit => ErrorCode::E0106,
        }
    }
}

/// Hard caps that bound the work done on adversarial input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexerLimits {
    /// Tokens emitted before the scan stops (the final `EOF` is not counted)
    pub max_tokens: usize,
    /// Scan steps before the scan stops
    pub max_iterations: usize,
    pub max_identifier_len: usize,
    pub max_number_len: usize,
    /// Applies to string and character literals
    pub max_literal_len: usize,
    pub max_whitespace_run: usize,
    pub max_comment_len: usize,
    /// Absolute byte position the scan may not start a token beyond
    pub max_position: usize,
}

impl LexerLimits {
    pub const MAX_TOKENS: usize = 1_000_000;
    pub const MAX_ITERATIONS: usize = 2_000_000;
    pub const MAX_IDENTIFIER_LEN: usize = 1_024;
    pub const MAX_NUMBER_LEN: usize = 256;
    pub const MAX_LITERAL_LEN: usize = 65_536;
    pub const MAX_WHITESPACE_RUN: usize = 10_000;
    pub const MAX_COMMENT_LEN: usize = 100_000;
    pub const MAX_POSITION: usize = 64 * 1024 * 1024;

    pub fn with_max_tokens(mut self, max: usize) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_max_identifier_len(mut self, max: usize) -> Self {
        self.max_identifier_len = max;
        self
    }

    pub fn with_max_number_len(mut self, max: usize) -> Self {
        self.max_number_len = max;
        self
    }

    pub fn with_max_literal_len(mut self, max: usize) -> Self {
        self.max_literal_len = max;
        self
    }

    pub fn with_max_whitespace_run(mut self, max: usize) -> Self {
        self.max_whitespace_run = max;
        self
    }

    pub fn with_max_comment_len(mut self, max: usize) -> Self {
        self.max_comment_len = max;
        self
    }

    pub fn with_max_position(mut self, max: usize) -> Self {
        self.max_position = max;
        self
    }
}

impl Default for LexerLimits {
    fn default() -> Self {
        Self {
            max_tokens: Self::MAX_TOKENS,
            max_iterations: Self::MAX_ITERATIONS,
            max_identifier_len: Self::MAX_IDENTIFIER_LEN,
            max_number_len: Self::MAX_NUMBER_LEN,
            max_literal_len: Self::MAX_LITERAL_LEN,
            max_whitespace_run: Self::MAX_WHITESPACE_RUN,
            max_comment_len: Self::MAX_COMMENT_LEN,
            max_position: Self::MAX_POSITION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    /// A global limit tripped; only `EOF` remains
    Stopping,
    Done,
}

/// Streaming lexer; iterate it or call [`tokenize`]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: u32,
    column: u32,
    limits: LexerLimits,
    emitted: usize,
    iterations: usize,
    state: State,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_limits(input, LexerLimits::default())
    }

    pub fn with_limits(input: &'a str, limits: LexerLimits) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            limits,
            emitted: 0,
            iterations: 0,
            state: State::Scanning,
        }
    }

    // =========================================================================
    // Character inspection
    // =========================================================================

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Advance over `len` bytes (which must end on a char boundary)
    fn bump_bytes(&mut self, len: usize) {
        let end = (self.pos + len).min(self.input.len());
        let skipped = &self.input[self.pos..end];
        match skipped.rfind('\n') {
            Some(nl) => {
                self.line += skipped.matches('\n').count() as u32;
                self.column = skipped[nl + 1..].chars().count() as u32 + 1;
            }
            None => self.column += skipped.chars().count() as u32,
        }
        self.pos = end;
    }

    /// Consume characters while `pred` holds; returns how many were consumed
    fn bump_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
            count += 1;
        }
        count
    }

    // =========================================================================
    // Token construction
    // =========================================================================

    fn token(&self, kind: TokenKind, start: usize, line: u32, column: u32) -> Token<'a> {
        Token {
            kind,
            text: &self.input[start..self.pos],
            offset: TextSize::new(start as u32),
            line,
            column,
            error: None,
        }
    }

    fn error_token(&self, err: LexErrorKind, start: usize, line: u32, column: u32) -> Token<'a> {
        tracing::warn!(line, column, "lexer error: {err}");
        Token {
            error: Some(err),
            ..self.token(TokenKind::ERROR, start, line, column)
        }
    }

    fn eof_token(&self) -> Token<'a> {
        Token::eof(TextSize::new(self.pos as u32), self.line, self.column)
    }

    fn global_limit(&self) -> Option<LexErrorKind> {
        if self.emitted >= self.limits.max_tokens {
            Some(LexErrorKind::TokenLimit)
        } else if self.iterations >= self.limits.max_iterations {
            Some(LexErrorKind::IterationLimit)
        } else if self.pos > self.limits.max_position {
            Some(LexErrorKind::PositionLimit)
        } else {
            None
        }
    }

    // =========================================================================
    // Scanning
    // =========================================================================

    fn scan_token(&mut self) -> Token<'a> {
        let (start, line, column) = (self.pos, self.line, self.column);
        let Some(c) = self.peek() else {
            return self.eof_token();
        };

        match c {
            '\n' => {
                self.bump();
                self.token(TokenKind::NEWLINE, start, line, column)
            }
            c if is_space(c) => self.scan_whitespace(start, line, column),
            '/' if self.peek_nth(1) == Some('/') => self.scan_line_comment(start, line, column),
            '/' if self.peek_nth(1) == Some('*') => self.scan_block_comment(start, line, column),
            '"' => self.scan_quoted('"', start, line, column),
            '\'' => self.scan_quoted('\'', start, line, column),
            c if c.is_ascii_digit() => self.scan_number(start, line, column),
            c if is_ident_start(c) => self.scan_identifier(start, line, column),
            _ => self.scan_punct(start, line, column),
        }
    }

    fn scan_whitespace(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        let run = self.bump_while(is_space);
        if run > self.limits.max_whitespace_run {
            return self.error_token(LexErrorKind::ExcessiveWhitespace, start, line, column);
        }
        self.token(TokenKind::WHITESPACE, start, line, column)
    }

    fn scan_line_comment(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        let len = self.rest().find('\n').unwrap_or(self.rest().len());
        self.bump_bytes(len);
        let text = &self.input[start..self.pos];
        if text.len() > self.limits.max_comment_len {
            return self.error_token(LexErrorKind::CommentTooLong, start, line, column);
        }
        let is_doc = (text.starts_with("///") && !text.starts_with("////")) || text.starts_with("//!");
        let kind = if is_doc {
            TokenKind::DOXYGEN_COMMENT
        } else {
            TokenKind::LINE_COMMENT
        };
        self.token(kind, start, line, column)
    }

    fn scan_block_comment(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        // Search past the opening "/*" so "/*/" does not close itself
        let body = &self.rest()[2..];
        let Some(close) = body.find("*/") else {
            self.bump_bytes(self.rest().len());
            return self.error_token(LexErrorKind::UnterminatedBlockComment, start, line, column);
        };
        self.bump_bytes(2 + close + 2);
        let text = &self.input[start..self.pos];
        if text.len() > self.limits.max_comment_len {
            return self.error_token(LexErrorKind::CommentTooLong, start, line, column);
        }
        let is_doc = (text.starts_with("/**") && text != "/**/") || text.starts_with("/*!");
        let kind = if is_doc {
            TokenKind::DOXYGEN_COMMENT
        } else {
            TokenKind::BLOCK_COMMENT
        };
        self.token(kind, start, line, column)
    }

    /// String or character literal. Escapes are skipped; an unescaped
    /// newline ends the literal as unterminated.
    fn scan_quoted(&mut self, quote: char, start: usize, line: u32, column: u32) -> Token<'a> {
        self.bump();
        let mut len = 1;
        let mut terminated = false;
        while let Some(c) = self.peek() {
            match c {
                '\n' => break,
                '\\' => {
                    self.bump();
                    len += 1;
                    if self.peek().is_some_and(|c| c != '\n') {
                        self.bump();
                        len += 1;
                    }
                }
                c if c == quote => {
                    self.bump();
                    len += 1;
                    terminated = true;
                    break;
                }
                _ => {
                    self.bump();
                    len += 1;
                }
            }
        }

        let is_string = quote == '"';
        if !terminated {
            let err = if is_string {
                LexErrorKind::UnterminatedString
            } else {
                LexErrorKind::UnterminatedChar
            };
            return self.error_token(err, start, line, column);
        }
        if len > self.limits.max_literal_len {
            return self.error_token(LexErrorKind::LiteralTooLong, start, line, column);
        }
        let kind = if is_string {
            TokenKind::STRING
        } else {
            TokenKind::CHAR
        };
        self.token(kind, start, line, column)
    }

    /// Numbers are scanned permissively: digits, letters (hex digits,
    /// prefixes, suffixes), `.`, digit separators, and a sign directly
    /// after an exponent marker.
    fn scan_number(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        let mut len = 0;
        let mut prev = '\0';
        while let Some(c) = self.peek() {
            let accept = c.is_ascii_alphanumeric()
                || c == '_'
                || c == '.'
                || (c == '\'' && self.peek_nth(1).is_some_and(|n| n.is_ascii_alphanumeric()))
                || ((c == '+' || c == '-') && matches!(prev, 'e' | 'E' | 'p' | 'P') && !is_hex_body(&self.input[start..self.pos]));
            if !accept {
                break;
            }
            self.bump();
            prev = c;
            len += 1;
        }
        if len > self.limits.max_number_len {
            return self.error_token(LexErrorKind::NumberTooLong, start, line, column);
        }
        self.token(TokenKind::NUMBER, start, line, column)
    }

    fn scan_identifier(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        self.bump();
        let len = 1 + self.bump_while(is_ident_continue);
        if len > self.limits.max_identifier_len {
            return self.error_token(LexErrorKind::IdentifierTooLong, start, line, column);
        }
        let text = &self.input[start..self.pos];
        let kind = keyword_kind(text).unwrap_or(TokenKind::IDENT);
        self.token(kind, start, line, column)
    }

    fn scan_punct(&mut self, start: usize, line: u32, column: u32) -> Token<'a> {
        use TokenKind::*;

        let Some(c) = self.bump() else {
            return self.eof_token();
        };
        let next = self.peek();
        let two = |kind: TokenKind, this: &mut Self| {
            this.bump();
            kind
        };

        let kind = match (c, next) {
            (':', Some(':')) => two(COLON_COLON, self),
            ('-', Some('>')) => two(ARROW, self),
            ('-', Some('-')) => two(MINUS_MINUS, self),
            ('-', Some('=')) => two(MINUS_EQ, self),
            ('=', Some('=')) => two(EQ_EQ, self),
            ('!', Some('=')) => two(BANG_EQ, self),
            ('<', Some('=')) => two(LT_EQ, self),
            ('<', Some('<')) => two(LT_LT, self),
            ('>', Some('=')) => two(GT_EQ, self),
            ('>', Some('>')) => two(GT_GT, self),
            ('&', Some('&')) => two(AMP_AMP, self),
            ('|', Some('|')) => two(PIPE_PIPE, self),
            ('+', Some('+')) => two(PLUS_PLUS, self),
            ('+', Some('=')) => two(PLUS_EQ, self),
            ('*', Some('=')) => two(STAR_EQ, self),
            ('/', Some('=')) => two(SLASH_EQ, self),
            ('#', Some('#')) => two(HASH_HASH, self),
            ('(', _) => L_PAREN,
            (')', _) => R_PAREN,
            ('{', _) => L_BRACE,
            ('}', _) => R_BRACE,
            ('[', _) => L_BRACKET,
            (']', _) => R_BRACKET,
            (';', _) => SEMICOLON,
            (':', _) => COLON,
            (',', _) => COMMA,
            ('.', _) => DOT,
            ('=', _) => EQ,
            ('<', _) => LT,
            ('>', _) => GT,
            ('&', _) => AMP,
            ('|', _) => PIPE,
            ('^', _) => CARET,
            ('~', _) => TILDE,
            ('!', _) => BANG,
            ('?', _) => QUESTION,
            ('+', _) => PLUS,
            ('-', _) => MINUS,
            ('*', _) => STAR,
            ('/', _) => SLASH,
            ('%', _) => PERCENT,
            ('#', _) => HASH,
            ('\\', _) => BACKSLASH,
            _ => return self.error_token(LexErrorKind::UnexpectedCharacter, start, line, column),
        };
        self.token(kind, start, line, column)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => return None,
            State::Stopping => {
                self.state = State::Done;
                return Some(self.eof_token());
            }
            State::Scanning => {}
        }

        if self.pos >= self.input.len() {
            self.state = State::Done;
            return Some(self.eof_token());
        }

        if let Some(err) = self.global_limit() {
            self.state = State::Stopping;
            let (pos, line, column) = (self.pos, self.line, self.column);
            return Some(self.error_token(err, pos, line, column));
        }
        self.iterations += 1;

        let (start, line, column) = (self.pos, self.line, self.column);
        let mut token = self.scan_token();
        if self.pos == start {
            self.bump();
            token = self.error_token(LexErrorKind::Stalled, start, line, column);
        }
        self.emitted += 1;
        Some(token)
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\x0B' | '\x0C' | '\u{FEFF}')
}

fn is_ident_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

fn is_ident_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Hex literals use `e`/`E` as a digit, so a following sign is not part of
/// the number (hex floats use `p` instead)
fn is_hex_body(text: &str) -> bool {
    let lower = text.as_bytes().get(1).copied();
    text.starts_with('0') && matches!(lower, Some(b'x' | b'X')) && !text.contains(['p', 'P'])
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Tokenize with explicit limits
pub fn tokenize_with(input: &str, limits: LexerLimits) -> Vec<Token<'_>> {
    Lexer::with_limits(input, limits).collect()
}

/// Decode arbitrary bytes (invalid UTF-8 is replaced) for tokenizing
pub fn decode_source(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
