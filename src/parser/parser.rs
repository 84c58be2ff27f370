//! Header parser: dispatch loop, entity emission and recovery
//!
//! The parser walks a token slice once. At each construct start it
//! classifies the current token and hands control to one routine in
//! [`grammar`](super::grammar). Routines report failures as
//! [`SyntaxError`]s; the loop either records them and resynchronizes or
//! aborts, depending on the [`RecoveryPolicy`].

use rayon::prelude::*;
use text_size::TextSize;

use super::cursor::{Checkpoint, TokenCursor};
use super::errors::{ErrorCode, ParseContext, ParseError, Severity, SyntaxError, format_context_error};
use super::grammar;
use super::lexer::{LexErrorKind, Token, decode_source, tokenize_with};
use super::macros::{MacroDefinition, MacroTable};
use super::options::{ParseOptions, RecoveryPolicy};
use super::scope::ScopeStack;
use super::token_kind::TokenKind;
use crate::base::{LineIndex, Position, Span};
use crate::doxygen::DoxygenComment;
use crate::entity::{AccessLevel, Entity, EntityId, EntityKind, ScopeTree};

pub(crate) type ParseResult<T> = Result<T, SyntaxError>;

/// Parse one header with default options
pub fn parse(filename: &str, content: &str) -> Result<ScopeTree, ParseError> {
    parse_with_options(filename, content, &ParseOptions::default())
}

/// Parse one header
///
/// Fails only when the tokenizer produced `ERROR` tokens, or when a
/// construct fails under [`RecoveryPolicy::Strict`].
pub fn parse_with_options(
    filename: &str,
    content: &str,
    options: &ParseOptions,
) -> Result<ScopeTree, ParseError> {
    let tokens = tokenize_with(content, options.limits);
    check_lex_errors(&tokens)?;
    Parser::new(filename, content, &tokens, options).parse_file()
}

/// Parse independent headers in parallel with default options
pub fn parse_many<N, C>(files: &[(N, C)]) -> Vec<Result<ScopeTree, ParseError>>
where
    N: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    HeaderParser::default().parse_many(files)
}

/// Reusable parser configuration. Every call builds fresh parse state, so
/// one `HeaderParser` can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct HeaderParser {
    options: ParseOptions,
}

impl HeaderParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn parse(&self, filename: &str, content: &str) -> Result<ScopeTree, ParseError> {
        parse_with_options(filename, content, &self.options)
    }

    /// Parse raw bytes; invalid UTF-8 is replaced before tokenizing
    pub fn parse_bytes(&self, filename: &str, bytes: &[u8]) -> Result<ScopeTree, ParseError> {
        let content = decode_source(bytes);
        self.parse(filename, &content)
    }

    /// Parse `(filename, content)` pairs on the rayon pool, keeping input order
    pub fn parse_many<N, C>(&self, files: &[(N, C)]) -> Vec<Result<ScopeTree, ParseError>>
    where
        N: AsRef<str> + Sync,
        C: AsRef<str> + Sync,
    {
        files
            .par_iter()
            .map(|(name, content)| self.parse(name.as_ref(), content.as_ref()))
            .collect()
    }
}

fn check_lex_errors(tokens: &[Token<'_>]) -> Result<(), ParseError> {
    let mut errors = tokens.iter().filter(|t| t.is_error());
    let Some(first) = errors.next() else {
        return Ok(());
    };
    let count = 1 + errors.count();
    let kind = first.error.unwrap_or(LexErrorKind::UnexpectedCharacter);
    tracing::warn!(
        %kind,
        line = first.line,
        column = first.column,
        count,
        "tokenizer error"
    );
    Err(ParseError::Lex {
        kind,
        line: first.line,
        column: first.column,
        offset: first.offset,
        count,
    })
}

/// Mutable state of one parse
pub(crate) struct Parser<'t, 'a> {
    pub(crate) cursor: TokenCursor<'t, 'a>,
    source: &'a str,
    line_index: LineIndex,
    pub(crate) tree: ScopeTree,
    pub(crate) scopes: ScopeStack,
    pub(crate) macros: MacroTable,
    pending_comment: Option<DoxygenComment>,
    recovery: RecoveryPolicy,
    pub(crate) merge_line_comments: bool,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub(crate) fn new(
        filename: &str,
        source: &'a str,
        tokens: &'t [Token<'a>],
        options: &ParseOptions,
    ) -> Self {
        let mut macros = MacroTable::new();
        for (name, value) in &options.predefined_macros {
            macros.define(MacroDefinition::object(name.as_str(), value.as_str()));
        }
        Self {
            cursor: TokenCursor::new(tokens),
            source,
            line_index: LineIndex::new(source),
            tree: ScopeTree::new(filename, source),
            scopes: ScopeStack::new(EntityId::ROOT),
            macros,
            pending_comment: None,
            recovery: options.recovery,
            merge_line_comments: options.merge_line_comments,
        }
    }

    // =========================================================================
    // Dispatch loop
    // =========================================================================

    pub(crate) fn parse_file(mut self) -> Result<ScopeTree, ParseError> {
        loop {
            self.cursor.skip_whitespace_and_newlines();
            if self.cursor.is_at_end() {
                break;
            }
            let start = self.cursor.checkpoint();
            if let Err(error) = self.parse_construct() {
                self.report(error)?;
                self.resync(start);
            }
            // Safety: a routine that consumed nothing must not be retried
            if self.cursor.checkpoint() == start {
                tracing::trace!(token = %self.cursor.peek(), "no progress, skipping token");
                self.cursor.advance();
            }
        }
        self.flush_pending_comment();
        Ok(self.tree)
    }

    fn parse_construct(&mut self) -> ParseResult<()> {
        let token = self.cursor.peek();
        tracing::trace!(kind = %token.kind, line = token.line, "dispatch");

        match token.kind {
            TokenKind::HASH => {
                grammar::parse_preprocessor(self);
                Ok(())
            }
            TokenKind::LINE_COMMENT | TokenKind::BLOCK_COMMENT | TokenKind::DOXYGEN_COMMENT => {
                grammar::parse_comment(self);
                Ok(())
            }
            TokenKind::TEMPLATE_KW => grammar::parse_template(self),
            TokenKind::NAMESPACE_KW => grammar::parse_namespace(self),
            TokenKind::INLINE_KW if self.at_inline_namespace() => grammar::parse_namespace(self),
            TokenKind::CLASS_KW | TokenKind::STRUCT_KW | TokenKind::UNION_KW => {
                grammar::parse_class(self, grammar::DeclPrefix::none(self.cursor.position()))
            }
            TokenKind::ENUM_KW => {
                grammar::parse_enum(self, grammar::DeclPrefix::none(self.cursor.position()))
            }
            TokenKind::TYPEDEF_KW => grammar::parse_typedef(self),
            TokenKind::USING_KW => {
                grammar::parse_using(self, grammar::DeclPrefix::none(self.cursor.position()))
            }
            TokenKind::PUBLIC_KW | TokenKind::PRIVATE_KW | TokenKind::PROTECTED_KW => {
                grammar::parse_access_specifier(self)
            }
            TokenKind::R_BRACE => {
                self.close_scope();
                Ok(())
            }
            TokenKind::SEMICOLON => {
                self.cursor.advance();
                Ok(())
            }
            TokenKind::EXTERN_KW if self.at_linkage_block() => {
                grammar::parse_linkage_block(self);
                Ok(())
            }
            TokenKind::IDENT if self.at_macro_prefixed_declaration() => {
                grammar::parse_macro_prefixed(self)
            }
            _ => grammar::parse_function_or_variable(self),
        }
    }

    fn at_inline_namespace(&self) -> bool {
        let mut probe = self.cursor;
        probe.advance();
        probe.next_significant() == TokenKind::NAMESPACE_KW
    }

    /// `extern "C" {`
    fn at_linkage_block(&self) -> bool {
        let mut probe = self.cursor;
        probe.advance();
        probe.skip_whitespace_and_newlines();
        if !probe.eat(TokenKind::STRING) {
            return false;
        }
        probe.next_significant() == TokenKind::L_BRACE
    }

    /// A known macro followed, on the same line, by `class`, `struct`,
    /// `union` or `enum`
    fn at_macro_prefixed_declaration(&self) -> bool {
        if !self.macros.contains(self.cursor.peek().text) {
            return false;
        }
        let mut probe = self.cursor;
        probe.advance();
        probe.skip_whitespace();
        probe.at_any(&[
            TokenKind::CLASS_KW,
            TokenKind::STRUCT_KW,
            TokenKind::UNION_KW,
            TokenKind::ENUM_KW,
        ])
    }

    /// `}` closes the innermost scope, together with a directly following `;`
    fn close_scope(&mut self) {
        let brace = self.cursor.advance();
        self.cursor.eat(TokenKind::SEMICOLON);
        if self.scopes.pop().is_none() {
            self.warn(SyntaxError::new(
                "unmatched '}' at file scope",
                brace.range(),
                ErrorCode::E0205,
            ));
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    fn report(&mut self, error: SyntaxError) -> Result<(), ParseError> {
        if self.recovery == RecoveryPolicy::Strict {
            return Err(ParseError::Syntax {
                file: self.tree.filename().to_string(),
                error,
            });
        }
        let position = self.position_at(error.range.start());
        tracing::warn!(
            code = %error.code,
            line = position.line,
            column = position.column,
            message = %error.message,
            "recovered from syntax error"
        );
        self.tree.push_diagnostic(error);
        Ok(())
    }

    /// Record a diagnostic that does not interrupt the construct
    pub(crate) fn warn(&mut self, error: SyntaxError) {
        let error = error.with_severity(Severity::Warning);
        let position = self.position_at(error.range.start());
        tracing::warn!(
            code = %error.code,
            line = position.line,
            column = position.column,
            message = %error.message,
            "suspicious input"
        );
        self.tree.push_diagnostic(error);
    }

    /// Skip to the end of the failed construct: past the next `;`, or up to
    /// the next token that starts a construct. Brace blocks met on the way
    /// are skipped whole. Nothing is skipped when the failed routine already
    /// consumed a `;`.
    fn resync(&mut self, start: Checkpoint) {
        if self.cursor.checkpoint() == start {
            self.cursor.advance();
        } else if self.cursor.previous().kind == TokenKind::SEMICOLON {
            // The construct already consumed its terminator
            return;
        }
        let stops = ParseContext::TopLevel.recovery_tokens();
        while !self.cursor.is_at_end() {
            match self.cursor.kind() {
                TokenKind::SEMICOLON => {
                    self.cursor.advance();
                    return;
                }
                TokenKind::L_BRACE => {
                    self.skip_braces();
                }
                kind if stops.contains(&kind) => return,
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// Consume a balanced `{ ... }` block starting at the current `{`.
    /// Returns false if input ends first.
    pub(crate) fn skip_braces(&mut self) -> bool {
        let mut depth = 0usize;
        while !self.cursor.is_at_end() {
            match self.cursor.advance().kind {
                TokenKind::L_BRACE => depth += 1,
                TokenKind::R_BRACE => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    // =========================================================================
    // Entities and scopes
    // =========================================================================

    /// Attach an entity to the current scope with the current access level,
    /// handing it the pending doxygen comment
    pub(crate) fn emit(&mut self, mut entity: Entity) -> EntityId {
        entity.access = self.scopes.current_access();
        if let Some(comment) = self.pending_comment.take() {
            entity.comment = Some(comment);
        }
        self.tree.attach(self.scopes.current_entity(), entity)
    }

    pub(crate) fn enter_scope(&mut self, id: EntityId, default_access: AccessLevel) {
        self.scopes.push(id, default_access);
    }

    /// Entity owning the innermost scope
    pub(crate) fn enclosing(&self) -> &Entity {
        &self.tree[self.scopes.current_entity()]
    }

    pub(crate) fn in_class_scope(&self) -> bool {
        self.enclosing().kind.is_class_like()
    }

    pub(crate) fn set_pending_comment(&mut self, comment: Option<DoxygenComment>) {
        self.pending_comment = comment;
    }

    fn flush_pending_comment(&mut self) {
        let Some(comment) = self.pending_comment.take() else {
            return;
        };
        let mut entity = Entity::new(EntityKind::Comment, "file-comment")
            .with_signature(comment.raw.clone())
            .with_range(comment.span.unwrap_or_default());
        entity.comment = Some(comment);
        self.tree.attach(EntityId::ROOT, entity);
    }

    // =========================================================================
    // Text and positions
    // =========================================================================

    pub(crate) fn position_at(&self, offset: TextSize) -> Position {
        self.line_index.position(self.source, offset)
    }

    /// Span from the start of token `first` to the end of token `last`
    pub(crate) fn span_between(&self, first: usize, last: usize) -> Span {
        let start = self.cursor.token_at(first).offset;
        let end = self.cursor.token_at(last).end().max(start);
        Span::new(self.position_at(start), self.position_at(end))
    }

    /// Verbatim source of tokens `first..end`
    pub(crate) fn text_between(&self, first: usize, end: usize) -> &'a str {
        if end <= first {
            return "";
        }
        let start = usize::from(self.cursor.token_at(first).offset);
        let stop = usize::from(self.cursor.token_at(end - 1).end());
        self.source.get(start..stop).unwrap_or("")
    }

    /// Source of tokens `first..end` with object-like macros replaced
    pub(crate) fn substituted_between(&self, first: usize, end: usize) -> String {
        let tokens = self.cursor.tokens();
        let end = end.min(tokens.len());
        let first = first.min(end);
        let mut out = String::new();
        for token in &tokens[first..end] {
            if token.kind == TokenKind::IDENT {
                out.push_str(self.macros.resolve(token.text));
            } else {
                out.push_str(token.text);
            }
        }
        out
    }

    /// Index of the last non-whitespace token in `first..end`, or `first`
    pub(crate) fn last_significant_before(&self, first: usize, end: usize) -> usize {
        let mut idx = end;
        while idx > first {
            idx -= 1;
            if !self.cursor.token_at(idx).kind.is_trivia() {
                return idx;
            }
        }
        first
    }

    // =========================================================================
    // Errors
    // =========================================================================

    pub(crate) fn error_here(&self, code: ErrorCode, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.cursor.peek().range(), code)
    }

    /// "unexpected X in <context>, expected ..." at the current token
    pub(crate) fn unexpected(&self, context: ParseContext, code: ErrorCode) -> SyntaxError {
        let token = self.cursor.peek();
        let found = match token.kind {
            TokenKind::EOF => "end of input".to_string(),
            TokenKind::NEWLINE => "end of line".to_string(),
            _ => format!("'{}'", token.text),
        };
        let mut error = format_context_error(&found, context, code);
        error.range = token.range();
        error
    }
}
