//! Construct routines for C++ headers
//!
//! One routine per construct:
//! - `namespace` - namespaces, aliases and `extern "C"` blocks
//! - `class` - class, struct and union heads
//! - `enums` - enums with their enumerator body
//! - `alias` - `typedef` and `using`
//! - `function` - the function-or-variable probe and both routines
//! - `template` - template clauses and the declaration they introduce
//! - `access` - access specifiers
//! - `preprocessor` - `#define` and other directives
//! - `comment` - doxygen and plain comments
//!
//! Every routine starts at the first token of its construct. Routines that
//! can fail return a [`SyntaxError`](super::SyntaxError) and leave recovery
//! to the dispatch loop.

mod access;
mod alias;
mod class;
mod comment;
mod enums;
mod function;
mod namespace;
mod preprocessor;
mod template;

pub(crate) use access::parse_access_specifier;
pub(crate) use alias::{parse_typedef, parse_using};
pub(crate) use class::{parse_class, parse_macro_prefixed};
pub(crate) use comment::parse_comment;
pub(crate) use enums::parse_enum;
pub(crate) use function::{looks_like_function, parse_function_or_variable};
pub(crate) use namespace::{parse_linkage_block, parse_namespace};
pub(crate) use preprocessor::parse_preprocessor;
pub(crate) use template::{TemplateClause, parse_template};

use super::cursor::TokenCursor;
use super::token_kind::TokenKind;
use crate::entity::Entity;

/// Specifiers that may open a declaration
pub(crate) const DECL_SPECIFIERS: &[TokenKind] = &[
    TokenKind::STATIC_KW,
    TokenKind::EXTERN_KW,
    TokenKind::INLINE_KW,
    TokenKind::VIRTUAL_KW,
    TokenKind::CONST_KW,
    TokenKind::CONSTEXPR_KW,
    TokenKind::MUTABLE_KW,
    TokenKind::VOLATILE_KW,
    TokenKind::EXPLICIT_KW,
    TokenKind::FRIEND_KW,
];

/// Text that precedes a declaration head: a resolved export macro or a
/// template clause
#[derive(Debug, Clone, Default)]
pub(crate) struct DeclPrefix {
    /// Token index where the whole construct starts
    pub start: usize,
    pub text: String,
    pub template: Option<TemplateClause>,
}

impl DeclPrefix {
    pub fn none(start: usize) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    pub fn prepend(&self, signature: &str) -> String {
        if self.text.is_empty() {
            signature.to_string()
        } else {
            format!("{} {}", self.text, signature)
        }
    }

    /// Copy template information onto the entity
    pub fn apply(&self, entity: &mut Entity) {
        if let Some(clause) = &self.template {
            entity.is_template = true;
            entity.template_params = clause.params.clone();
        }
    }
}

/// Skip a `[[...]]` attribute at the cursor
pub(crate) fn skip_attribute(cursor: &mut TokenCursor<'_, '_>) -> bool {
    if !(cursor.at(TokenKind::L_BRACKET) && cursor.peek_ahead(1).kind == TokenKind::L_BRACKET) {
        return false;
    }
    let mut depth = 0usize;
    while !cursor.is_at_end() {
        match cursor.advance().kind {
            TokenKind::L_BRACKET => depth += 1,
            TokenKind::R_BRACKET => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
    }
    true
}

/// Skip a balanced `<...>` starting at the current `<`.
///
/// `>>` closes two levels and parenthesized text is opaque. Returns false
/// when `;`, a brace or the end of input comes first.
pub(crate) fn skip_angle_brackets(cursor: &mut TokenCursor<'_, '_>) -> bool {
    let mut depth = 0i32;
    let mut parens = 0usize;
    while !cursor.is_at_end() {
        let kind = cursor.kind();
        match kind {
            TokenKind::L_PAREN => parens += 1,
            TokenKind::R_PAREN => parens = parens.saturating_sub(1),
            TokenKind::LT if parens == 0 => depth += 1,
            TokenKind::GT if parens == 0 => depth -= 1,
            TokenKind::GT_GT if parens == 0 => depth -= 2,
            TokenKind::SEMICOLON | TokenKind::L_BRACE | TokenKind::R_BRACE => return false,
            _ => {}
        }
        cursor.advance();
        if depth <= 0 && parens == 0 && matches!(kind, TokenKind::GT | TokenKind::GT_GT) {
            return true;
        }
    }
    false
}

/// `IDENT IDENT ;` or `IDENT *`: after `struct`/`class`/`enum` this is a
/// declaration using an elaborated type, not a type definition
pub(crate) fn at_elaborated_declaration(cursor: TokenCursor<'_, '_>) -> bool {
    let mut probe = cursor;
    probe.skip_whitespace_and_newlines();
    if !probe.eat(TokenKind::IDENT) {
        return false;
    }
    while probe.eat(TokenKind::COLON_COLON) {
        if !probe.eat(TokenKind::IDENT) {
            return false;
        }
    }
    probe.skip_whitespace_and_newlines();
    match probe.kind() {
        TokenKind::STAR | TokenKind::AMP | TokenKind::AMP_AMP => true,
        TokenKind::IDENT => {
            probe.advance();
            matches!(
                probe.next_significant(),
                TokenKind::SEMICOLON
                    | TokenKind::EQ
                    | TokenKind::L_BRACKET
                    | TokenKind::COMMA
                    | TokenKind::L_PAREN
            )
        }
        _ => false,
    }
}

/// Join tokens the way they would be written: words separated by one
/// space, punctuation attached
pub(crate) fn join_tokens<'a>(texts: impl IntoIterator<Item = (TokenKind, &'a str)>) -> String {
    let mut out = String::new();
    let mut prev_word = false;
    for (kind, text) in texts {
        if kind.is_trivia() || kind.is_comment() {
            continue;
        }
        let word = kind == TokenKind::IDENT || kind.is_keyword() || kind == TokenKind::NUMBER;
        if word && prev_word {
            out.push(' ');
        }
        out.push_str(text);
        prev_word = word;
    }
    out
}
