//! Namespaces, namespace aliases and linkage blocks

use crate::entity::{AccessLevel, Entity, EntityKind};
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::parser::{ParseResult, Parser};
use crate::parser::token_kind::TokenKind;

/// `[inline] namespace [a::b] {`, or `namespace a = b::c;`
pub(crate) fn parse_namespace(p: &mut Parser<'_, '_>) -> ParseResult<()> {
    let start = p.cursor.position();
    let is_inline = p.cursor.eat(TokenKind::INLINE_KW);
    p.cursor.skip_whitespace_and_newlines();
    let mut last = p.cursor.position();
    p.cursor.advance();
    p.cursor.skip_whitespace_and_newlines();

    let mut name = String::new();
    while p.cursor.at(TokenKind::IDENT) {
        name.push_str(p.cursor.advance().text);
        last = p.cursor.position() - 1;
        if !p.cursor.eat(TokenKind::COLON_COLON) {
            break;
        }
        name.push_str("::");
        // `namespace a::inline b`
        if p.cursor.eat(TokenKind::INLINE_KW) {
            p.cursor.skip_whitespace();
        }
    }

    let mut probe = p.cursor;
    probe.skip_whitespace_and_newlines();

    if probe.at(TokenKind::EQ) && !name.is_empty() {
        while !p.cursor.at(TokenKind::SEMICOLON) {
            if p.cursor.is_at_end() || p.cursor.at_any(&[TokenKind::L_BRACE, TokenKind::R_BRACE]) {
                return Err(p.unexpected(ParseContext::Namespace, ErrorCode::E0201));
            }
            p.cursor.advance();
        }
        p.cursor.advance();
        let end = p.cursor.position();
        let entity = Entity::new(EntityKind::Namespace, name)
            .with_signature(p.text_between(start, end))
            .with_range(p.span_between(start, end - 1));
        p.emit(entity);
        return Ok(());
    }

    let mut signature = String::from(if is_inline { "inline namespace" } else { "namespace" });
    if !name.is_empty() {
        signature.push(' ');
        signature.push_str(&name);
    }

    if probe.at(TokenKind::L_BRACE) {
        p.cursor = probe;
        let brace = p.cursor.position();
        p.cursor.advance();
        signature.push_str(" {");
        let entity = Entity::new(EntityKind::Namespace, name)
            .with_signature(signature)
            .with_range(p.span_between(start, brace));
        let id = p.emit(entity);
        p.enter_scope(id, AccessLevel::Public);
        return Ok(());
    }

    if name.is_empty() {
        return Err(p.unexpected(ParseContext::Namespace, ErrorCode::E0501));
    }
    let entity = Entity::new(EntityKind::Namespace, name)
        .with_signature(signature)
        .with_range(p.span_between(start, last));
    p.emit(entity);
    Ok(())
}

/// `extern "C" {`: members stay in the enclosing scope
pub(crate) fn parse_linkage_block(p: &mut Parser<'_, '_>) {
    p.cursor.advance();
    p.cursor.skip_whitespace_and_newlines();
    let linkage = p.cursor.advance().text;
    p.cursor.skip_whitespace_and_newlines();
    p.cursor.advance();
    tracing::debug!(linkage, "enter linkage block");
    p.scopes.push_transparent();
}
