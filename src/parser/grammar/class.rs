//! Class, struct and union heads
//!
//! The head is recorded as one entity; members that follow the `{` are
//! parsed by the dispatch loop inside the pushed scope.

use super::function::parse_declaration;
use super::{DeclPrefix, at_elaborated_declaration, parse_enum, skip_angle_brackets, skip_attribute};
use crate::entity::{AccessLevel, Entity, EntityKind};
use crate::parser::cursor::TokenCursor;
use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};
use crate::parser::parser::{ParseResult, Parser};
use crate::parser::token_kind::TokenKind;

/// `API class Foo {` where `API` is a known macro: the resolved macro text
/// leads the signature
pub(crate) fn parse_macro_prefixed(p: &mut Parser<'_, '_>) -> ParseResult<()> {
    let start = p.cursor.position();
    let token = p.cursor.advance();
    let text = p.macros.resolve(token.text).trim().to_string();
    p.cursor.skip_whitespace();
    let prefix = DeclPrefix {
        start,
        text,
        template: None,
    };
    if p.cursor.at(TokenKind::ENUM_KW) {
        parse_enum(p, prefix)
    } else {
        parse_class(p, prefix)
    }
}

pub(crate) fn parse_class(p: &mut Parser<'_, '_>, prefix: DeclPrefix) -> ParseResult<()> {
    let head_start = p.cursor.checkpoint();
    let keyword = p.cursor.advance();
    let (kind, default_access) = match keyword.kind {
        TokenKind::CLASS_KW => (EntityKind::Class, AccessLevel::Private),
        _ => (EntityKind::Struct, AccessLevel::Public),
    };

    // `struct stat st;` declares a variable of an elaborated type
    if prefix.text.is_empty()
        && !first_is_known_macro(p, p.cursor)
        && at_elaborated_declaration(p.cursor)
    {
        p.cursor.restore(head_start);
        return parse_declaration(p, prefix);
    }

    let mut signature = keyword.text.to_string();
    let mut last = head_start.index();
    p.cursor.skip_whitespace_and_newlines();
    while skip_attribute(&mut p.cursor) {
        p.cursor.skip_whitespace_and_newlines();
    }

    let mut name = String::new();
    if p.cursor.at(TokenKind::IDENT) {
        let first = p.cursor.advance();
        let mut probe = p.cursor;
        probe.skip_whitespace_and_newlines();
        let export_macro = probe.at(TokenKind::IDENT)
            && (p.macros.contains(first.text) || followed_by_class_head(probe));
        if export_macro {
            signature.push(' ');
            signature.push_str(first.text);
            p.cursor = probe;
            name.push_str(p.cursor.advance().text);
        } else {
            name.push_str(first.text);
        }
        while p.cursor.at(TokenKind::COLON_COLON) && p.cursor.peek_ahead(1).kind == TokenKind::IDENT {
            p.cursor.advance();
            name.push_str("::");
            name.push_str(p.cursor.advance().text);
        }
        last = p.cursor.position() - 1;
        signature.push(' ');
        signature.push_str(&name);

        // Specialization arguments: `struct Hash<int> {`
        let mut probe = p.cursor;
        probe.skip_whitespace_and_newlines();
        if probe.at(TokenKind::LT) {
            let open = probe.position();
            if !skip_angle_brackets(&mut probe) {
                return Err(SyntaxError::new(
                    "unclosed '<' in class template arguments",
                    p.cursor.token_at(open).range(),
                    ErrorCode::E0204,
                ));
            }
            p.cursor = probe;
            signature.push_str(p.text_between(open, p.cursor.position()));
            last = p.cursor.position() - 1;
        }
    }

    p.cursor.skip_whitespace_and_newlines();
    if p.cursor.at(TokenKind::FINAL_KW) {
        last = p.cursor.position();
        p.cursor.advance();
        signature.push_str(" final");
        p.cursor.skip_whitespace_and_newlines();
    }

    if p.cursor.eat(TokenKind::COLON) {
        p.cursor.skip_whitespace_and_newlines();
        let bases_start = p.cursor.position();
        while !p.cursor.at_any(&[TokenKind::L_BRACE, TokenKind::SEMICOLON]) {
            if p.cursor.is_at_end() || p.cursor.at(TokenKind::R_BRACE) {
                return Err(p.unexpected(ParseContext::Class, ErrorCode::E0304));
            }
            p.cursor.advance();
        }
        let bases_end = p.cursor.position();
        signature.push_str(" : ");
        signature.push_str(p.text_between(bases_start, bases_end).trim());
        last = p.last_significant_before(bases_start, bases_end);
    }

    let has_body = match p.cursor.kind() {
        TokenKind::L_BRACE => {
            last = p.cursor.position();
            p.cursor.advance();
            signature.push_str(" {");
            true
        }
        TokenKind::SEMICOLON => {
            last = p.cursor.position();
            p.cursor.advance();
            false
        }
        _ if name.is_empty() => return Err(p.unexpected(ParseContext::Class, ErrorCode::E0301)),
        _ => false,
    };

    let mut entity = Entity::new(kind, name)
        .with_signature(prefix.prepend(&signature))
        .with_range(p.span_between(prefix.start, last));
    prefix.apply(&mut entity);
    let id = p.emit(entity);
    if has_body {
        p.enter_scope(id, default_access);
    }
    Ok(())
}

fn first_is_known_macro(p: &Parser<'_, '_>, cursor: TokenCursor<'_, '_>) -> bool {
    let mut probe = cursor;
    probe.skip_whitespace_and_newlines();
    probe.at(TokenKind::IDENT) && p.macros.contains(probe.peek().text)
}

/// The probe sits on the second identifier of `class API Foo`: is that
/// identifier followed by `{`, `:` or `final`?
fn followed_by_class_head(cursor: TokenCursor<'_, '_>) -> bool {
    let mut probe = cursor;
    probe.advance();
    matches!(
        probe.next_significant(),
        TokenKind::L_BRACE | TokenKind::COLON | TokenKind::FINAL_KW
    )
}
