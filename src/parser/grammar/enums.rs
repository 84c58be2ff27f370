//! Enums
//!
//! Enumerators are not separate entities: the whole `{...}` body becomes
//! part of the signature.

use super::function::parse_declaration;
use super::{DeclPrefix, at_elaborated_declaration, skip_attribute};
use crate::entity::{Entity, EntityKind};
use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};
use crate::parser::parser::{ParseResult, Parser};
use crate::parser::token_kind::TokenKind;

pub(crate) fn parse_enum(p: &mut Parser<'_, '_>, prefix: DeclPrefix) -> ParseResult<()> {
    let head_start = p.cursor.checkpoint();
    p.cursor.advance();

    // `enum Color c;`
    if prefix.text.is_empty() && at_elaborated_declaration(p.cursor) {
        p.cursor.restore(head_start);
        return parse_declaration(p, prefix);
    }

    let mut signature = String::from("enum");
    let mut last = head_start.index();
    p.cursor.skip_whitespace_and_newlines();
    if p.cursor.at_any(&[TokenKind::CLASS_KW, TokenKind::STRUCT_KW]) {
        last = p.cursor.position();
        signature.push(' ');
        signature.push_str(p.cursor.advance().text);
        p.cursor.skip_whitespace_and_newlines();
    }
    while skip_attribute(&mut p.cursor) {
        p.cursor.skip_whitespace_and_newlines();
    }

    let mut name = String::new();
    if p.cursor.at(TokenKind::IDENT) {
        name.push_str(p.cursor.advance().text);
        while p.cursor.at(TokenKind::COLON_COLON) && p.cursor.peek_ahead(1).kind == TokenKind::IDENT {
            p.cursor.advance();
            name.push_str("::");
            name.push_str(p.cursor.advance().text);
        }
        last = p.cursor.position() - 1;
        signature.push(' ');
        signature.push_str(&name);
        p.cursor.skip_whitespace_and_newlines();
    }

    // Underlying type
    if p.cursor.eat(TokenKind::COLON) {
        p.cursor.skip_whitespace_and_newlines();
        let type_start = p.cursor.position();
        while !p.cursor.at_any(&[TokenKind::L_BRACE, TokenKind::SEMICOLON]) {
            if p.cursor.is_at_end() || p.cursor.at(TokenKind::R_BRACE) {
                return Err(p.unexpected(ParseContext::Enum, ErrorCode::E0304));
            }
            p.cursor.advance();
        }
        let type_end = p.cursor.position();
        signature.push_str(" : ");
        signature.push_str(p.text_between(type_start, type_end).trim());
        last = p.last_significant_before(type_start, type_end);
    }

    match p.cursor.kind() {
        TokenKind::L_BRACE => {
            let open = p.cursor.position();
            if !p.skip_braces() {
                return Err(SyntaxError::new(
                    "unclosed '{' in enum body",
                    p.cursor.token_at(open).range(),
                    ErrorCode::E0202,
                ));
            }
            let end = p.cursor.position();
            signature.push(' ');
            signature.push_str(p.text_between(open, end));
            last = end - 1;
            if p.cursor.at(TokenKind::SEMICOLON) {
                last = p.cursor.position();
                p.cursor.advance();
                signature.push(';');
            }
        }
        TokenKind::SEMICOLON => {
            last = p.cursor.position();
            p.cursor.advance();
            signature.push(';');
        }
        _ if name.is_empty() => return Err(p.unexpected(ParseContext::Enum, ErrorCode::E0301)),
        _ => {}
    }

    let entity = Entity::new(EntityKind::Enum, name)
        .with_signature(prefix.prepend(&signature))
        .with_range(p.span_between(prefix.start, last));
    p.emit(entity);
    Ok(())
}
