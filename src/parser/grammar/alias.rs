//! `typedef` and `using`

use super::DeclPrefix;
use crate::entity::{Entity, EntityKind};
use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};
use crate::parser::parser::{ParseResult, Parser};
use crate::parser::token_kind::TokenKind;

/// `typedef ... NAME;`, including inline `struct { }` bodies and function
/// pointer declarators such as `typedef void (*Callback)(int);`
pub(crate) fn parse_typedef(p: &mut Parser<'_, '_>) -> ParseResult<()> {
    let start = p.cursor.position();
    p.cursor.advance();

    let mut braces = 0usize;
    let mut parens = 0usize;
    let mut plain_name: Option<&str> = None;
    let mut declarator_name: Option<&str> = None;
    let mut in_declarator = false;
    let mut seen_group = false;

    loop {
        let token = p.cursor.peek();
        match token.kind {
            TokenKind::EOF => return Err(p.unexpected(ParseContext::Typedef, ErrorCode::E0201)),
            TokenKind::SEMICOLON if braces == 0 && parens == 0 => {
                p.cursor.advance();
                break;
            }
            TokenKind::R_BRACE if braces == 0 => {
                return Err(p.unexpected(ParseContext::Typedef, ErrorCode::E0201));
            }
            TokenKind::L_BRACE => braces += 1,
            TokenKind::R_BRACE => braces -= 1,
            TokenKind::L_PAREN if braces == 0 => {
                if parens == 0 && !seen_group {
                    seen_group = true;
                    in_declarator = is_declarator_group(p);
                }
                parens += 1;
            }
            TokenKind::R_PAREN if braces == 0 => {
                parens = parens.saturating_sub(1);
                if parens == 0 {
                    in_declarator = false;
                }
            }
            TokenKind::IDENT if braces == 0 => {
                if parens == 0 {
                    plain_name = Some(token.text);
                } else if in_declarator {
                    declarator_name = Some(token.text);
                }
            }
            _ => {}
        }
        p.cursor.advance();
    }

    let end = p.cursor.position();
    let Some(name) = declarator_name.or(plain_name) else {
        return Err(SyntaxError::new(
            "expected a name in typedef",
            p.cursor.token_at(start).range(),
            ErrorCode::E0301,
        ));
    };
    let entity = Entity::new(EntityKind::Typedef, name)
        .with_signature(p.text_between(start, end))
        .with_range(p.span_between(start, end - 1));
    p.emit(entity);
    Ok(())
}

/// A parenthesized group directly followed by `(` or `[` holds the
/// declarator: `(*Callback)(int)`, `(Foo::*Method)()`, `(*Table)[4]`
fn is_declarator_group(p: &Parser<'_, '_>) -> bool {
    let mut probe = p.cursor;
    let mut depth = 0usize;
    while !probe.is_at_end() {
        match probe.advance().kind {
            TokenKind::L_PAREN => depth += 1,
            TokenKind::R_PAREN => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            TokenKind::SEMICOLON | TokenKind::L_BRACE | TokenKind::R_BRACE => return false,
            _ => {}
        }
    }
    matches!(probe.next_significant(), TokenKind::L_PAREN | TokenKind::L_BRACKET)
}

/// `using N = T;`, `using namespace X::Y;` and `using X::y;`
pub(crate) fn parse_using(p: &mut Parser<'_, '_>, prefix: DeclPrefix) -> ParseResult<()> {
    let start = p.cursor.position();
    p.cursor.advance();
    p.cursor.skip_whitespace_and_newlines();

    let name = if p.cursor.eat(TokenKind::NAMESPACE_KW) {
        let mut name = String::new();
        while !p.cursor.at(TokenKind::SEMICOLON) {
            let token = p.cursor.peek();
            if p.cursor.is_at_end() || matches!(token.kind, TokenKind::L_BRACE | TokenKind::R_BRACE) {
                return Err(p.unexpected(ParseContext::Using, ErrorCode::E0201));
            }
            if !token.kind.is_trivia() && !token.kind.is_comment() {
                name.push_str(token.text);
            }
            p.cursor.advance();
        }
        p.cursor.advance();
        name
    } else {
        let mut alias: Option<&str> = None;
        let mut last_ident: Option<&str> = None;
        let mut seen_eq = false;
        let mut depth = 0usize;
        loop {
            let token = p.cursor.peek();
            match token.kind {
                TokenKind::EOF => return Err(p.unexpected(ParseContext::Using, ErrorCode::E0201)),
                TokenKind::SEMICOLON if depth == 0 => {
                    p.cursor.advance();
                    break;
                }
                TokenKind::R_BRACE if depth == 0 => {
                    return Err(p.unexpected(ParseContext::Using, ErrorCode::E0201));
                }
                TokenKind::L_PAREN | TokenKind::L_BRACE | TokenKind::L_BRACKET => depth += 1,
                TokenKind::R_PAREN | TokenKind::R_BRACE | TokenKind::R_BRACKET => {
                    depth = depth.saturating_sub(1);
                }
                TokenKind::EQ if depth == 0 && !seen_eq => {
                    seen_eq = true;
                    alias = last_ident;
                }
                TokenKind::IDENT if !seen_eq => last_ident = Some(token.text),
                _ => {}
            }
            p.cursor.advance();
        }
        alias.or(last_ident).unwrap_or_default().to_string()
    };

    let end = p.cursor.position();
    if name.is_empty() {
        return Err(SyntaxError::new(
            "expected a name in using declaration",
            p.cursor.token_at(start).range(),
            ErrorCode::E0502,
        ));
    }
    let signature = prefix.prepend(p.text_between(start, end));
    let mut entity = Entity::new(EntityKind::Using, name)
        .with_signature(signature)
        .with_range(p.span_between(prefix.start, end - 1));
    prefix.apply(&mut entity);
    p.emit(entity);
    Ok(())
}
