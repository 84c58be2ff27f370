//! `public:`, `protected:` and `private:`

use crate::entity::{AccessLevel, Entity, EntityKind};
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::parser::{ParseResult, Parser};
use crate::parser::token_kind::TokenKind;

pub(crate) fn parse_access_specifier(p: &mut Parser<'_, '_>) -> ParseResult<()> {
    let start = p.cursor.position();
    let level = match p.cursor.advance().kind {
        TokenKind::PUBLIC_KW => AccessLevel::Public,
        TokenKind::PROTECTED_KW => AccessLevel::Protected,
        _ => AccessLevel::Private,
    };
    p.cursor.skip_whitespace();
    if !p.cursor.at(TokenKind::COLON) {
        return Err(p.unexpected(ParseContext::AccessSpecifier, ErrorCode::E0206));
    }
    let colon = p.cursor.position();
    p.cursor.advance();

    p.scopes.set_access(level);
    let entity = Entity::new(EntityKind::AccessSpecifier, level.as_str())
        .with_signature(format!("{}:", level.as_str()))
        .with_range(p.span_between(start, colon));
    p.emit(entity);
    Ok(())
}
