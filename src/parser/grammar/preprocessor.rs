//! Preprocessor directives
//!
//! Directives are recorded, never evaluated: `#if` branches are all parsed.
//! `#define` additionally feeds the macro table used for signature
//! substitution.

use smol_str::SmolStr;

use crate::entity::{Entity, EntityKind};
use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::macros::MacroDefinition;
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;

pub(crate) fn parse_preprocessor(p: &mut Parser<'_, '_>) {
    let start = p.cursor.position();
    p.cursor.advance();
    p.cursor.skip_whitespace();
    if p.cursor.at(TokenKind::IDENT) && p.cursor.peek().text == "define" {
        parse_define(p, start);
    } else {
        parse_directive(p, start);
    }
}

fn parse_define(p: &mut Parser<'_, '_>, start: usize) {
    p.cursor.advance();
    p.cursor.skip_whitespace();

    let name_token = p.cursor.peek();
    if name_token.kind != TokenKind::IDENT && !name_token.kind.is_keyword() {
        let error = p.unexpected(ParseContext::Preprocessor, ErrorCode::E0601);
        p.warn(error);
        parse_directive(p, start);
        return;
    }
    let mut last = p.cursor.position();
    p.cursor.advance();

    // `NAME(` with no space between is a function-like macro
    let mut params = None;
    let mut params_text = "";
    if p.cursor.at(TokenKind::L_PAREN) {
        let open = p.cursor.position();
        params = Some(collect_params(p));
        last = p.cursor.position() - 1;
        params_text = p.text_between(open, p.cursor.position());
    }

    let (value, value_last) = collect_value(p);
    if let Some(idx) = value_last {
        last = idx;
    }

    let name = name_token.text;
    let definition = match params {
        Some(params) => MacroDefinition::function(name, params, value.as_str()),
        None => MacroDefinition::object(name, value.as_str()),
    };
    p.macros.define(definition);

    let signature = format!("#define {name}{params_text} {value}");
    let entity = Entity::new(EntityKind::Macro, name)
        .with_signature(signature.trim_end())
        .with_range(p.span_between(start, last));
    p.emit(entity);
}

/// Parameter names of a function-like macro; the cursor is on `(`
fn collect_params(p: &mut Parser<'_, '_>) -> Vec<SmolStr> {
    p.cursor.advance();
    let mut params = Vec::new();
    loop {
        match p.cursor.kind() {
            TokenKind::R_PAREN => {
                p.cursor.advance();
                break;
            }
            TokenKind::NEWLINE | TokenKind::EOF => break,
            TokenKind::IDENT => params.push(SmolStr::new(p.cursor.advance().text)),
            TokenKind::DOT => {
                if p.cursor.peek_ahead(1).kind == TokenKind::DOT
                    && p.cursor.peek_ahead(2).kind == TokenKind::DOT
                {
                    params.push(SmolStr::new("..."));
                    p.cursor.advance();
                    p.cursor.advance();
                }
                p.cursor.advance();
            }
            _ => {
                p.cursor.advance();
            }
        }
    }
    params
}

/// Replacement text up to the end of the directive.
///
/// A backslash-newline becomes one space, whitespace runs collapse,
/// comments are dropped, and an open `(` or `{` keeps the directive going
/// across plain newlines. Returns the trimmed value and the index of its
/// last token.
fn collect_value(p: &mut Parser<'_, '_>) -> (String, Option<usize>) {
    let mut value = String::new();
    let mut last = None;
    let mut depth = 0usize;
    let mut pending_space = false;

    loop {
        let token = p.cursor.peek();
        match token.kind {
            TokenKind::EOF => break,
            TokenKind::NEWLINE if depth == 0 => break,
            TokenKind::BACKSLASH => {
                let mut probe = p.cursor;
                probe.advance();
                probe.skip_whitespace();
                if probe.eat(TokenKind::NEWLINE) {
                    p.cursor = probe;
                    pending_space = true;
                    continue;
                }
                push_value(&mut value, token.text, &mut pending_space);
                last = Some(p.cursor.position());
            }
            kind if kind.is_trivia() || kind.is_comment() => pending_space = true,
            kind => {
                match kind {
                    TokenKind::L_PAREN | TokenKind::L_BRACE => depth += 1,
                    TokenKind::R_PAREN | TokenKind::R_BRACE => depth = depth.saturating_sub(1),
                    _ => {}
                }
                push_value(&mut value, token.text, &mut pending_space);
                last = Some(p.cursor.position());
            }
        }
        p.cursor.advance();
    }
    (value, last)
}

fn push_value(value: &mut String, text: &str, pending_space: &mut bool) {
    if *pending_space && !value.is_empty() {
        value.push(' ');
    }
    *pending_space = false;
    value.push_str(text);
}

/// Any other directive: verbatim to the end of the line, honoring
/// backslash continuation. A trailing `//` comment is left for the comment
/// handler.
fn parse_directive(p: &mut Parser<'_, '_>, start: usize) {
    let mut last = p.last_significant_before(start, p.cursor.position());
    loop {
        let token = p.cursor.peek();
        match token.kind {
            TokenKind::EOF | TokenKind::NEWLINE => break,
            TokenKind::LINE_COMMENT => break,
            TokenKind::DOXYGEN_COMMENT if token.text.starts_with("//") => break,
            TokenKind::BACKSLASH => {
                let mut probe = p.cursor;
                probe.advance();
                probe.skip_whitespace();
                if probe.eat(TokenKind::NEWLINE) {
                    p.cursor = probe;
                    continue;
                }
                last = p.cursor.position();
            }
            kind if kind.is_trivia() => {}
            _ => last = p.cursor.position(),
        }
        p.cursor.advance();
    }

    let text = p.text_between(start, last + 1).trim();
    let entity = Entity::new(EntityKind::Preprocessor, text)
        .with_signature(text)
        .with_range(p.span_between(start, last));
    p.emit(entity);
}
