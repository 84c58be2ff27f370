//! Functions, methods and variables
//!
//! A pure probe over a copy of the cursor decides whether the declaration
//! at hand is a function; the matching routine then consumes it.

use super::{DECL_SPECIFIERS, DeclPrefix, join_tokens, skip_angle_brackets, skip_attribute};
use crate::entity::{Entity, EntityKind};
use crate::parser::cursor::TokenCursor;
use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};
use crate::parser::parser::{ParseResult, Parser};
use crate::parser::token_kind::TokenKind;

/// Type-like tokens examined before the probe gives up
const MAX_TYPE_TOKENS: usize = 6;

pub(crate) fn parse_function_or_variable(p: &mut Parser<'_, '_>) -> ParseResult<()> {
    let prefix = DeclPrefix::none(p.cursor.position());
    parse_declaration(p, prefix)
}

/// Probe, then commit to the function or the variable routine
pub(crate) fn parse_declaration(p: &mut Parser<'_, '_>, prefix: DeclPrefix) -> ParseResult<()> {
    if looks_like_function(p.cursor) {
        parse_function(p, prefix)
    } else {
        parse_variable(p, prefix)
    }
}

/// Does the declaration at the cursor declare a function?
///
/// Takes the cursor by value: scanning never moves the caller's position.
pub(crate) fn looks_like_function(cursor: TokenCursor<'_, '_>) -> bool {
    let mut probe = cursor;
    skip_leading_specifiers(&mut probe);

    let mut type_tokens = 0;
    while type_tokens < MAX_TYPE_TOKENS {
        probe.skip_whitespace_and_newlines();
        match probe.kind() {
            kind if kind == TokenKind::IDENT || kind.is_builtin_type() => {
                type_tokens += 1;
                probe.advance();
            }
            TokenKind::L_PAREN => return type_tokens >= 1,
            TokenKind::COLON_COLON
            | TokenKind::STAR
            | TokenKind::AMP
            | TokenKind::AMP_AMP
            | TokenKind::TILDE
            | TokenKind::CONST_KW
            | TokenKind::VOLATILE_KW => {
                probe.advance();
            }
            // Return type and qualifier may both carry arguments:
            // `std::vector<T> Box<T>::items()`
            TokenKind::LT => {
                if !skip_angle_brackets(&mut probe) {
                    return false;
                }
            }
            TokenKind::OPERATOR_KW => return operator_has_parameters(probe),
            _ => return false,
        }
    }
    false
}

/// Specifiers, attributes, `typename`, elaborated-type keywords and the
/// string of `extern "C"`
fn skip_leading_specifiers(probe: &mut TokenCursor<'_, '_>) {
    let mut after_extern = false;
    loop {
        probe.skip_whitespace_and_newlines();
        if skip_attribute(probe) {
            continue;
        }
        let kind = probe.kind();
        let skip = DECL_SPECIFIERS.contains(&kind)
            || matches!(
                kind,
                TokenKind::TYPENAME_KW
                    | TokenKind::STRUCT_KW
                    | TokenKind::CLASS_KW
                    | TokenKind::UNION_KW
                    | TokenKind::ENUM_KW
            )
            || (after_extern && kind == TokenKind::STRING);
        if !skip {
            return;
        }
        after_extern = kind == TokenKind::EXTERN_KW;
        probe.advance();
    }
}

/// After `operator`: symbols, then a parameter list
fn operator_has_parameters(cursor: TokenCursor<'_, '_>) -> bool {
    let mut probe = cursor;
    probe.advance();
    probe.skip_whitespace();
    if probe.at(TokenKind::L_PAREN) && probe.peek_ahead(1).kind == TokenKind::R_PAREN {
        probe.advance();
        probe.advance();
    }
    for _ in 0..MAX_TYPE_TOKENS {
        probe.skip_whitespace();
        match probe.kind() {
            TokenKind::L_PAREN => return true,
            TokenKind::SEMICOLON | TokenKind::L_BRACE | TokenKind::R_BRACE | TokenKind::EOF => {
                return false;
            }
            _ => {
                probe.advance();
            }
        }
    }
    false
}

/// Consume `operator` and its symbol, returning the written name
fn operator_name(p: &mut Parser<'_, '_>) -> String {
    let start = p.cursor.checkpoint();
    p.cursor.advance();
    p.cursor.skip_whitespace();
    if p.cursor.at(TokenKind::L_PAREN) && p.cursor.peek_ahead(1).kind == TokenKind::R_PAREN {
        p.cursor.advance();
        p.cursor.advance();
    } else {
        while !p.cursor.is_at_end()
            && !p.cursor.at_any(&[TokenKind::L_PAREN, TokenKind::SEMICOLON, TokenKind::L_BRACE])
        {
            p.cursor.advance();
        }
    }
    join_tokens(p.cursor.consumed_since(start).iter().map(|t| (t.kind, t.text)))
}

#[derive(Debug, Default)]
struct Flags {
    is_static: bool,
    is_inline: bool,
    is_virtual: bool,
    is_const: bool,
    is_pure: bool,
}

#[derive(Clone, Copy)]
enum Terminator {
    /// Index of the `;`
    Semicolon(usize),
    /// Index of the body `{`
    Body(usize),
}

fn parse_function(p: &mut Parser<'_, '_>, prefix: DeclPrefix) -> ParseResult<()> {
    let decl_start = p.cursor.position();
    let mut flags = Flags::default();
    let mut name: Option<String> = None;
    let mut destructor = false;
    // `(*name)` in front of the parameter list
    let mut in_declarator_group = false;
    let mut pointer_declarator = false;
    let mut params_close: Option<usize> = None;
    let mut params_open = false;
    let mut in_init_list = false;
    let mut depth = 0usize;
    let mut last_kind = TokenKind::EOF;
    let mut last_idx = decl_start;
    let stops = ParseContext::Function.recovery_tokens();

    let terminator = loop {
        let idx = p.cursor.position();
        let token = p.cursor.peek();
        let kind = token.kind;

        if depth == 0 && params_close.is_some() && stops.contains(&kind) {
            return Err(p.unexpected(ParseContext::Function, ErrorCode::E0201));
        }
        match kind {
            TokenKind::EOF => return Err(p.unexpected(ParseContext::Function, ErrorCode::E0201)),
            TokenKind::R_BRACE if depth == 0 => {
                return Err(p.unexpected(ParseContext::Function, ErrorCode::E0201));
            }
            TokenKind::SEMICOLON if depth == 0 => {
                p.cursor.advance();
                break Terminator::Semicolon(idx);
            }
            TokenKind::L_BRACE if depth == 0 => {
                // `: member{value}` keeps the braces in the signature
                if in_init_list && matches!(last_kind, TokenKind::IDENT | TokenKind::GT | TokenKind::GT_GT) {
                    if !p.skip_braces() {
                        return Err(unclosed_brace(p, idx));
                    }
                    last_kind = TokenKind::R_BRACE;
                    last_idx = p.cursor.position() - 1;
                    continue;
                }
                break Terminator::Body(idx);
            }
            TokenKind::OPERATOR_KW if depth == 0 && !params_open => {
                name = Some(operator_name(p));
                destructor = false;
                last_kind = TokenKind::OPERATOR_KW;
                last_idx = p.cursor.position().saturating_sub(1);
                continue;
            }
            TokenKind::L_PAREN => {
                if depth == 0 && !params_open {
                    if name.is_none() || opens_declarator_group(p.cursor) {
                        in_declarator_group = true;
                    } else {
                        params_open = true;
                    }
                }
                depth += 1;
            }
            TokenKind::R_PAREN => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if in_declarator_group {
                        in_declarator_group = false;
                        pointer_declarator = name.is_some();
                    } else if params_open && params_close.is_none() {
                        params_close = Some(idx);
                    }
                }
            }
            TokenKind::IDENT if !params_open && (depth == 0 || in_declarator_group) => {
                name = Some(token.text.to_string());
                destructor = last_kind == TokenKind::TILDE;
            }
            TokenKind::STATIC_KW if depth == 0 && !params_open => flags.is_static = true,
            TokenKind::INLINE_KW if depth == 0 && !params_open => flags.is_inline = true,
            TokenKind::VIRTUAL_KW if depth == 0 && !params_open => flags.is_virtual = true,
            TokenKind::CONST_KW if depth == 0 && params_close == Some(last_idx) => {
                flags.is_const = true;
            }
            TokenKind::EQ if depth == 0 && params_close.is_some() => {
                let mut probe = p.cursor;
                probe.advance();
                probe.skip_whitespace_and_newlines();
                if probe.at(TokenKind::NUMBER) && probe.peek().text == "0" {
                    flags.is_pure = true;
                }
            }
            TokenKind::COLON if depth == 0 && params_close.is_some() => in_init_list = true,
            _ => {}
        }

        if !kind.is_trivia() && !kind.is_comment() {
            last_kind = kind;
            last_idx = idx;
        }
        p.cursor.advance();
    };

    let Some(name) = name else {
        return Err(SyntaxError::new(
            "expected a function name before the parameter list",
            p.cursor.token_at(decl_start).range(),
            ErrorCode::E0301,
        ));
    };

    let (sig_end, mut last) = match terminator {
        Terminator::Semicolon(idx) => (idx + 1, idx),
        Terminator::Body(idx) => {
            let end = p.last_significant_before(decl_start, idx) + 1;
            (end, end - 1)
        }
    };
    let header_range = p.span_between(prefix.start, sig_end - 1);
    let signature = p.substituted_between(decl_start, sig_end);
    let signature = prefix.prepend(signature.trim_end());

    let mut body = None;
    if let Terminator::Body(open) = terminator {
        if !p.skip_braces() {
            return Err(unclosed_brace(p, open));
        }
        let close = p.cursor.position() - 1;
        body = Some((p.span_between(open, close), p.text_between(open, close + 1)));
        last = close;
    }

    let in_class = p.in_class_scope();
    let kind = if pointer_declarator {
        if in_class { EntityKind::Field } else { EntityKind::Variable }
    } else if destructor {
        EntityKind::Destructor
    } else if in_class && p.enclosing().name == name.as_str() {
        EntityKind::Constructor
    } else if in_class {
        EntityKind::Method
    } else {
        EntityKind::Function
    };

    let mut entity = Entity::new(kind, name).with_signature(signature);
    entity.is_static = flags.is_static;
    entity.is_inline = flags.is_inline;
    entity.is_virtual = flags.is_virtual;
    entity.is_const = flags.is_const;
    entity.is_pure = flags.is_pure;
    entity.source_range = p.span_between(prefix.start, last);
    entity.header_range = header_range;
    if let Some((range, text)) = body {
        entity.body_range = Some(range);
        entity.original_text = text.to_string();
    }
    prefix.apply(&mut entity);
    p.emit(entity);
    Ok(())
}

/// `(` directly followed by `*` or `&` wraps a declarator, as in
/// `MyType (*fp)(int)`, rather than opening a parameter list
fn opens_declarator_group(cursor: TokenCursor<'_, '_>) -> bool {
    let mut probe = cursor;
    probe.advance();
    probe.skip_whitespace();
    probe.at_any(&[TokenKind::STAR, TokenKind::AMP, TokenKind::AMP_AMP])
}

fn unclosed_brace(p: &Parser<'_, '_>, open: usize) -> SyntaxError {
    SyntaxError::builder(ErrorCode::E0202)
        .message("unclosed '{' in function body")
        .range(p.cursor.token_at(open).range())
        .hint("the body runs to the end of the file")
        .build()
}

pub(crate) fn parse_variable(p: &mut Parser<'_, '_>, prefix: DeclPrefix) -> ParseResult<()> {
    let decl_start = p.cursor.position();
    let mut name: Option<&str> = None;
    let mut initializer = false;
    let mut depth = 0usize;
    let mut is_static = false;
    let mut is_const = false;
    let mut is_inline = false;
    let stops = ParseContext::Variable.recovery_tokens();

    loop {
        let token = p.cursor.peek();
        let kind = token.kind;
        if depth == 0 && (kind == TokenKind::HASH || (name.is_some() && stops.contains(&kind)))
        {
            return Err(p.unexpected(ParseContext::Variable, ErrorCode::E0201));
        }
        match kind {
            TokenKind::EOF => return Err(p.unexpected(ParseContext::Variable, ErrorCode::E0201)),
            TokenKind::R_BRACE if depth == 0 => {
                return Err(p.unexpected(ParseContext::Variable, ErrorCode::E0201));
            }
            TokenKind::SEMICOLON if depth == 0 => {
                p.cursor.advance();
                break;
            }
            TokenKind::L_BRACE | TokenKind::L_BRACKET => {
                if depth == 0 {
                    initializer = true;
                }
                depth += 1;
            }
            TokenKind::L_PAREN => depth += 1,
            TokenKind::R_PAREN | TokenKind::R_BRACKET => depth = depth.saturating_sub(1),
            TokenKind::R_BRACE => {
                depth = depth.saturating_sub(1);
                // A closed block not followed by `;`, `,` or `=` was a body,
                // not an initializer: the declaration ends at its `}`
                if depth == 0 && !continues_after_initializer(p.cursor) {
                    p.cursor.advance();
                    break;
                }
            }
            TokenKind::EQ | TokenKind::COLON if depth == 0 => initializer = true,
            TokenKind::IDENT if depth == 0 && !initializer => name = Some(token.text),
            TokenKind::STATIC_KW if depth == 0 => is_static = true,
            TokenKind::INLINE_KW if depth == 0 => is_inline = true,
            TokenKind::CONST_KW | TokenKind::CONSTEXPR_KW if depth == 0 && !initializer => {
                is_const = true;
            }
            _ => {}
        }
        p.cursor.advance();
    }

    let end = p.cursor.position();
    let Some(name) = name else {
        return Err(SyntaxError::new(
            "expected a name in declaration",
            p.cursor.token_at(decl_start).range(),
            ErrorCode::E0301,
        ));
    };

    let signature = prefix.prepend(p.substituted_between(decl_start, end).trim_end());
    let kind = if p.in_class_scope() {
        EntityKind::Field
    } else {
        EntityKind::Variable
    };
    let mut entity = Entity::new(kind, name)
        .with_signature(signature)
        .with_range(p.span_between(prefix.start, end - 1));
    entity.is_static = is_static;
    entity.is_const = is_const;
    entity.is_inline = is_inline;
    prefix.apply(&mut entity);
    p.emit(entity);
    Ok(())
}

/// The cursor is on the `}` closing a depth-0 block
fn continues_after_initializer(cursor: TokenCursor<'_, '_>) -> bool {
    let mut probe = cursor;
    probe.advance();
    matches!(
        probe.next_significant(),
        TokenKind::SEMICOLON | TokenKind::COMMA | TokenKind::EQ
    )
}
