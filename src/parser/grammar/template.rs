//! Template clauses
//!
//! `template <...>` is captured verbatim and handed, as a signature prefix,
//! to the routine for the declaration that follows.

use super::function::{looks_like_function, parse_declaration, parse_variable};
use super::{DECL_SPECIFIERS, DeclPrefix, parse_class, parse_using, skip_angle_brackets};
use crate::parser::errors::{ErrorCode, ParseContext, RelatedInfo, SyntaxError};
use crate::parser::parser::{ParseResult, Parser};
use crate::parser::token_kind::TokenKind;

/// One or more `template <...>` clauses in front of a declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TemplateClause {
    /// Normalized text, e.g. `template <typename T>`
    pub text: String,
    pub params: Vec<String>,
}

pub(crate) fn parse_template(p: &mut Parser<'_, '_>) -> ParseResult<()> {
    let start = p.cursor.position();
    let mut clauses = Vec::new();
    let mut params = Vec::new();

    while p.cursor.at(TokenKind::TEMPLATE_KW) {
        let keyword = p.cursor.advance();
        p.cursor.skip_whitespace_and_newlines();
        if !p.cursor.at(TokenKind::LT) {
            return Err(p
                .unexpected(ParseContext::Template, ErrorCode::E0302)
                .with_related(RelatedInfo::new("template keyword here", keyword.range())));
        }
        let open = p.cursor.position();
        let mut probe = p.cursor;
        if !skip_angle_brackets(&mut probe) {
            return Err(SyntaxError::new(
                "unclosed '<' in template parameter list",
                p.cursor.token_at(open).range(),
                ErrorCode::E0204,
            ));
        }
        p.cursor = probe;
        let list = p.text_between(open, p.cursor.position());
        params.extend(split_template_params(list));
        clauses.push(format!("template {list}"));
        p.cursor.skip_trivia();
    }

    let clause = TemplateClause {
        text: clauses.join(" "),
        params,
    };
    let prefix = DeclPrefix {
        start,
        text: clause.text.clone(),
        template: Some(clause),
    };

    match p.cursor.kind() {
        TokenKind::CLASS_KW | TokenKind::STRUCT_KW | TokenKind::UNION_KW => parse_class(p, prefix),
        TokenKind::USING_KW => parse_using(p, prefix),
        _ if looks_like_function(p.cursor) => parse_declaration(p, prefix),
        kind if kind == TokenKind::IDENT
            || kind == TokenKind::TYPENAME_KW
            || kind.is_builtin_type()
            || DECL_SPECIFIERS.contains(&kind) =>
        {
            parse_variable(p, prefix)
        }
        _ => Err(p.unexpected(ParseContext::Template, ErrorCode::E0303)),
    }
}

/// Split `<typename T, int N = f(1, 2)>` at top-level commas
pub(crate) fn split_template_params(list: &str) -> Vec<String> {
    let inner = list.trim();
    let inner = inner.strip_prefix('<').unwrap_or(inner);
    let inner = inner.strip_suffix('>').unwrap_or(inner);

    let mut params = Vec::new();
    let mut depth = 0i32;
    let mut current = String::new();
    for c in inner.chars() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                params.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    params.push(current);
    params
        .into_iter()
        .map(|param| param.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|param| !param.is_empty())
        .collect()
}
