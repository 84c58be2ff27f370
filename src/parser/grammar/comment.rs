//! Comments
//!
//! Doxygen comments are held as pending documentation for the next entity.
//! Plain comments become `Comment` entities of their own.

use crate::doxygen::parse_doxygen_comment;
use crate::entity::{Entity, EntityKind};
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;

pub(crate) fn parse_comment(p: &mut Parser<'_, '_>) {
    let start = p.cursor.position();
    let token = p.cursor.advance();

    if token.kind == TokenKind::DOXYGEN_COMMENT {
        let mut raw = token.text.to_string();
        let mut last = start;
        if p.merge_line_comments {
            if let Some(marker) = line_doc_marker(token.text) {
                while let Some(next) = next_line_doc(p, marker) {
                    raw.push('\n');
                    raw.push_str(p.cursor.token_at(next).text);
                    last = next;
                }
            }
        }
        let comment = parse_doxygen_comment(&raw).map(|mut comment| {
            comment.span = Some(p.span_between(start, last));
            comment
        });
        p.set_pending_comment(comment);
        return;
    }

    let entity = Entity::new(EntityKind::Comment, comment_name(token.text))
        .with_signature(token.text)
        .with_range(p.span_between(start, start));
    p.emit(entity);
}

fn line_doc_marker(text: &str) -> Option<&'static str> {
    ["///", "//!"].into_iter().find(|marker| text.starts_with(marker))
}

/// If the next line holds only another doc line with the same marker,
/// consume through it and return its index
fn next_line_doc(p: &mut Parser<'_, '_>, marker: &str) -> Option<usize> {
    let mut probe = p.cursor;
    probe.skip_whitespace();
    if !probe.eat(TokenKind::NEWLINE) {
        return None;
    }
    probe.skip_whitespace();
    let token = probe.peek();
    if token.kind != TokenKind::DOXYGEN_COMMENT || !token.text.starts_with(marker) {
        return None;
    }
    let idx = probe.position();
    probe.advance();
    p.cursor = probe;
    Some(idx)
}

/// First three words of the comment text, or `comment`. Colons at either
/// end are dropped so the name never reads as a path separator.
fn comment_name(text: &str) -> String {
    let body = text
        .strip_prefix("//")
        .or_else(|| text.strip_prefix("/*"))
        .unwrap_or(text);
    let body = body.strip_suffix("*/").unwrap_or(body);
    let words: Vec<&str> = body
        .split_whitespace()
        .filter(|word| !word.chars().all(|c| c == '*' || c == '/'))
        .take(3)
        .collect();
    let name = words.join(" ");
    let name = name.trim_matches(':').trim();
    if name.is_empty() {
        "comment".to_string()
    } else {
        name.to_string()
    }
}
