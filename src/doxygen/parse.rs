//! Doxygen comment parsing
//!
//! Turns the raw text of a `/** */`, `/*! */`, `///` or `//!` comment into a
//! [`DoxygenComment`]. Parsing never fails: text that yields no content
//! produces `None`.

use super::comment::DoxygenComment;

/// Parse a raw doxygen comment. Consecutive `///` lines may be passed as one
/// newline-separated string.
pub fn parse_doxygen_comment(raw: &str) -> Option<DoxygenComment> {
    if raw.trim().is_empty() {
        return None;
    }

    let lines: Vec<&str> = raw.lines().map(clean_line).filter(|l| !l.is_empty()).collect();
    if lines.is_empty() {
        return None;
    }

    let mut doc = DoxygenComment {
        raw: raw.to_string(),
        ..DoxygenComment::default()
    };

    let mut open_tag: Option<(&str, Vec<&str>)> = None;
    for line in lines {
        if let Some(tagged) = line.strip_prefix('@').or_else(|| line.strip_prefix('\\')) {
            if let Some((tag, content)) = open_tag.take() {
                apply_tag(&mut doc, tag, &content.join(" "));
            }
            let (tag, rest) = split_first_word(tagged);
            let content = if rest.is_empty() { vec![] } else { vec![rest] };
            open_tag = Some((tag, content));
        } else if let Some((_, content)) = open_tag.as_mut() {
            content.push(line);
        } else if doc.brief.is_none() {
            doc.brief = Some(line.to_string());
        } else {
            match doc.detailed.as_mut() {
                Some(detailed) => {
                    detailed.push(' ');
                    detailed.push_str(line);
                }
                None => doc.detailed = Some(line.to_string()),
            }
        }
    }
    if let Some((tag, content)) = open_tag {
        apply_tag(&mut doc, tag, &content.join(" "));
    }

    Some(doc)
}

/// Strip comment delimiters and `*` decoration from one line
fn clean_line(line: &str) -> &str {
    let mut text = line.trim();
    for delimiter in ["/**", "/*!", "///", "//!"] {
        if let Some(rest) = text.strip_prefix(delimiter) {
            // Trailing member docs: `///<`, `/**<`
            text = rest.strip_prefix('<').unwrap_or(rest);
            break;
        }
    }
    if let Some(rest) = text.strip_suffix("*/") {
        text = rest;
    }
    let text = text.trim();
    text.strip_prefix('*').unwrap_or(text).trim()
}

fn split_first_word(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim()),
        None => (text, ""),
    }
}

fn apply_tag(doc: &mut DoxygenComment, tag: &str, content: &str) {
    let value = || Some(content.to_string());
    match tag {
        "brief" | "short" => doc.brief = value(),
        "details" | "detailed" => doc.detailed = value(),
        tag if tag == "param" || tag.starts_with("param[") => {
            let (name, text) = split_first_word(content);
            if !name.is_empty() {
                doc.params.insert(name.to_string(), text.to_string());
            }
        }
        "return" | "returns" | "result" => doc.returns = value(),
        "throw" | "throws" | "exception" => doc.throws.push(content.to_string()),
        "since" => doc.since = value(),
        "deprecated" => doc.deprecated = value(),
        "see" | "sa" => doc.see.push(content.to_string()),
        "author" => doc.author = value(),
        "version" => doc.version = value(),
        "defgroup" => doc.defgroup = value(),
        "ingroup" => doc.ingroup.push(content.to_string()),
        "addtogroup" => doc.addtogroup = value(),
        "file" => doc.file = value(),
        "namespace" => doc.namespace = value(),
        "class" => doc.class = value(),
        other => {
            doc.custom_tags.insert(other.to_string(), content.to_string());
        }
    }
}
