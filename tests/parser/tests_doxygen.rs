//! Attaching doxygen comments to the entity that follows them.

use cppscope::{EntityId, EntityKind, ParseOptions, parse_with_options};

use crate::helpers::entity_assertions::{entities_of_kind, get_entity, parse_clean};
use crate::helpers::source_fixtures::{DOCUMENTED, KITCHEN_SINK};

#[test]
fn test_comment_attaches_to_next_entity_only() {
    let tree = parse_clean(DOCUMENTED);
    let add = get_entity(&tree, "add");
    let comment = add.comment.as_ref().expect("add is documented");
    assert_eq!(comment.brief.as_deref(), Some("Adds two numbers."));
    assert_eq!(comment.detailed.as_deref(), Some("Overflow is not checked."));
    assert_eq!(comment.param("a"), Some("first operand"));
    assert_eq!(comment.param("b"), Some("second operand"));
    assert_eq!(comment.returns.as_deref(), Some("the sum"));
    assert!(!get_entity(&tree, "subtract").has_doxygen_comment());
}

#[test]
fn test_comment_span_and_raw_text() {
    let tree = parse_clean(DOCUMENTED);
    let comment = get_entity(&tree, "add").comment.clone().expect("documented");
    let span = comment.span.expect("span recorded");
    assert_eq!(span.start.line, 2);
    assert_eq!(span.slice(DOCUMENTED), comment.raw);
    assert!(comment.raw.starts_with("/**"));
    assert!(comment.raw.ends_with("*/"));
}

#[test]
fn test_doc_comment_on_struct_in_namespace() {
    let tree = parse_clean(KITCHEN_SINK);
    let point = get_entity(&tree, "geo::Point");
    assert_eq!(
        point.comment.as_ref().and_then(|c| c.brief.as_deref()),
        Some("A point in the plane")
    );
    assert!(!get_entity(&tree, "geo::Point::x").has_doxygen_comment());
}

#[test]
fn test_consecutive_line_comments_merge() {
    let source = "/// Opens the file.\n/// @param path where to look\n/// @return true on success\nbool open(const char* path);";
    let tree = parse_clean(source);
    let comment = get_entity(&tree, "open").comment.clone().expect("documented");
    assert_eq!(comment.brief.as_deref(), Some("Opens the file."));
    assert_eq!(comment.param("path"), Some("where to look"));
    assert_eq!(comment.returns.as_deref(), Some("true on success"));
    assert_eq!(comment.span.map(|s| s.end.line), Some(3));
}

#[test]
fn test_line_comments_do_not_merge_across_blank_line() {
    let source = "/// First block.\n\n/// Second block.\nvoid f();";
    let tree = parse_clean(source);
    let comment = get_entity(&tree, "f").comment.clone().expect("documented");
    assert_eq!(comment.brief.as_deref(), Some("Second block."));
}

#[test]
fn test_merging_can_be_disabled() {
    let source = "/// First line.\n/// Second line.\nvoid f();";
    let options = ParseOptions::default().with_merge_line_comments(false);
    let tree = parse_with_options("test.h", source, &options).expect("parses");
    let comment = tree.find_entity("f").and_then(|f| f.comment.clone()).expect("documented");
    assert_eq!(comment.brief.as_deref(), Some("Second line."));
}

#[test]
fn test_later_comment_replaces_pending() {
    let source = "/** Dropped. */\n/** Kept. */\nvoid f();";
    let tree = parse_clean(source);
    let comment = get_entity(&tree, "f").comment.clone().expect("documented");
    assert_eq!(comment.brief.as_deref(), Some("Kept."));
}

#[test]
fn test_trailing_comment_becomes_file_comment() {
    let tree = parse_clean("void f();\n/** Orphaned notes. */\n");
    let comments = entities_of_kind(&tree, EntityKind::Comment);
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].name, "file-comment");
    assert_eq!(
        comments[0].comment.as_ref().and_then(|c| c.brief.as_deref()),
        Some("Orphaned notes.")
    );
    assert_eq!(comments[0].parent(), Some(EntityId::ROOT));
}

#[test]
fn test_set_comment_after_parse() {
    let mut tree = parse_clean("void f();");
    let id = tree.find_by_path("f").expect("f exists");
    assert!(!tree.has_doxygen_comment(id));
    let comment = cppscope::parse_doxygen_comment("/** Generated. */");
    assert!(tree.set_comment(id, comment));
    assert!(tree.has_doxygen_comment(id));
    assert_eq!(
        tree[id].comment.as_ref().and_then(|c| c.brief.as_deref()),
        Some("Generated.")
    );
}
