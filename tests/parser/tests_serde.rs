//! JSON round trip of a parsed tree (requires the `serde` feature).

use cppscope::{ParseOptions, RecoveryPolicy, ScopeTree};

use crate::helpers::entity_assertions::parse_clean;
use crate::helpers::source_fixtures::{DOCUMENTED, KITCHEN_SINK};

#[test]
fn test_tree_serializes_and_restores() {
    let tree = parse_clean(KITCHEN_SINK);
    let json = serde_json::to_string(&tree).expect("serializes");
    let restored: ScopeTree = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(restored.len(), tree.len());
    assert_eq!(restored.filename(), tree.filename());
    let grid = restored.find_entity("geo::Grid").expect("grid survives");
    assert!(grid.is_template);
}

#[test]
fn test_comment_fields_in_json() {
    let tree = parse_clean(DOCUMENTED);
    let add = tree.find_entity("add").expect("add");
    let value = serde_json::to_value(add).expect("serializes");
    assert_eq!(value["kind"], "Function");
    assert_eq!(value["comment"]["brief"], "Adds two numbers.");
    assert_eq!(value["comment"]["params"]["a"], "first operand");
}

#[test]
fn test_options_round_trip() {
    let options = ParseOptions::default()
        .with_recovery(RecoveryPolicy::Strict)
        .with_macro("API", "");
    let json = serde_json::to_string(&options).expect("serializes");
    let restored: ParseOptions = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(restored.recovery, RecoveryPolicy::Strict);
    assert_eq!(restored.predefined_macros, options.predefined_macros);
}
