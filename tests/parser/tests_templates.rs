//! Template clauses in front of classes, functions, aliases and variables.

use cppscope::EntityKind;
use rstest::rstest;

use crate::helpers::entity_assertions::{children_of, get_entity, parse_clean};
use crate::helpers::source_fixtures::KITCHEN_SINK;

#[test]
fn test_template_forward_declaration() {
    let tree = parse_clean("template <typename T> class C;");
    let c = get_entity(&tree, "C");
    assert_eq!(c.kind, EntityKind::Class);
    assert!(c.is_template);
    assert!(c.children().is_empty());
    assert_eq!(c.template_params, vec!["typename T"]);
    assert_eq!(c.signature, "template <typename T> class C");
}

#[test]
fn test_template_class_with_members() {
    let tree = parse_clean(KITCHEN_SINK);
    let grid = get_entity(&tree, "geo::Grid");
    assert!(grid.is_template);
    assert_eq!(grid.signature, "template <typename T> class Grid {");

    let kinds: Vec<_> = children_of(&tree, "geo::Grid").iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::AccessSpecifier,
            EntityKind::Constructor,
            EntityKind::Destructor,
            EntityKind::Method,
            EntityKind::Method,
            EntityKind::AccessSpecifier,
            EntityKind::Field,
            EntityKind::Field,
        ]
    );
    assert!(get_entity(&tree, "geo::Grid::identity").is_static);
    assert!(!get_entity(&tree, "geo::Grid::at").is_template);
}

#[test]
fn test_template_range_covers_clause() {
    let source = "template <typename T>\nT max_of(T a, T b);";
    let tree = parse_clean(source);
    let f = get_entity(&tree, "max_of");
    assert_eq!(f.kind, EntityKind::Function);
    assert!(f.is_template);
    assert_eq!(f.signature, "template <typename T> T max_of(T a, T b);");
    assert_eq!(f.source_range.slice(source), source);
}

#[rstest]
#[case("template <typename K, typename V = std::map<K, int>> struct Cache;", "Cache", &["typename K", "typename V = std::map<K, int>"])]
#[case("template <int N> using Array = std::array<int, N>;", "Array", &["int N"])]
#[case("template <class T> constexpr T zero = T(0);", "zero", &["class T"])]
#[case("template <> struct Hash<int> { };", "Hash", &[])]
fn test_template_params(#[case] source: &str, #[case] name: &str, #[case] params: &[&str]) {
    let tree = parse_clean(source);
    let entity = get_entity(&tree, name);
    assert!(entity.is_template, "in {}", source);
    assert_eq!(entity.template_params, params);
}

#[test]
fn test_specialization_signature() {
    let tree = parse_clean("template <> struct Hash<int> { };");
    assert_eq!(get_entity(&tree, "Hash").signature, "template <> struct Hash<int> {");
}

#[test]
fn test_nested_template_clauses() {
    let source = "template <typename T>\ntemplate <typename U>\nvoid Box<T>::assign(const U& value);";
    let tree = parse_clean(source);
    let assign = get_entity(&tree, "assign");
    assert_eq!(assign.template_params, vec!["typename T", "typename U"]);
    assert!(assign.signature.starts_with("template <typename T> template <typename U> void"));
}

#[test]
fn test_variable_template_kind() {
    let tree = parse_clean("template <class T> constexpr T zero = T(0);");
    let zero = get_entity(&tree, "zero");
    assert_eq!(zero.kind, EntityKind::Variable);
    assert!(zero.is_const);
}

#[rstest]
#[case(
    "template <typename T>\nstd::vector<T> Box<T>::items() const { return v; }\nint after;",
    "items",
    "template <typename T> std::vector<T> Box<T>::items() const"
)]
#[case(
    "std::map<int, int> Registry<int>::table() { return {}; }\nint after;",
    "table",
    "std::map<int, int> Registry<int>::table()"
)]
fn test_out_of_line_member_with_template_arguments(
    #[case] source: &str,
    #[case] name: &str,
    #[case] signature: &str,
) {
    let tree = parse_clean(source);
    let member = get_entity(&tree, name);
    assert_eq!(member.kind, EntityKind::Function);
    assert_eq!(member.signature, signature);
    assert!(member.original_text.starts_with('{'));
    assert_eq!(get_entity(&tree, "after").kind, EntityKind::Variable);
}
