//! Functions, variables, enums, typedefs and using declarations.

use cppscope::EntityKind;
use rstest::rstest;

use crate::helpers::entity_assertions::{
    assert_entity_kind, entities_of_kind, get_entity, parse_clean,
};
use crate::helpers::source_fixtures::SIMPLE_CLASS;

// ============================================================================
// Functions
// ============================================================================

#[test]
fn test_body_excluded_from_signature() {
    let tree = parse_clean("class A { int get() const { return x; } int x; };");
    let get = get_entity(&tree, "A::get");
    assert_eq!(get.signature, "int get() const");
    assert!(!get.signature.contains("return"));
    assert_eq!(get.original_text, "{ return x; }");
    assert!(get.is_const);
    let body = get.body_range.expect("body range");
    assert_eq!(body.slice(tree.source()), "{ return x; }");
}

#[test]
fn test_declaration_keeps_semicolon() {
    let tree = parse_clean("void g();");
    let g = get_entity(&tree, "g");
    assert_eq!(g.kind, EntityKind::Function);
    assert_eq!(g.signature, "void g();");
    assert!(g.original_text.is_empty());
    assert!(g.body_range.is_none());
}

#[test]
fn test_header_and_source_ranges() {
    let source = "inline int twice(int v) {\n    return v * 2;\n}\n";
    let tree = parse_clean(source);
    let twice = get_entity(&tree, "twice");
    assert_eq!(twice.header_range.slice(source), "inline int twice(int v)");
    assert_eq!(twice.source_range.start.line, 1);
    assert_eq!(twice.source_range.end.line, 3);
    assert_eq!(twice.source_range.slice(source), source.trim_end());
    assert!(twice.is_inline);
}

#[rstest]
#[case("void f(const char* s);", false)]
#[case("void f() const;", true)]
#[case("const char* name();", false)]
#[case("int get() const { return 1; }", true)]
fn test_const_qualifier(#[case] source: &str, #[case] expected: bool) {
    let wrapped = format!("struct S {{ {} }};", source);
    let tree = parse_clean(&wrapped);
    let method = tree
        .entities()
        .map(|(_, e)| e)
        .find(|e| e.kind == EntityKind::Method)
        .expect("method");
    assert_eq!(method.is_const, expected, "in {}", source);
}

#[rstest]
#[case("static int count();", "count")]
#[case("std::vector<int> values() const;", "values")]
#[case("unsigned long long size();", "size")]
#[case("[[nodiscard]] bool empty();", "empty")]
#[case("extern \"C\" int c_entry(void);", "c_entry")]
#[case("const std::map<std::string, int>& table();", "table")]
fn test_function_names(#[case] source: &str, #[case] name: &str) {
    let tree = parse_clean(source);
    assert_entity_kind(&tree, name, EntityKind::Function);
}

#[rstest]
#[case("bool operator==(const A& o) const;", "operator==")]
#[case("void operator()(int);", "operator()")]
#[case("A& operator+=(const A& o);", "operator+=")]
#[case("operator bool() const;", "operator bool")]
fn test_operator_names(#[case] source: &str, #[case] name: &str) {
    let tree = parse_clean(&format!("struct A {{ {} }};", source));
    let methods = entities_of_kind(&tree, EntityKind::Method);
    assert_eq!(methods.len(), 1, "in {}", source);
    assert_eq!(methods[0].name, name);
}

#[test]
fn test_function_flags() {
    let tree = parse_clean(
        "struct S { static void a(); virtual void b() = 0; inline void c() {} explicit S(int); };",
    );
    assert!(get_entity(&tree, "S::a").is_static);
    assert!(get_entity(&tree, "S::b").is_virtual);
    assert!(get_entity(&tree, "S::b").is_pure);
    assert!(get_entity(&tree, "S::c").is_inline);
    assert_entity_kind(&tree, "S::S", EntityKind::Constructor);
}

#[test]
fn test_function_pointer_variable() {
    let tree = parse_clean("void (*on_event)(int code);");
    assert_entity_kind(&tree, "on_event", EntityKind::Variable);
}

#[rstest]
#[case("MyType (*fp)(int);", "fp", EntityKind::Variable)]
#[case("Status (&handler)(const Event&);", "handler", EntityKind::Variable)]
#[case("struct S { Handler (*on_close)(S& self); };", "S::on_close", EntityKind::Field)]
fn test_function_pointer_with_named_return_type(
    #[case] source: &str,
    #[case] path: &str,
    #[case] kind: EntityKind,
) {
    let tree = parse_clean(source);
    assert_entity_kind(&tree, path, kind);
    assert!(entities_of_kind(&tree, EntityKind::Function).is_empty());
}

// ============================================================================
// Variables and fields
// ============================================================================

#[test]
fn test_field_inside_class() {
    let tree = parse_clean(SIMPLE_CLASS);
    let width = get_entity(&tree, "Widget::width");
    assert_eq!(width.kind, EntityKind::Field);
    assert_eq!(width.signature, "int width;");
}

#[rstest]
#[case("int x;", "x")]
#[case("static const int MAX_ITEMS = 10;", "MAX_ITEMS")]
#[case("int values[4] = {1, 2, 3, 4};", "values")]
#[case("std::map<int, int> table;", "table")]
#[case("extern volatile unsigned ticks;", "ticks")]
#[case("struct stat st;", "st")]
fn test_variable_names(#[case] source: &str, #[case] name: &str) {
    let tree = parse_clean(source);
    assert_entity_kind(&tree, name, EntityKind::Variable);
}

#[test]
fn test_variable_flags() {
    let tree = parse_clean("static constexpr double PI = 3.14159;\nint plain;");
    let pi = get_entity(&tree, "PI");
    assert!(pi.is_static);
    assert!(pi.is_const);
    assert_eq!(pi.signature, "static constexpr double PI = 3.14159;");
    assert!(!get_entity(&tree, "plain").is_const);
}

#[test]
fn test_unrecognized_body_ends_the_declaration() {
    let tree = parse_clean("A B C D E F build() { }\nint after;");
    let build = get_entity(&tree, "build");
    assert_eq!(build.signature, "A B C D E F build() { }");
    assert_entity_kind(&tree, "after", EntityKind::Variable);
}

#[test]
fn test_brace_initializers_keep_going() {
    let tree = parse_clean("int a{1}, b{2};\nint values[2] = {1, 2};");
    assert_eq!(get_entity(&tree, "a").signature, "int a{1}, b{2};");
    assert_eq!(get_entity(&tree, "values").signature, "int values[2] = {1, 2};");
}

#[test]
fn test_bit_field() {
    let tree = parse_clean("struct Flags { unsigned ready : 1; unsigned busy : 1; };");
    assert_entity_kind(&tree, "Flags::ready", EntityKind::Field);
    assert_entity_kind(&tree, "Flags::busy", EntityKind::Field);
}

// ============================================================================
// Enums
// ============================================================================

#[rstest]
#[case("enum Color { Red, Green };", "Color", "enum Color { Red, Green };")]
#[case("enum class Axis : unsigned char { X, Y };", "Axis", "enum class Axis : unsigned char { X, Y };")]
#[case("enum struct Mode;", "Mode", "enum struct Mode;")]
fn test_enum_signature(#[case] source: &str, #[case] name: &str, #[case] signature: &str) {
    let tree = parse_clean(source);
    let entity = get_entity(&tree, name);
    assert_eq!(entity.kind, EntityKind::Enum);
    assert_eq!(entity.signature, signature);
    assert!(entity.children().is_empty());
}

#[test]
fn test_enum_body_is_not_a_scope() {
    let tree = parse_clean("enum E { A = 1, B = A << 1 };\nint after;");
    assert_entity_kind(&tree, "after", EntityKind::Variable);
    assert!(tree.find_entity("E::A").is_none());
}

// ============================================================================
// Typedef and using
// ============================================================================

#[rstest]
#[case("typedef unsigned int uint;", "uint")]
#[case("typedef void (*Callback)(int, void*);", "Callback")]
#[case("typedef struct { int x; int y; } Point;", "Point")]
#[case("typedef std::map<std::string, int> Table;", "Table")]
fn test_typedef_names(#[case] source: &str, #[case] name: &str) {
    let tree = parse_clean(source);
    let typedef = get_entity(&tree, name);
    assert_eq!(typedef.kind, EntityKind::Typedef);
    assert_eq!(typedef.signature, source);
}

#[rstest]
#[case("using Id = std::uint64_t;", "Id")]
#[case("using namespace std::chrono;", "std::chrono")]
#[case("using Base::method;", "method")]
fn test_using_names(#[case] source: &str, #[case] name: &str) {
    let tree = parse_clean(source);
    let entities = entities_of_kind(&tree, EntityKind::Using);
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].name, name);
    assert_eq!(entities[0].signature, source);
}

// ============================================================================
// Comments and directives
// ============================================================================

#[test]
fn test_plain_comment_entity() {
    let tree = parse_clean("// Render the scene graph now please\nvoid render();");
    let comments = entities_of_kind(&tree, EntityKind::Comment);
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].name, "Render the scene");
    assert_eq!(comments[0].signature, "// Render the scene graph now please");
    assert!(!get_entity(&tree, "render").has_doxygen_comment());
}

#[test]
fn test_preprocessor_directives() {
    let tree = parse_clean("#pragma once\n#include <vector>\n#if defined(A) && \\\n    B\n#endif\n");
    let names: Vec<_> = entities_of_kind(&tree, EntityKind::Preprocessor)
        .into_iter()
        .map(|e| e.name.to_string())
        .collect();
    assert_eq!(
        names,
        vec!["#pragma once", "#include <vector>", "#if defined(A) && \\\n    B", "#endif"]
    );
}

#[test]
fn test_directive_trailing_comment_is_separate() {
    let tree = parse_clean("#endif // GUARD_H\n");
    assert_eq!(entities_of_kind(&tree, EntityKind::Preprocessor)[0].name, "#endif");
    assert_eq!(entities_of_kind(&tree, EntityKind::Comment)[0].name, "GUARD_H");
}
