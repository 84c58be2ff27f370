//! Recovery from malformed constructs, strict mode and batch parsing.

use cppscope::{
    EntityKind, ErrorCode, HeaderParser, ParseError, ParseOptions, RecoveryPolicy, Severity,
    parse_many, parse_with_options,
};
use rstest::rstest;

use crate::helpers::entity_assertions::{assert_entity_kind, get_entity, parse_recovered};

#[test]
fn test_template_failure_is_recorded() {
    let tree = parse_recovered("template class Foo;\nint x;");
    let diagnostics = tree.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E0302);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_entity_kind(&tree, "Foo", EntityKind::Class);
    assert_entity_kind(&tree, "x", EntityKind::Variable);
}

#[test]
fn test_strict_mode_aborts() {
    let options = ParseOptions::default().strict();
    let result = parse_with_options("bad.h", "template class Foo;\nint x;", &options);
    match result {
        Err(ParseError::Syntax { file, error }) => {
            assert_eq!(file, "bad.h");
            assert_eq!(error.code, ErrorCode::E0302);
        }
        other => panic!("expected a strict syntax failure, got {:?}", other),
    }
}

#[test]
fn test_strict_mode_accepts_clean_input() {
    let options = ParseOptions::default().with_recovery(RecoveryPolicy::Strict);
    let tree = parse_with_options("ok.h", "class A { void f(); };", &options).expect("parses");
    assert_entity_kind(&tree, "A::f", EntityKind::Method);
}

#[rstest]
#[case("public int x;\nint y;", ErrorCode::E0206, "y")]
#[case("typedef int;\nint y;", ErrorCode::E0301, "y")]
#[case("namespace ;\nint y;", ErrorCode::E0501, "y")]
#[case("using ;\nint y;", ErrorCode::E0502, "y")]
#[case("template <typename T\nstruct Y;", ErrorCode::E0204, "Y")]
#[case("template int f();\nint y;", ErrorCode::E0302, "y")]
fn test_recovered_failures(#[case] source: &str, #[case] code: ErrorCode, #[case] next: &str) {
    let tree = parse_recovered(source);
    let codes: Vec<_> = tree.diagnostics().iter().map(|d| d.code).collect();
    assert!(codes.contains(&code), "expected {:?} in {:?} for {}", code, codes, source);
    assert!(tree.find_entity(next).is_some(), "'{}' lost after recovery in {}", next, source);
}

#[test]
fn test_macro_without_semicolon_does_not_swallow_members() {
    let source = "class Widget {\n    Q_OBJECT\npublic:\n    void show();\n};";
    let tree = parse_recovered(source);
    assert_eq!(tree.diagnostics().len(), 1);
    assert_entity_kind(&tree, "Widget::show", EntityKind::Method);
    assert_eq!(get_entity(&tree, "Widget::show").access, cppscope::AccessLevel::Public);
}

#[test]
fn test_failed_body_does_not_close_scope() {
    let source = "namespace n {\n= { int a; };\nint after;\n}";
    let tree = parse_recovered(source);
    assert!(!tree.diagnostics().is_empty());
    assert_entity_kind(&tree, "n::after", EntityKind::Variable);
}

#[test]
fn test_unclosed_body_reaches_end() {
    let tree = parse_recovered("void f() {\n  int x;\n");
    let codes: Vec<_> = tree.diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0202]);
    assert!(tree.diagnostics()[0].has_hint());
}

#[test]
fn test_malformed_define_is_a_warning() {
    let tree = parse_recovered("#define\nint y;");
    assert_eq!(tree.diagnostics().len(), 1);
    assert_eq!(tree.diagnostics()[0].severity, Severity::Warning);
    assert_eq!(tree.diagnostics()[0].code, ErrorCode::E0601);
    assert!(tree.diagnostics()[0].message.contains("in preprocessor directive"));
    assert_entity_kind(&tree, "#define", EntityKind::Preprocessor);
}

#[test]
fn test_lexer_errors_are_fatal() {
    let result = cppscope::parse("bad.h", "int x = @;");
    match result {
        Err(ParseError::Lex { kind, line, column, count, .. }) => {
            assert_eq!(kind, cppscope::LexErrorKind::UnexpectedCharacter);
            assert_eq!((line, column), (1, 9));
            assert_eq!(count, 1);
        }
        other => panic!("expected a lexer failure, got {:?}", other),
    }
}

#[test]
fn test_parse_error_display() {
    let err = cppscope::parse("bad.h", "int x = @;").expect_err("lexer error");
    let text = err.to_string();
    assert!(text.contains("1:9"), "{}", text);
    assert_eq!(err.code(), ErrorCode::E0101);
}

// ============================================================================
// Batch parsing
// ============================================================================

#[test]
fn test_parse_many_keeps_order() {
    let files = vec![
        ("a.h", "class A {};"),
        ("b.h", "int x = @;"),
        ("c.h", "namespace c { void f(); }"),
    ];
    let results = parse_many(&files);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().map(|t| t.filename()), Ok("a.h"));
    assert!(matches!(results[1], Err(ParseError::Lex { .. })));
    let c = results[2].as_ref().expect("c.h parses");
    assert!(c.find_entity("c::f").is_some());
}

#[test]
fn test_header_parser_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HeaderParser>();
    assert_send_sync::<cppscope::ScopeTree>();

    let parser = HeaderParser::new(ParseOptions::default().strict());
    let owned: Vec<(String, String)> = (0..8)
        .map(|i| (format!("f{i}.h"), format!("void f{i}();")))
        .collect();
    let results = parser.parse_many(&owned);
    for (i, result) in results.iter().enumerate() {
        let tree = result.as_ref().expect("parses");
        assert!(tree.find_entity(&format!("f{i}")).is_some());
    }
}
