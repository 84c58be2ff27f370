//! The tokenizer terminates on adversarial input and reports what it cut.

use cppscope::parser::{LexErrorKind, LexerLimits, TokenKind, decode_source, tokenize, tokenize_with};
use cppscope::{HeaderParser, ParseError, ParseOptions};
use rstest::rstest;

fn first_error(input: &str) -> Option<LexErrorKind> {
    tokenize(input).iter().find_map(|t| t.error)
}

fn assert_terminates(input: &str) {
    let tokens = tokenize(input);
    assert!(!tokens.is_empty());
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::EOF).count(), 1);
}

#[test]
fn test_long_whitespace_run() {
    let input = " ".repeat(50_000);
    assert_terminates(&input);
    assert_eq!(first_error(&input), Some(LexErrorKind::ExcessiveWhitespace));
}

#[test]
fn test_unterminated_long_string() {
    let input = format!("\"{}", "a".repeat(200_000));
    assert_terminates(&input);
    assert!(first_error(&input).is_some());
}

#[test]
fn test_unterminated_long_block_comment() {
    let input = format!("/* {}", "a".repeat(200_000));
    assert_terminates(&input);
    assert!(matches!(
        first_error(&input),
        Some(LexErrorKind::CommentTooLong | LexErrorKind::UnterminatedBlockComment)
    ));
}

#[test]
fn test_terminated_but_oversized_literals() {
    assert_eq!(
        first_error(&format!("\"{}\"", "a".repeat(200_000))),
        Some(LexErrorKind::LiteralTooLong)
    );
    assert_eq!(
        first_error(&format!("/* {} */", "a".repeat(200_000))),
        Some(LexErrorKind::CommentTooLong)
    );
    assert_eq!(
        first_error(&format!("{} = 5;", "a".repeat(2_000))),
        Some(LexErrorKind::IdentifierTooLong)
    );
}

#[rstest]
#[case(&[0xff, 0xfe, 0xfd])]
#[case(&[b'i', b'n', b't', 0xc3, 0x28, b';'])]
#[case(&[0x80; 64])]
#[case(&[0xf0, 0x9f, 0x92])]
fn test_invalid_utf8_terminates(#[case] bytes: &[u8]) {
    let text = decode_source(bytes);
    assert_terminates(&text);
}

#[test]
fn test_parse_bytes_with_invalid_utf8() {
    let parser = HeaderParser::default();
    let mut bytes = b"int ok;\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    // U+FFFD is not a valid token start
    let result = parser.parse_bytes("bytes.h", &bytes);
    assert!(matches!(result, Err(ParseError::Lex { .. })));

    let tree = parser.parse_bytes("ok.h", b"int ok;").expect("valid bytes parse");
    assert!(tree.find_entity("ok").is_some());
}

#[test]
fn test_token_limit_stops_scan() {
    let limits = LexerLimits::default().with_max_tokens(10);
    let tokens = tokenize_with("a b c d e f g h i j k l m n o p q r s t", limits);
    assert!(tokens.len() <= 12, "got {} tokens", tokens.len());
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));
    assert!(tokens.iter().any(|t| t.error == Some(LexErrorKind::TokenLimit)));
}

#[test]
fn test_custom_limits_flow_through_options() {
    let options = ParseOptions::default()
        .with_limits(LexerLimits::default().with_max_identifier_len(4));
    let result = HeaderParser::new(options).parse("limits.h", "int counter;");
    match result {
        Err(ParseError::Lex { kind, .. }) => assert_eq!(kind, LexErrorKind::IdentifierTooLong),
        other => panic!("expected identifier limit, got {:?}", other),
    }
}

#[test]
fn test_clean_input_has_no_error_tokens() {
    let tokens = tokenize("namespace a { class B : public C<int> { int x = 0x1F'FF; }; }");
    assert!(tokens.iter().all(|t| !t.is_error()));
}
