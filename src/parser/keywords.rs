//! Reserved words recognized by the lexer
//!
//! Keywords are matched by exact identifier text and emitted as dedicated
//! token kinds instead of `IDENT`.

use super::TokenKind;

/// Every keyword the lexer recognizes, in token-kind order
pub const KEYWORDS: &[&str] = &[
    "namespace", "class", "struct", "enum", "union", "typedef", "using", "template",
    "typename", "public", "private", "protected", "static", "virtual", "inline", "const",
    "constexpr", "mutable", "extern", "volatile", "friend", "operator", "explicit", "override",
    "final", "noexcept", "throw", "try", "catch", "if", "else", "switch",
    "case", "default", "for", "while", "do", "break", "continue", "return",
    "goto", "sizeof", "alignof", "decltype", "auto", "void", "bool", "char",
    "short", "int", "long", "float", "double", "signed", "unsigned", "true",
    "false", "nullptr", "this", "new", "delete",
];

/// Look up the keyword kind for an identifier, if it is reserved
pub fn keyword_kind(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "namespace" => TokenKind::NAMESPACE_KW,
        "class" => TokenKind::CLASS_KW,
        "struct" => TokenKind::STRUCT_KW,
        "enum" => TokenKind::ENUM_KW,
        "union" => TokenKind::UNION_KW,
        "typedef" => TokenKind::TYPEDEF_KW,
        "using" => TokenKind::USING_KW,
        "template" => TokenKind::TEMPLATE_KW,
        "typename" => TokenKind::TYPENAME_KW,
        "public" => TokenKind::PUBLIC_KW,
        "private" => TokenKind::PRIVATE_KW,
        "protected" => TokenKind::PROTECTED_KW,
        "static" => TokenKind::STATIC_KW,
        "virtual" => TokenKind::VIRTUAL_KW,
        "inline" => TokenKind::INLINE_KW,
        "const" => TokenKind::CONST_KW,
        "constexpr" => TokenKind::CONSTEXPR_KW,
        "mutable" => TokenKind::MUTABLE_KW,
        "extern" => TokenKind::EXTERN_KW,
        "volatile" => TokenKind::VOLATILE_KW,
        "friend" => TokenKind::FRIEND_KW,
        "operator" => TokenKind::OPERATOR_KW,
        "explicit" => TokenKind::EXPLICIT_KW,
        "override" => TokenKind::OVERRIDE_KW,
        "final" => TokenKind::FINAL_KW,
        "noexcept" => TokenKind::NOEXCEPT_KW,
        "throw" => TokenKind::THROW_KW,
        "try" => TokenKind::TRY_KW,
        "catch" => TokenKind::CATCH_KW,
        "if" => TokenKind::IF_KW,
        "else" => TokenKind::ELSE_KW,
        "switch" => TokenKind::SWITCH_KW,
        "case" => TokenKind::CASE_KW,
        "default" => TokenKind::DEFAULT_KW,
        "for" => TokenKind::FOR_KW,
        "while" => TokenKind::WHILE_KW,
        "do" => TokenKind::DO_KW,
        "break" => TokenKind::BREAK_KW,
        "continue" => TokenKind::CONTINUE_KW,
        "return" => TokenKind::RETURN_KW,
        "goto" => TokenKind::GOTO_KW,
        "sizeof" => TokenKind::SIZEOF_KW,
        "alignof" => TokenKind::ALIGNOF_KW,
        "decltype" => TokenKind::DECLTYPE_KW,
        "auto" => TokenKind::AUTO_KW,
        "void" => TokenKind::VOID_KW,
        "bool" => TokenKind::BOOL_KW,
        "char" => TokenKind::CHAR_KW,
        "short" => TokenKind::SHORT_KW,
        "int" => TokenKind::INT_KW,
        "long" => TokenKind::LONG_KW,
        "float" => TokenKind::FLOAT_KW,
        "double" => TokenKind::DOUBLE_KW,
        "signed" => TokenKind::SIGNED_KW,
        "unsigned" => TokenKind::UNSIGNED_KW,
        "true" => TokenKind::TRUE_KW,
        "false" => TokenKind::FALSE_KW,
        "nullptr" => TokenKind::NULLPTR_KW,
        "this" => TokenKind::THIS_KW,
        "new" => TokenKind::NEW_KW,
        "delete" => TokenKind::DELETE_KW,
        _ => return None,
    };
    Some(kind)
}

pub fn is_keyword(text: &str) -> bool {
    keyword_kind(text).is_some()
}
