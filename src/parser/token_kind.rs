//! Token kinds produced by the lexer
//!
//! Every token the lexer can emit is a variant here: trivia, literals,
//! punctuation, keywords, and the two sentinels `ERROR` and `EOF`.

/// All token kinds in C++ header source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA (whitespace and comments)
    // =========================================================================
    WHITESPACE = 0,
    NEWLINE,
    LINE_COMMENT,       // // ...
    BLOCK_COMMENT,      // /* ... */
    DOXYGEN_COMMENT,    // /// ... //! ... /** ... */ /*! ... */

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,
    NUMBER,             // 42, 3.14f, 0x1Fu, 1'000
    STRING,             // "hello"
    CHAR,               // 'c'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,            // (
    R_PAREN,            // )
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    SEMICOLON,          // ;
    COLON,              // :
    COLON_COLON,        // ::
    COMMA,              // ,
    DOT,                // .
    ARROW,              // ->
    EQ,                 // =
    EQ_EQ,              // ==
    BANG_EQ,            // !=
    LT,                 // <
    GT,                 // >
    LT_EQ,              // <=
    GT_EQ,              // >=
    AMP,                // &
    AMP_AMP,            // &&
    PIPE,               // |
    PIPE_PIPE,          // ||
    CARET,              // ^
    TILDE,              // ~
    BANG,               // !
    QUESTION,           // ?
    PLUS,               // +
    MINUS,              // -
    STAR,               // *
    SLASH,              // /
    PERCENT,            // %
    PLUS_PLUS,          // ++
    MINUS_MINUS,        // --
    PLUS_EQ,            // +=
    MINUS_EQ,           // -=
    STAR_EQ,            // *=
    SLASH_EQ,           // /=
    LT_LT,              // <<
    GT_GT,              // >>
    HASH,               // #
    HASH_HASH,          // ##
    BACKSLASH,          // \

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    NAMESPACE_KW,
    CLASS_KW,
    STRUCT_KW,
    ENUM_KW,
    UNION_KW,
    TYPEDEF_KW,
    USING_KW,
    TEMPLATE_KW,
    TYPENAME_KW,
    PUBLIC_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    STATIC_KW,
    VIRTUAL_KW,
    INLINE_KW,
    CONST_KW,
    CONSTEXPR_KW,
    MUTABLE_KW,
    EXTERN_KW,
    VOLATILE_KW,
    FRIEND_KW,
    OPERATOR_KW,
    EXPLICIT_KW,
    OVERRIDE_KW,
    FINAL_KW,
    NOEXCEPT_KW,
    THROW_KW,
    TRY_KW,
    CATCH_KW,
    IF_KW,
    ELSE_KW,
    SWITCH_KW,
    CASE_KW,
    DEFAULT_KW,
    FOR_KW,
    WHILE_KW,
    DO_KW,
    BREAK_KW,
    CONTINUE_KW,
    RETURN_KW,
    GOTO_KW,
    SIZEOF_KW,
    ALIGNOF_KW,
    DECLTYPE_KW,
    AUTO_KW,
    VOID_KW,
    BOOL_KW,
    CHAR_KW,
    SHORT_KW,
    INT_KW,
    LONG_KW,
    FLOAT_KW,
    DOUBLE_KW,
    SIGNED_KW,
    UNSIGNED_KW,
    TRUE_KW,
    FALSE_KW,
    NULLPTR_KW,
    THIS_KW,
    NEW_KW,
    DELETE_KW,

    // =========================================================================
    // SENTINELS
    // =========================================================================
    ERROR,
    EOF,
}

impl TokenKind {
    /// Whitespace and newlines (comments are handled by the parser, so they
    /// are not trivia here)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE)
    }

    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Self::LINE_COMMENT | Self::BLOCK_COMMENT | Self::DOXYGEN_COMMENT
        )
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::NAMESPACE_KW as u16) && (self as u16) <= (Self::DELETE_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_PAREN as u16) && (self as u16) <= (Self::BACKSLASH as u16)
    }

    pub fn is_literal(self) -> bool {
        matches!(self, Self::NUMBER | Self::STRING | Self::CHAR)
    }

    /// Builtin type keywords that count as a type-like token when deciding
    /// between a function and a variable declaration
    pub fn is_builtin_type(self) -> bool {
        matches!(
            self,
            Self::VOID_KW
                | Self::BOOL_KW
                | Self::CHAR_KW
                | Self::SHORT_KW
                | Self::INT_KW
                | Self::LONG_KW
                | Self::FLOAT_KW
                | Self::DOUBLE_KW
                | Self::SIGNED_KW
                | Self::UNSIGNED_KW
                | Self::AUTO_KW
        )
    }

    /// Human-readable name used in diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::NEWLINE => "newline",
            Self::LINE_COMMENT | Self::BLOCK_COMMENT => "comment",
            Self::DOXYGEN_COMMENT => "documentation comment",
            Self::IDENT => "identifier",
            Self::NUMBER => "number",
            Self::STRING => "string literal",
            Self::CHAR => "character literal",
            Self::L_PAREN => "'('",
            Self::R_PAREN => "')'",
            Self::L_BRACE => "'{'",
            Self::R_BRACE => "'}'",
            Self::L_BRACKET => "'['",
            Self::R_BRACKET => "']'",
            Self::SEMICOLON => "';'",
            Self::COLON => "':'",
            Self::COLON_COLON => "'::'",
            Self::COMMA => "','",
            Self::EQ => "'='",
            Self::LT => "'<'",
            Self::GT => "'>'",
            Self::HASH => "'#'",
            Self::ERROR => "invalid token",
            Self::EOF => "end of file",
            kind if kind.is_keyword() => "keyword",
            _ => "operator",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
