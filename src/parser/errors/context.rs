//! Parse context tracking for context-aware error messages
//!
//! Each construct routine reports errors tagged with the context it was
//! parsing, so messages can say where in the header the problem occurred.

use crate::parser::TokenKind;

const CONSTRUCT_STARTS: &[TokenKind] = &[
    TokenKind::HASH,
    TokenKind::NAMESPACE_KW,
    TokenKind::CLASS_KW,
    TokenKind::STRUCT_KW,
    TokenKind::UNION_KW,
    TokenKind::ENUM_KW,
    TokenKind::TYPEDEF_KW,
    TokenKind::USING_KW,
    TokenKind::TEMPLATE_KW,
    TokenKind::PUBLIC_KW,
    TokenKind::PRIVATE_KW,
    TokenKind::PROTECTED_KW,
];

const SCOPE_STOPS: &[TokenKind] = &[
    TokenKind::HASH,
    TokenKind::NAMESPACE_KW,
    TokenKind::CLASS_KW,
    TokenKind::STRUCT_KW,
    TokenKind::UNION_KW,
    TokenKind::ENUM_KW,
    TokenKind::TYPEDEF_KW,
    TokenKind::USING_KW,
    TokenKind::TEMPLATE_KW,
    TokenKind::PUBLIC_KW,
    TokenKind::PRIVATE_KW,
    TokenKind::PROTECTED_KW,
    TokenKind::R_BRACE,
];

/// The construct being parsed when an error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseContext {
    /// Between declarations at file or scope level
    TopLevel,
    Namespace,
    /// Class, struct or union head
    Class,
    Enum,
    Typedef,
    Using,
    Function,
    Variable,
    /// `template <...>` clause or the declaration it introduces
    Template,
    AccessSpecifier,
    Preprocessor,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::Namespace => "in namespace declaration",
            Self::Class => "in class declaration",
            Self::Enum => "in enum declaration",
            Self::Typedef => "in typedef",
            Self::Using => "in using declaration",
            Self::Function => "in function declaration",
            Self::Variable => "in variable declaration",
            Self::Template => "in template declaration",
            Self::AccessSpecifier => "in access specifier",
            Self::Preprocessor => "in preprocessor directive",
        }
    }

    /// Get a description of what tokens are expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel => "a declaration",
            Self::Namespace => "a namespace name or '{'",
            Self::Class => "a class name, base clause, '{' or ';'",
            Self::Enum => "an enum name, underlying type or '{'",
            Self::Typedef => "a type followed by a name and ';'",
            Self::Using => "'namespace', an alias or a qualified name",
            Self::Function => "a parameter list and ';' or a body",
            Self::Variable => "a declarator followed by ';'",
            Self::Template => "'<' followed by template parameters",
            Self::AccessSpecifier => "':'",
            Self::Preprocessor => "a macro name after #define",
        }
    }

    /// Tokens that end a construct left unfinished in this context.
    ///
    /// Function and variable routines see `}` on their own (it may close a
    /// body or an initializer), so for them only the starts of other
    /// constructs count.
    pub fn recovery_tokens(&self) -> &'static [TokenKind] {
        match self {
            Self::Function | Self::Variable => CONSTRUCT_STARTS,
            _ => SCOPE_STOPS,
        }
    }
}

impl std::fmt::Display for ParseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
