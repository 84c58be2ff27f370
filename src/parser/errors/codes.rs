//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens, scan limits)
//! - E02xx: Structural errors (braces, semicolons, delimiters)
//! - E03xx: Declaration errors (names, template clauses)
//! - E05xx: Namespace/using errors
//! - E06xx: Preprocessor errors
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated string or character literal
    E0102,
    /// Unterminated block comment
    E0103,
    /// Numeric literal exceeds the length limit
    E0104,
    /// Token exceeds a length limit
    E0105,
    /// Scan aborted by a global limit
    E0106,

    // =========================================================================
    // E02xx: Structural errors (braces, semicolons, delimiters)
    // =========================================================================
    /// Missing semicolon
    E0201,
    /// Unclosed brace `{`
    E0202,
    /// Unclosed parenthesis `(`
    E0203,
    /// Unclosed template bracket `<`
    E0204,
    /// Unexpected closing delimiter
    E0205,
    /// Missing `:` after an access specifier
    E0206,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Missing identifier/name
    E0301,
    /// Missing `<` after `template`
    E0302,
    /// Unsupported declaration after a template clause
    E0303,
    /// Unexpected token in declaration
    E0304,

    // =========================================================================
    // E05xx: Namespace/using errors
    // =========================================================================
    /// Invalid namespace name
    E0501,
    /// Invalid using declaration
    E0502,

    // =========================================================================
    // E06xx: Preprocessor errors
    // =========================================================================
    /// Missing macro name after `#define`
    E0601,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Expected a specific token
    E0902,
    /// Internal parser error
    E0999,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            Self::E0106 => "E0106",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0601 => "E0601",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
            Self::E0999 => "E0999",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 | Self::E0105 | Self::E0106 => {
                "lexical error"
            }
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 | Self::E0206 => {
                "structural error"
            }
            Self::E0301 | Self::E0302 | Self::E0303 | Self::E0304 => "declaration error",
            Self::E0501 | Self::E0502 => "namespace error",
            Self::E0601 => "preprocessor error",
            Self::E0901 | Self::E0902 | Self::E0999 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated literal",
            Self::E0103 => "unterminated block comment",
            Self::E0104 => "numeric literal too long",
            Self::E0105 => "token too long",
            Self::E0106 => "input too large",
            Self::E0201 => "missing semicolon",
            Self::E0202 => "unclosed brace",
            Self::E0203 => "unclosed parenthesis",
            Self::E0204 => "unclosed template bracket",
            Self::E0205 => "unexpected closing delimiter",
            Self::E0206 => "missing ':' after access specifier",
            Self::E0301 => "missing identifier",
            Self::E0302 => "missing '<' after 'template'",
            Self::E0303 => "unsupported templated declaration",
            Self::E0304 => "unexpected token in declaration",
            Self::E0501 => "invalid namespace name",
            Self::E0502 => "invalid using declaration",
            Self::E0601 => "missing macro name",
            Self::E0901 => "unexpected token",
            Self::E0902 => "expected token",
            Self::E0999 => "internal parser error",
        }
    }

    pub fn is_lexical(&self) -> bool {
        self.as_str().starts_with("E01")
    }

    /// Check if this is a structural error (delimiter-related)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 | Self::E0206
        )
    }

    /// Check if this is a recoverable error (parsing can continue)
    pub fn is_recoverable(&self) -> bool {
        !self.is_lexical() && !matches!(self, Self::E0999)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
