//! Syntax error and fatal parse error types
//!
//! Provides rich error information including:
//! - Error codes for categorization
//! - Severity levels
//! - Hints/suggestions for fixes
//! - Related source locations

use text_size::{TextRange, TextSize};

use super::codes::ErrorCode;
use super::context::ParseContext;
use crate::parser::LexErrorKind;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// A construct could not be parsed and was skipped
    #[default]
    Error,
    /// Suspicious input that was parsed anyway
    Warning,
    /// An informational hint
    Hint,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Hint => "hint",
        }
    }
}

/// Related location information for an error
///
/// Used to point to related source locations, e.g.,
/// "template clause starts here".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelatedInfo {
    pub message: String,
    pub range: TextRange,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A diagnostic produced while parsing a single construct
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location
    pub range: TextRange,
    pub code: ErrorCode,
    pub severity: Severity,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    /// Create a new syntax error with minimal information
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
            severity: Severity::Error,
            hint: None,
            related: vec![],
        }
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    /// Create a builder for more complex error construction
    pub fn builder(code: ErrorCode) -> SyntaxErrorBuilder {
        SyntaxErrorBuilder::new(code)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    pub fn has_related(&self) -> bool {
        !self.related.is_empty()
    }

    /// Format the error for display
    pub fn format(&self) -> String {
        let mut result = format!("{}: {}", self.code, self.message);
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Builder for creating complex syntax errors
pub struct SyntaxErrorBuilder {
    code: ErrorCode,
    message: Option<String>,
    range: Option<TextRange>,
    severity: Severity,
    hint: Option<String>,
    related: Vec<RelatedInfo>,
}

impl SyntaxErrorBuilder {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: None,
            range: None,
            severity: Severity::Error,
            hint: None,
            related: vec![],
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the offset (creates an empty range at that position)
    pub fn at_offset(mut self, offset: TextSize) -> Self {
        self.range = Some(TextRange::empty(offset));
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn related(mut self, message: impl Into<String>, range: TextRange) -> Self {
        self.related.push(RelatedInfo::new(message, range));
        self
    }

    /// Build the syntax error; missing message/range fall back to the
    /// code's default message and an empty range at offset 0
    pub fn build(self) -> SyntaxError {
        SyntaxError {
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            range: self
                .range
                .unwrap_or_else(|| TextRange::empty(TextSize::new(0))),
            code: self.code,
            severity: self.severity,
            hint: self.hint,
            related: self.related,
        }
    }
}

/// Build a context-aware error for an unexpected token
pub fn format_context_error(found: &str, context: ParseContext, code: ErrorCode) -> SyntaxError {
    let message = format!(
        "unexpected {} {}, expected {}",
        found,
        context.description(),
        context.expected_description()
    );

    SyntaxError::builder(code).message(message).build()
}

/// A parse that produced no tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The tokenizer emitted one or more `ERROR` tokens
    #[error("tokenizer error at {line}:{column}: {kind} ({count} lexical error(s))")]
    Lex {
        kind: LexErrorKind,
        line: u32,
        column: u32,
        offset: TextSize,
        count: usize,
    },
    /// A construct failed and the strict recovery policy was selected
    #[error("{file}: {error}")]
    Syntax { file: String, error: SyntaxError },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Lex { kind, .. } => kind.code(),
            Self::Syntax { error, .. } => error.code,
        }
    }
}
