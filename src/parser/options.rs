//! Parser configuration

use super::lexer::LexerLimits;

/// What a construct routine failure does to the parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecoveryPolicy {
    /// Record a diagnostic on the tree and skip to the next construct
    #[default]
    Resync,
    /// Abort the parse with [`ParseError::Syntax`](super::ParseError::Syntax)
    Strict,
}

/// Options for one parse
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    pub limits: LexerLimits,
    pub recovery: RecoveryPolicy,
    /// Object-like macros defined before the first line is read
    pub predefined_macros: Vec<(String, String)>,
    /// Merge consecutive `///` or `//!` lines into one doxygen comment
    pub merge_line_comments: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            limits: LexerLimits::default(),
            recovery: RecoveryPolicy::default(),
            predefined_macros: Vec::new(),
            merge_line_comments: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: LexerLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_recovery(mut self, recovery: RecoveryPolicy) -> Self {
        self.recovery = recovery;
        self
    }

    pub fn strict(self) -> Self {
        self.with_recovery(RecoveryPolicy::Strict)
    }

    pub fn with_macro(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.predefined_macros.push((name.into(), value.into()));
        self
    }

    pub fn with_merge_line_comments(mut self, merge: bool) -> Self {
        self.merge_line_comments = merge;
        self
    }
}
