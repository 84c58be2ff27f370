//! Foundation types for the header parser.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Position`], [`Span`] - Line/column/offset positions for entities
//!
//! This module has NO dependencies on other cppscope modules.

mod position;
mod span;

pub use position::{Position, Span};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
