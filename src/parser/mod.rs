//! Permissive C++ header parser
//!
//! ## Architecture
//!
//! ```text
//! Source text
//!     ↓
//! Lexer (bounded, never panics) → Tokens with TokenKind
//!     ↓
//! TokenCursor (Copy, pure lookahead)
//!     ↓
//! Parser dispatch loop → one grammar routine per construct
//!     ↓
//! ScopeTree (entity arena) + diagnostics
//! ```
//!
//! The parser is best-effort: it records declarations it recognizes and
//! skips what it does not, so partial or macro-heavy headers still yield a
//! useful tree.

#[allow(clippy::module_inception)]
mod parser;

mod cursor;
pub mod errors;
mod grammar;
pub mod keywords;
mod lexer;
mod macros;
mod options;
mod scope;
mod token_kind;

pub use cursor::{Checkpoint, TokenCursor};
pub use errors::{
    ErrorCode, ParseContext, ParseError, RelatedInfo, Severity, SyntaxError, SyntaxErrorBuilder,
};
pub use lexer::{LexErrorKind, Lexer, LexerLimits, Token, decode_source, tokenize, tokenize_with};
pub use macros::{MacroDefinition, MacroTable};
pub use options::{ParseOptions, RecoveryPolicy};
pub use parser::{HeaderParser, parse, parse_many, parse_with_options};
pub use scope::{ScopeFrame, ScopeStack};
pub use token_kind::TokenKind;
