//! # cppscope-base
//!
//! Permissive, best-effort parsing of C++ headers into a tree of
//! documentable entities with exact source positions.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Bounded lexer, token cursor, dispatch parser, recovery
//!   ↓
//! entity    → ScopeTree arena, Entity, path lookup
//!   ↓
//! doxygen   → Structured documentation comments
//!   ↓
//! base      → Primitives (Position, Span, LineIndex, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! let tree = cppscope::parse("widget.h", "namespace ui { class Widget { void draw(); }; }")
//!     .expect("header parses");
//! let draw = tree.find_entity("ui::Widget::draw").expect("method exists");
//! assert_eq!(draw.kind, cppscope::EntityKind::Method);
//! ```

// ============================================================================
// MODULES (dependency order: base → doxygen → entity → parser)
// ============================================================================

/// Foundation types: positions, spans, line index
pub mod base;

/// Doxygen comment model and parser
pub mod doxygen;

/// Entity model and ScopeTree arena
pub mod entity;

/// Parser: bounded lexer, token cursor, construct routines
pub mod parser;

// Re-export commonly needed items
pub use parser::keywords;

// Re-export foundation types
pub use base::{LineCol, LineIndex, Position, Span, TextRange, TextSize};

pub use doxygen::{DoxygenComment, parse_doxygen_comment};
pub use entity::{AccessLevel, Entity, EntityId, EntityKind, ScopeTree};
pub use parser::{
    ErrorCode, HeaderParser, LexErrorKind, LexerLimits, ParseError, ParseOptions, RecoveryPolicy,
    Severity, SyntaxError, parse, parse_many, parse_with_options,
};
