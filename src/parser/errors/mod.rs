//! Parser error handling module
//!
//! - Categorized error codes for filtering and documentation
//! - Context-aware error messages
//! - Recovered diagnostics ([`SyntaxError`]) and fatal failures ([`ParseError`])

mod codes;
mod context;
mod error;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{
    ParseError, RelatedInfo, Severity, SyntaxError, SyntaxErrorBuilder, format_context_error,
};
