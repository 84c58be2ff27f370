//! Doxygen documentation comments
//!
//! - [`DoxygenComment`] - structured fields of one comment block
//! - [`parse_doxygen_comment`] - raw comment text to structured fields

mod comment;
mod parse;

pub use comment::DoxygenComment;
pub use parse::parse_doxygen_comment;
