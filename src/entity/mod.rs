//! Entity model: the tree of documentable constructs produced by a parse.
//!
//! - [`Entity`], [`EntityKind`], [`AccessLevel`] - one parsed construct
//! - [`EntityId`] - arena index; parent/child links are ids, not pointers
//! - [`ScopeTree`] - the arena plus path lookup and traversal

mod lookup;
mod model;
mod tree;

pub use model::{AccessLevel, Entity, EntityId, EntityKind};
pub use tree::ScopeTree;
