//! Scope frames carried by the parser
//!
//! Each frame pairs the enclosing entity with its access state, so pushing
//! and popping a scope always moves both together.

use crate::entity::{AccessLevel, EntityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeFrame {
    pub entity: EntityId,
    /// Access that applies before any access specifier in this scope
    pub default_access: AccessLevel,
    /// Access set by the most recent specifier, or the default
    pub current_access: AccessLevel,
}

impl ScopeFrame {
    pub fn new(entity: EntityId, default_access: AccessLevel) -> Self {
        Self {
            entity,
            default_access,
            current_access: default_access,
        }
    }
}

/// Stack of frames; the root frame can never be popped
#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Vec<ScopeFrame>,
}

impl ScopeStack {
    pub fn new(root: EntityId) -> Self {
        Self {
            frames: vec![ScopeFrame::new(root, AccessLevel::Public)],
        }
    }

    pub fn push(&mut self, entity: EntityId, default_access: AccessLevel) {
        tracing::debug!(depth = self.frames.len(), ?entity, %default_access, "enter scope");
        self.frames.push(ScopeFrame::new(entity, default_access));
    }

    /// Push a frame that shares the current entity and access (for
    /// `extern "C" { }` blocks)
    pub fn push_transparent(&mut self) {
        let top = self.current();
        self.frames.push(top);
    }

    /// Pop the innermost frame. Returns `None` at the root.
    pub fn pop(&mut self) -> Option<ScopeFrame> {
        if self.frames.len() <= 1 {
            return None;
        }
        let frame = self.frames.pop();
        tracing::debug!(depth = self.frames.len(), "exit scope");
        frame
    }

    pub fn current(&self) -> ScopeFrame {
        self.frames[self.frames.len() - 1]
    }

    pub fn current_entity(&self) -> EntityId {
        self.current().entity
    }

    pub fn current_access(&self) -> AccessLevel {
        self.current().current_access
    }

    pub fn set_access(&mut self, access: AccessLevel) {
        let last = self.frames.len() - 1;
        self.frames[last].current_access = access;
    }

    /// Number of frames, the root included
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
