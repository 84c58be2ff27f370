//! Path-based lookup and traversal over a [`ScopeTree`].

use super::model::{Entity, EntityId, EntityKind};
use super::tree::ScopeTree;

impl ScopeTree {
    /// Resolve a `::`-separated path from the root.
    ///
    /// `""` and `"::"` name the root. A leading and a trailing `::` are
    /// ignored; single colons belong to names (`// Accessors:`). A segment may also match a name that itself contains `::`
    /// (from `namespace a::b { }`), and anonymous namespaces and classes are
    /// searched as if their members belonged to the enclosing scope.
    pub fn find_by_path(&self, path: &str) -> Option<EntityId> {
        if path.is_empty() || path == "::" {
            return Some(EntityId::ROOT);
        }
        let trimmed = path.strip_prefix("::").unwrap_or(path);
        let trimmed = trimmed.strip_suffix("::").unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Some(EntityId::ROOT);
        }
        let segments: Vec<&str> = trimmed.split("::").collect();
        self.resolve_segments(EntityId::ROOT, &segments)
    }

    /// Same as [`find_by_path`](Self::find_by_path), returning the entity
    pub fn find_entity(&self, path: &str) -> Option<&Entity> {
        self.find_by_path(path).and_then(|id| self.get(id))
    }

    fn resolve_segments(&self, scope: EntityId, segments: &[&str]) -> Option<EntityId> {
        if segments.is_empty() {
            return Some(scope);
        }
        for take in 1..=segments.len() {
            let name = segments[..take].join("::");
            for child in self.children_named(scope, &name) {
                if let Some(found) = self.resolve_segments(child, &segments[take..]) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Children of `scope` called `name`, looking through anonymous scopes
    fn children_named(&self, scope: EntityId, name: &str) -> Vec<EntityId> {
        let mut found = Vec::new();
        let mut anonymous = Vec::new();
        for &child in self.children(scope) {
            let entity = &self[child];
            if entity.name == name {
                found.push(child);
            } else if entity.name.is_empty() && is_transparent(entity.kind) {
                anonymous.push(child);
            }
        }
        for anon in anonymous {
            found.extend(self.children_named(anon, name));
        }
        found
    }

    /// First child of `scope` with the given name
    pub fn find_child(&self, scope: EntityId, name: &str) -> Option<EntityId> {
        self.children_named(scope, name).into_iter().next()
    }

    /// O(1) lookup by the full name assigned at creation (first wins)
    pub fn lookup_full_name(&self, full_name: &str) -> Option<EntityId> {
        if full_name.trim_matches(':').is_empty() {
            return Some(EntityId::ROOT);
        }
        self.by_full_name().get(full_name).copied()
    }

    /// Names from the root down to `id`, skipping empty names
    pub fn path(&self, id: EntityId) -> Vec<&str> {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            let Some(entity) = self.get(cur) else { break };
            if !entity.name.is_empty() {
                names.push(entity.name.as_str());
            }
            current = entity.parent();
        }
        names.reverse();
        names
    }

    /// `::`-joined [`path`](Self::path)
    pub fn full_path(&self, id: EntityId) -> String {
        self.path(id).join("::")
    }

    /// Qualified name of the enclosing scope, `"::"` for globals
    pub fn scope_of(&self, id: EntityId) -> String {
        match self.parent(id) {
            Some(parent) if parent != EntityId::ROOT => {
                let path = self.full_path(parent);
                if path.is_empty() { "::".to_string() } else { path }
            }
            _ => "::".to_string(),
        }
    }

    pub fn is_global(&self, id: EntityId) -> bool {
        self.parent(id) == Some(EntityId::ROOT)
    }

    pub fn has_doxygen_comment(&self, id: EntityId) -> bool {
        self.get(id).is_some_and(Entity::has_doxygen_comment)
    }

    /// Pre-order traversal below `id` (excluding `id` itself)
    pub fn descendants(&self, id: EntityId) -> Vec<EntityId> {
        let mut out = Vec::new();
        let mut stack: Vec<EntityId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Entities of one kind in tree order
    pub fn entities_by_kind(&self, kind: EntityKind) -> Vec<EntityId> {
        self.descendants(EntityId::ROOT)
            .into_iter()
            .filter(|&id| self[id].kind == kind)
            .collect()
    }

    /// Entities that should carry documentation, in tree order
    pub fn documentable_entities(&self) -> Vec<EntityId> {
        self.descendants(EntityId::ROOT)
            .into_iter()
            .filter(|&id| self[id].kind.is_documentable())
            .collect()
    }
}

fn is_transparent(kind: EntityKind) -> bool {
    matches!(kind, EntityKind::Namespace | EntityKind::Class | EntityKind::Struct)
}
