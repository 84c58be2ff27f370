//! Arena-backed entity tree for one parsed file.

use std::ops::Index;

use rustc_hash::FxHashMap;

use super::model::{Entity, EntityId, EntityKind};
use crate::base::{LineIndex, Position, Span};
use crate::doxygen::DoxygenComment;
use crate::parser::SyntaxError;

/// All entities of one header, rooted at a synthetic `Unknown` entity.
///
/// Entities live in a flat arena in creation order; parent and child links
/// are [`EntityId`]s. Links are private so consumers can replace comments
/// but never reshape the tree.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScopeTree {
    filename: String,
    source: String,
    entities: Vec<Entity>,
    by_full_name: FxHashMap<String, EntityId>,
    diagnostics: Vec<SyntaxError>,
}

impl ScopeTree {
    /// Create a tree holding only the root, spanning the whole source
    pub fn new(filename: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let index = LineIndex::new(&source);
        let end = index.position(&source, text_size::TextSize::of(source.as_str()));
        let root = Entity::new(EntityKind::Unknown, "")
            .with_range(Span::new(Position::default(), end));

        Self {
            filename: filename.into(),
            source,
            entities: vec![root],
            by_full_name: FxHashMap::default(),
            diagnostics: Vec::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Entity {
        &self.entities[0]
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Number of entities, not counting the root
    pub fn len(&self) -> usize {
        self.entities.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every entity except the root, in creation order
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, entity)| (EntityId::new(idx as u32), entity))
    }

    pub fn children(&self, id: EntityId) -> &[EntityId] {
        self.get(id).map(Entity::children).unwrap_or_default()
    }

    pub fn parent(&self, id: EntityId) -> Option<EntityId> {
        self.get(id).and_then(Entity::parent)
    }

    /// Problems the parser recovered from
    pub fn diagnostics(&self) -> &[SyntaxError] {
        &self.diagnostics
    }

    // =========================================================================
    // Comment mutation
    // =========================================================================

    pub fn comment_mut(&mut self, id: EntityId) -> Option<&mut Option<DoxygenComment>> {
        self.entities.get_mut(id.index()).map(|e| &mut e.comment)
    }

    /// Replace an entity's comment; returns false for an unknown id
    pub fn set_comment(&mut self, id: EntityId, comment: Option<DoxygenComment>) -> bool {
        match self.comment_mut(id) {
            Some(slot) => {
                *slot = comment;
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Construction (parser only)
    // =========================================================================

    /// Attach `entity` as the last child of `parent`, assigning its full name
    pub(crate) fn attach(&mut self, parent: EntityId, mut entity: Entity) -> EntityId {
        let parent = if parent.index() < self.entities.len() {
            parent
        } else {
            EntityId::ROOT
        };
        let parent_name = &self.entities[parent.index()].full_name;
        entity.full_name = match (parent_name.is_empty(), entity.name.is_empty()) {
            (_, true) => parent_name.clone(),
            (true, false) => entity.name.to_string(),
            (false, false) => format!("{}::{}", parent_name, entity.name),
        };
        entity.parent = Some(parent);

        let id = EntityId::new(self.entities.len() as u32);
        if !entity.name.is_empty() {
            self.by_full_name
                .entry(entity.full_name.clone())
                .or_insert(id);
        }
        tracing::debug!(
            kind = %entity.kind,
            full_name = %entity.full_name,
            "entity added"
        );
        self.entities.push(entity);
        self.entities[parent.index()].children.push(id);
        id
    }

    pub(crate) fn push_diagnostic(&mut self, error: SyntaxError) {
        self.diagnostics.push(error);
    }

    pub(crate) fn by_full_name(&self) -> &FxHashMap<String, EntityId> {
        &self.by_full_name
    }
}

impl Index<EntityId> for ScopeTree {
    type Output = Entity;

    fn index(&self, id: EntityId) -> &Entity {
        &self.entities[id.index()]
    }
}
