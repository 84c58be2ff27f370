//! Entity assertion helpers.

use cppscope::{Entity, EntityId, EntityKind, ScopeTree, parse};

/// Parse a header that must not fail and must not produce diagnostics.
pub fn parse_clean(source: &str) -> ScopeTree {
    let tree = parse("test.h", source)
        .unwrap_or_else(|err| panic!("Failed to parse:\n{}\nerror: {}", source, err));
    assert!(
        tree.diagnostics().is_empty(),
        "Expected no diagnostics, got:\n{}",
        tree.diagnostics()
            .iter()
            .map(|d| format!("  {}", d.format()))
            .collect::<Vec<_>>()
            .join("\n")
    );
    tree
}

/// Parse a header that may produce diagnostics but must yield a tree.
pub fn parse_recovered(source: &str) -> ScopeTree {
    parse("test.h", source)
        .unwrap_or_else(|err| panic!("Failed to parse:\n{}\nerror: {}", source, err))
}

/// Assert an entity exists at the given path and return it.
pub fn get_entity<'a>(tree: &'a ScopeTree, path: &str) -> &'a Entity {
    tree.find_entity(path).unwrap_or_else(|| {
        let known: Vec<_> = tree.entities().map(|(_, e)| e.full_name.as_str()).collect();
        panic!("Expected entity '{}' to exist, known: {:?}", path, known)
    })
}

/// Assert an entity exists at the given path.
pub fn assert_entity_exists(tree: &ScopeTree, path: &str) {
    let _ = get_entity(tree, path);
}

/// Assert an entity has the expected kind.
pub fn assert_entity_kind(tree: &ScopeTree, path: &str, expected: EntityKind) {
    let entity = get_entity(tree, path);
    assert_eq!(
        entity.kind, expected,
        "Expected '{}' to have kind {:?}, got {:?}",
        path, expected, entity.kind
    );
}

/// Children of the entity at `path`, in source order.
pub fn children_of<'a>(tree: &'a ScopeTree, path: &str) -> Vec<&'a Entity> {
    let id = tree
        .find_by_path(path)
        .unwrap_or_else(|| panic!("Expected entity '{}' to exist", path));
    tree.children(id).iter().map(|&child| &tree[child]).collect()
}

/// All entities of one kind, in tree order.
pub fn entities_of_kind(tree: &ScopeTree, kind: EntityKind) -> Vec<&Entity> {
    tree.entities_by_kind(kind).into_iter().map(|id| &tree[id]).collect()
}

/// Every entity is found again by its own path, unless an earlier entity
/// already claimed that path.
pub fn assert_paths_round_trip(tree: &ScopeTree) {
    let mut seen = std::collections::HashSet::new();
    for (id, entity) in tree.entities() {
        if entity.name.is_empty() {
            continue;
        }
        let path = tree.full_path(id);
        if !seen.insert(path.clone()) {
            continue;
        }
        assert_eq!(
            tree.find_by_path(&path),
            Some(id),
            "Path '{}' of {} '{}' did not resolve back to it",
            path,
            entity.kind,
            entity.name
        );
    }
}

/// The id of the first child of `scope` with the given kind.
pub fn first_child_of_kind(tree: &ScopeTree, scope: EntityId, kind: EntityKind) -> Option<EntityId> {
    tree.children(scope)
        .iter()
        .copied()
        .find(|&child| tree[child].kind == kind)
}
