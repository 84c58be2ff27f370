//! Path lookup over whole headers.

use cppscope::{EntityId, EntityKind};
use rstest::rstest;

use crate::helpers::entity_assertions::{
    assert_entity_exists, assert_paths_round_trip, first_child_of_kind, get_entity, parse_clean,
};
use crate::helpers::source_fixtures::{
    ACCESS_SECTIONS, DOCUMENTED, KITCHEN_SINK, MACRO_HEAVY, NAMESPACED_CLASSES, SIMPLE_CLASS,
};

#[rstest]
#[case(SIMPLE_CLASS)]
#[case(NAMESPACED_CLASSES)]
#[case(ACCESS_SECTIONS)]
#[case(MACRO_HEAVY)]
#[case(DOCUMENTED)]
#[case(KITCHEN_SINK)]
fn test_every_entity_found_by_its_path(#[case] source: &str) {
    let tree = parse_clean(source);
    assert!(!tree.is_empty());
    assert_paths_round_trip(&tree);
}

#[test]
fn test_overloads_resolve_to_first() {
    let tree = parse_clean("void f(int);\nvoid f(double);");
    let first = tree.entities().next().map(|(id, _)| id);
    assert_eq!(tree.find_by_path("f"), first);
    assert_paths_round_trip(&tree);
}

#[test]
fn test_section_comment_resolves() {
    let tree = parse_clean("class C {\n// Accessors:\nint x;\n};");
    assert_paths_round_trip(&tree);
    let label = first_child_of_kind(&tree, tree.find_by_path("C").expect("C"), EntityKind::Comment)
        .expect("comment");
    assert_eq!(tree[label].name, "Accessors");
    assert_eq!(tree.find_by_path("C::Accessors"), Some(label));
}

#[test]
fn test_root_paths() {
    let tree = parse_clean(SIMPLE_CLASS);
    assert_eq!(tree.find_by_path(""), Some(EntityId::ROOT));
    assert_eq!(tree.find_by_path("::"), Some(EntityId::ROOT));
    assert_eq!(tree.find_by_path("::Widget::"), tree.find_by_path("Widget"));
    assert_eq!(tree.root().kind, EntityKind::Unknown);
}

#[test]
fn test_kitchen_sink_paths() {
    let tree = parse_clean(KITCHEN_SINK);
    assert_entity_exists(&tree, "geo::Point::x");
    assert_entity_exists(&tree, "geo::Axis");
    assert_entity_exists(&tree, "geo::Visitor");
    assert_entity_exists(&tree, "geo::Points");
    assert_entity_exists(&tree, "geo::detail::clamp");
    assert_entity_exists(&tree, "geo::geo_init");
    assert_entity_exists(&tree, "io::fmt::to_string");
    assert_eq!(get_entity(&tree, "io::fmt::to_string").full_name, "io::fmt::to_string");
    assert_eq!(tree.scope_of(tree.find_by_path("geo::Grid::at").expect("at")), "geo::Grid");
    assert!(tree.is_global(tree.find_by_path("geo").expect("geo")));
}

#[test]
fn test_full_name_index_matches_paths() {
    let tree = parse_clean(KITCHEN_SINK);
    for (id, entity) in tree.entities() {
        if entity.name.is_empty() {
            continue;
        }
        let found = tree.lookup_full_name(&entity.full_name).expect("indexed");
        assert_eq!(tree[found].full_name, entity.full_name);
        assert_eq!(tree.full_path(id), entity.full_name);
    }
}

#[test]
fn test_traversal_helpers() {
    let tree = parse_clean(KITCHEN_SINK);
    let geo = tree.find_by_path("geo").expect("geo");
    let descendants = tree.descendants(geo);
    assert!(descendants.contains(&tree.find_by_path("geo::Grid::width_").expect("width_")));
    assert!(!descendants.contains(&tree.find_by_path("io::fmt").expect("io::fmt")));

    let documentable = tree.documentable_entities();
    assert!(documentable.iter().all(|&id| tree[id].kind.is_documentable()));
    assert!(!documentable.contains(&tree.find_by_path("geo::Grid::public").expect("public")));

    let grid = tree.find_by_path("geo::Grid").expect("grid");
    let ctor = first_child_of_kind(&tree, grid, EntityKind::Constructor).expect("ctor");
    assert_eq!(tree.parent(ctor), Some(grid));
    assert_eq!(tree.path(ctor), vec!["geo", "Grid", "Grid"]);
}
