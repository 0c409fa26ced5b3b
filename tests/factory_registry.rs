//! Node factory and type registry.

use std::collections::HashSet;

use flowgraph::error::FlowError;
use flowgraph::factory::create_node;
use flowgraph::model::{NodeKind, Position};
use flowgraph::registry;

#[test]
fn created_nodes_carry_registry_defaults() {
    let node = create_node(NodeKind::Cache, Position::new(10.0, 20.0));
    assert_eq!(node.kind, NodeKind::Cache);
    assert_eq!(node.position.x, 10.0);
    assert_eq!(node.position.y, 20.0);
    assert!(!node.selected);
    assert_eq!(node.config, registry::default_config(NodeKind::Cache));
}

#[test]
fn ids_never_collide_within_a_tick() {
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let node = create_node(NodeKind::Transform, Position::new(0.0, 0.0));
        assert!(seen.insert(node.id.clone()), "duplicate id {}", node.id);
    }
}

#[test]
fn id_is_prefixed_with_the_kind_tag() {
    for kind in NodeKind::ALL {
        let node = create_node(kind, Position::new(0.0, 0.0));
        assert!(
            node.id.starts_with(&format!("{}-", kind)),
            "id '{}' should start with '{}-'",
            node.id,
            kind
        );
    }
}

#[test]
fn kind_tags_round_trip_through_from_str() {
    for kind in NodeKind::ALL {
        assert_eq!(kind.as_str().parse::<NodeKind>().unwrap(), kind);
    }
}

#[test]
fn unknown_kind_tag_is_rejected() {
    let err = "webhook".parse::<NodeKind>().unwrap_err();
    assert_eq!(err, FlowError::UnknownKind("webhook".into()));
    insta::assert_snapshot!(err.to_string(), @"unknown node kind 'webhook'");
}

#[test]
fn registry_has_a_label_and_color_for_every_kind() {
    for kind in NodeKind::ALL {
        let info = registry::info(kind);
        assert!(!info.label.is_empty());
        assert!(info.color.starts_with('#'));
    }
}

#[test]
fn cache_defaults_match_the_catalog() {
    match registry::default_config(NodeKind::Cache) {
        flowgraph::model::NodeConfig::Cache(c) => {
            assert_eq!(c.label, "Cache");
            assert_eq!(c.ttl, 300);
            assert_eq!(c.key_template, "{{method}}-{{path}}");
        }
        other => panic!("unexpected config {:?}", other),
    }
}
