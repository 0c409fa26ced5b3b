//! Contracts of the five mutator operations.

mod helpers;

use flowgraph::error::FlowError;
use flowgraph::model::NodeKind;
use flowgraph::mutate;
use serde_json::json;

use helpers::{flow_with, node, node_at, two_node_flow};

// ---------------------------------------------------------------------------
// add_node
// ---------------------------------------------------------------------------

#[test]
fn add_node_rejects_duplicate_id() {
    let mut flow = flow_with(vec![node(NodeKind::Input, "a")]);
    let err = mutate::add_node(&mut flow, node(NodeKind::Cache, "a")).unwrap_err();
    assert_eq!(err, FlowError::DuplicateId("a".into()));
    assert_eq!(flow.nodes.len(), 1);
    assert_eq!(flow.node("a").map(|n| n.kind), Some(NodeKind::Input));
}

#[test]
fn add_node_rejects_kind_config_mismatch() {
    let mut flow = flowgraph::model::Flow::new("f");
    let mut mismatched = node(NodeKind::Cache, "n1");
    mismatched.config = flowgraph::registry::default_config(NodeKind::Output);

    let err = mutate::add_node(&mut flow, mismatched).unwrap_err();
    assert!(matches!(err, FlowError::MalformedFlow(_)));
    assert!(flow.nodes.is_empty());

    // Everything the mutator accepts stays restorable from its own export.
    mutate::add_node(&mut flow, node(NodeKind::Cache, "n1")).unwrap();
    let doc = flowgraph::document::to_document(&flow);
    flowgraph::document::from_document("f", doc).expect("export is importable");
}

// ---------------------------------------------------------------------------
// duplicate_node
// ---------------------------------------------------------------------------

#[test]
fn duplicate_node_clones_kind_and_config_with_offset() {
    let mut flow = flow_with(vec![node_at(NodeKind::Cache, "c1", 100.0, 200.0)]);
    let copy_id = mutate::duplicate_node(&mut flow, "c1").expect("node exists");

    assert_ne!(copy_id, "c1");
    let original = flow.node("c1").unwrap();
    let copy = flow.node(&copy_id).unwrap();
    assert_eq!(copy.kind, original.kind);
    assert_eq!(copy.config, original.config);
    assert_eq!(copy.position.x, 150.0);
    assert_eq!(copy.position.y, 250.0);
    assert!(!copy.selected);

    // Original unchanged.
    assert_eq!(original.position.x, 100.0);
    assert_eq!(original.position.y, 200.0);
}

#[test]
fn duplicate_node_does_not_copy_incident_edges() {
    let mut flow = two_node_flow();
    let copy_id = mutate::duplicate_node(&mut flow, "b").expect("node exists");
    assert_eq!(flow.edges.len(), 1);
    assert!(flow.incident_edges(&copy_id).is_empty());
}

#[test]
fn duplicate_node_is_a_noop_for_unknown_id() {
    let mut flow = two_node_flow();
    assert_eq!(mutate::duplicate_node(&mut flow, "missing"), None);
    assert_eq!(flow.nodes.len(), 2);
}

// ---------------------------------------------------------------------------
// delete_node
// ---------------------------------------------------------------------------

#[test]
fn delete_node_cascades_to_incident_edges() {
    let mut flow = two_node_flow();
    mutate::delete_node(&mut flow, "a");

    assert!(!flow.contains_node("a"));
    assert!(flow.contains_node("b"));
    assert!(
        flow.edges
            .iter()
            .all(|e| e.source != "a" && e.target != "a"),
        "no edge may still reference the deleted node"
    );
    assert!(flow.edges.is_empty());
}

#[test]
fn delete_node_is_a_noop_for_unknown_id() {
    let mut flow = two_node_flow();
    mutate::delete_node(&mut flow, "missing");
    assert_eq!(flow.nodes.len(), 2);
    assert_eq!(flow.edges.len(), 1);
}

// ---------------------------------------------------------------------------
// connect
// ---------------------------------------------------------------------------

#[test]
fn connect_rejects_unknown_nodes() {
    let mut flow = flow_with(vec![node(NodeKind::Input, "a")]);
    assert_eq!(
        mutate::connect(&mut flow, "a", "missing").unwrap_err(),
        FlowError::NodeNotFound("missing".into())
    );
    assert_eq!(
        mutate::connect(&mut flow, "missing", "a").unwrap_err(),
        FlowError::NodeNotFound("missing".into())
    );
    assert!(flow.edges.is_empty());
}

#[test]
fn connect_always_rejects_self_loops() {
    let mut flow = flow_with(vec![node(NodeKind::Transform, "t")]);
    assert_eq!(
        mutate::connect(&mut flow, "t", "t").unwrap_err(),
        FlowError::SelfLoop("t".into())
    );
    // Even when the id resolves to nothing.
    assert_eq!(
        mutate::connect(&mut flow, "ghost", "ghost").unwrap_err(),
        FlowError::SelfLoop("ghost".into())
    );
}

#[test]
fn connect_rejects_illegal_kind_pairs() {
    let mut flow = two_node_flow();
    let err = mutate::connect(&mut flow, "b", "a").unwrap_err();
    assert_eq!(
        err,
        FlowError::InvalidConnection {
            source_kind: NodeKind::Endpoint,
            target_kind: NodeKind::Input,
        }
    );
    assert_eq!(flow.edges.len(), 1);
}

#[test]
fn connect_is_idempotent_for_the_same_pair() {
    let mut flow = two_node_flow();
    let first = flow.edges[0].id.clone();
    let second = mutate::connect(&mut flow, "a", "b").expect("still legal");
    assert_eq!(first, second);
    assert_eq!(flow.edges.len(), 1);
}

#[test]
fn connected_edge_has_deterministic_id_and_is_animated() {
    let flow = two_node_flow();
    let edge = &flow.edges[0];
    assert_eq!(edge.id, "edge-a-b");
    assert_eq!(edge.source, "a");
    assert_eq!(edge.target, "b");
    assert!(edge.animated);
}

// ---------------------------------------------------------------------------
// update_node_config
// ---------------------------------------------------------------------------

#[test]
fn update_config_merges_and_commits_valid_patch() {
    let mut flow = flow_with(vec![node(NodeKind::Cache, "c")]);
    mutate::update_node_config(&mut flow, "c", &json!({"label": "Hot cache", "ttl": 60}))
        .expect("valid patch");

    match &flow.node("c").unwrap().config {
        flowgraph::model::NodeConfig::Cache(c) => {
            assert_eq!(c.label, "Hot cache");
            assert_eq!(c.ttl, 60);
            // Untouched field keeps its default.
            assert_eq!(c.key_template, "{{method}}-{{path}}");
        }
        other => panic!("unexpected config {:?}", other),
    }
}

#[test]
fn update_config_coerces_numeric_text() {
    let mut flow = flow_with(vec![node(NodeKind::Cache, "c")]);
    mutate::update_node_config(&mut flow, "c", &json!({"ttl": "600"})).expect("coerced");
    match &flow.node("c").unwrap().config {
        flowgraph::model::NodeConfig::Cache(c) => assert_eq!(c.ttl, 600),
        other => panic!("unexpected config {:?}", other),
    }
}

#[test]
fn update_config_rejects_negative_ttl_naming_the_field() {
    let mut flow = flow_with(vec![node(NodeKind::Cache, "c")]);
    let before = flow.node("c").unwrap().config.clone();

    let err = mutate::update_node_config(&mut flow, "c", &json!({"ttl": "-5"})).unwrap_err();
    match err {
        FlowError::ConfigValidation { node_id, errors } => {
            assert_eq!(node_id, "c");
            assert!(errors.iter().any(|e| e.field == "ttl"), "{:?}", errors);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(flow.node("c").unwrap().config, before, "no partial write");
}

#[test]
fn update_config_is_atomic_across_fields() {
    let mut flow = flow_with(vec![node(NodeKind::Cache, "c")]);
    let before = flow.node("c").unwrap().config.clone();

    // One valid field, one invalid: nothing commits.
    let err =
        mutate::update_node_config(&mut flow, "c", &json!({"label": "New", "ttl": -1}))
            .unwrap_err();
    assert!(matches!(err, FlowError::ConfigValidation { .. }));
    assert_eq!(flow.node("c").unwrap().config, before);
}

#[test]
fn update_config_rejects_kind_change() {
    let mut flow = flow_with(vec![node(NodeKind::Cache, "c")]);
    let err = mutate::update_node_config(&mut flow, "c", &json!({"kind": "mock"})).unwrap_err();
    match err {
        FlowError::ConfigValidation { errors, .. } => {
            assert_eq!(errors[0].field, "kind");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn update_config_rejects_unknown_node() {
    let mut flow = two_node_flow();
    assert_eq!(
        mutate::update_node_config(&mut flow, "missing", &json!({"label": "x"})).unwrap_err(),
        FlowError::NodeNotFound("missing".into())
    );
}

#[test]
fn update_config_validates_mock_status_range() {
    let mut flow = flow_with(vec![node(NodeKind::Mock, "m")]);
    let err = mutate::update_node_config(
        &mut flow,
        "m",
        &json!({"mockResponse": {"statusCode": 99}}),
    )
    .unwrap_err();
    match err {
        FlowError::ConfigValidation { errors, .. } => {
            assert_eq!(errors[0].field, "mockResponse.statusCode");
        }
        other => panic!("unexpected error {:?}", other),
    }

    mutate::update_node_config(&mut flow, "m", &json!({"mockResponse": {"statusCode": "404"}}))
        .expect("coerced and in range");
}

#[test]
fn update_config_never_coerces_inside_header_maps() {
    let mut flow = flow_with(vec![node(NodeKind::Mock, "m")]);
    // Header names are free-form and may shadow numeric field names.
    mutate::update_node_config(
        &mut flow,
        "m",
        &json!({"mockResponse": {"headers": {"limit": "300", "ttl": "60"}}}),
    )
    .expect("header values stay strings");

    match &flow.node("m").unwrap().config {
        flowgraph::model::NodeConfig::Mock(c) => {
            let headers = c.mock_response.headers.as_ref().expect("headers set");
            assert_eq!(headers.get("limit").map(String::as_str), Some("300"));
            assert_eq!(headers.get("ttl").map(String::as_str), Some("60"));
        }
        other => panic!("unexpected config {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// End-to-end authoring scenario
// ---------------------------------------------------------------------------

#[test]
fn authoring_scenario_input_endpoint() {
    let mut flow = flowgraph::model::Flow::new("scenario");
    mutate::add_node(&mut flow, node(NodeKind::Input, "A")).unwrap();
    mutate::add_node(&mut flow, node(NodeKind::Endpoint, "B")).unwrap();

    mutate::connect(&mut flow, "A", "B").expect("input -> endpoint succeeds");

    let err = mutate::connect(&mut flow, "B", "A").unwrap_err();
    assert!(matches!(err, FlowError::InvalidConnection { .. }));

    mutate::delete_node(&mut flow, "A");
    assert_eq!(flow.nodes.len(), 1);
    assert!(flow.contains_node("B"));
    assert!(flow.edges.is_empty());
}
