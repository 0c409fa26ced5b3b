#![allow(dead_code)]

use flowgraph::factory;
use flowgraph::model::{Flow, Node, NodeKind, Position};
use flowgraph::mutate;

/// Node of `kind` with a fixed id, default config, at the origin.
pub fn node(kind: NodeKind, id: &str) -> Node {
    let mut node = factory::create_node(kind, Position::new(0.0, 0.0));
    node.id = id.to_string();
    node
}

pub fn node_at(kind: NodeKind, id: &str, x: f64, y: f64) -> Node {
    let mut node = factory::create_node(kind, Position::new(x, y));
    node.id = id.to_string();
    node
}

pub fn flow_with(nodes: Vec<Node>) -> Flow {
    let mut flow = Flow::new("test-flow");
    for node in nodes {
        mutate::add_node(&mut flow, node).expect("helper ids are unique");
    }
    flow
}

/// Input `a` connected to endpoint `b`.
pub fn two_node_flow() -> Flow {
    let mut flow = flow_with(vec![
        node(NodeKind::Input, "a"),
        node(NodeKind::Endpoint, "b"),
    ]);
    mutate::connect(&mut flow, "a", "b").expect("input -> endpoint is legal");
    flow
}
