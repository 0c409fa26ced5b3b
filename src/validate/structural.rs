//! Flow-level structural diagnostics (S001–S007).
//!
//! Advisory lint over a whole flow, run on import and on demand from the
//! canvas. The mutator is the enforcement point for authoring; these rules
//! also catch problems in documents that never went through the mutator.

use std::collections::HashSet;

use petgraph::algo::is_cyclic_directed;

use crate::model::{Flow, FlowIndex};
use crate::validate::connection::is_valid_connection;
use crate::validate::FlowDiagnostic;

/// Run all structural rules. Returns all diagnostics found.
pub fn validate_structural(flow: &Flow, index: &FlowIndex) -> Vec<FlowDiagnostic> {
    let mut diags = Vec::new();

    s001_unique_node_ids(flow, &mut diags);
    s002_unique_edge_ids(flow, &mut diags);
    s003_edges_reference_existing_nodes(flow, &mut diags);
    s004_no_self_loops(flow, &mut diags);
    s005_no_duplicate_connections(flow, &mut diags);
    s006_edge_kind_pairs_legal(flow, &mut diags);
    s007_no_cycles(index, &mut diags);

    diags
}

fn s001_unique_node_ids(flow: &Flow, diags: &mut Vec<FlowDiagnostic>) {
    let mut seen = HashSet::new();
    for node in &flow.nodes {
        if !seen.insert(node.id.as_str()) {
            diags.push(FlowDiagnostic::new(
                "S001",
                format!("Duplicate node id '{}'", node.id),
                Some(node.id.clone()),
            ));
        }
    }
}

fn s002_unique_edge_ids(flow: &Flow, diags: &mut Vec<FlowDiagnostic>) {
    let mut seen = HashSet::new();
    for edge in &flow.edges {
        if !seen.insert(edge.id.as_str()) {
            diags.push(FlowDiagnostic::new(
                "S002",
                format!("Duplicate edge id '{}'", edge.id),
                None,
            ));
        }
    }
}

fn s003_edges_reference_existing_nodes(flow: &Flow, diags: &mut Vec<FlowDiagnostic>) {
    for edge in &flow.edges {
        if !flow.contains_node(&edge.source) {
            diags.push(FlowDiagnostic::new(
                "S003",
                format!(
                    "Edge '{}' references unknown source node '{}'",
                    edge.id, edge.source
                ),
                None,
            ));
        }
        if !flow.contains_node(&edge.target) {
            diags.push(FlowDiagnostic::new(
                "S003",
                format!(
                    "Edge '{}' references unknown target node '{}'",
                    edge.id, edge.target
                ),
                None,
            ));
        }
    }
}

fn s004_no_self_loops(flow: &Flow, diags: &mut Vec<FlowDiagnostic>) {
    for edge in &flow.edges {
        if edge.source == edge.target {
            diags.push(FlowDiagnostic::new(
                "S004",
                format!("Self-loop detected on node '{}'", edge.source),
                Some(edge.source.clone()),
            ));
        }
    }
}

fn s005_no_duplicate_connections(flow: &Flow, diags: &mut Vec<FlowDiagnostic>) {
    let mut seen = HashSet::new();
    for edge in &flow.edges {
        if !seen.insert((edge.source.as_str(), edge.target.as_str())) {
            diags.push(FlowDiagnostic::new(
                "S005",
                format!(
                    "Duplicate connection from '{}' to '{}'",
                    edge.source, edge.target
                ),
                None,
            ));
        }
    }
}

fn s006_edge_kind_pairs_legal(flow: &Flow, diags: &mut Vec<FlowDiagnostic>) {
    for edge in &flow.edges {
        let (Some(source), Some(target)) = (flow.node(&edge.source), flow.node(&edge.target))
        else {
            continue; // dangling endpoints already reported by S003
        };
        if !is_valid_connection(source.kind, target.kind) {
            diags.push(FlowDiagnostic::new(
                "S006",
                format!(
                    "Edge '{}' connects a '{}' node to a '{}' node, which is not allowed",
                    edge.id, source.kind, target.kind
                ),
                None,
            ));
        }
    }
}

fn s007_no_cycles(index: &FlowIndex, diags: &mut Vec<FlowDiagnostic>) {
    if is_cyclic_directed(&index.graph) {
        diags.push(FlowDiagnostic::new(
            "S007",
            "Flow graph contains a cycle",
            None,
        ));
    }
}
