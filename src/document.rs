//! Flow (de)serialization.
//!
//! The interchange unit is [`FlowDocument`]: nodes, edges and viewport,
//! sufficient for exact reconstruction. It is what the export collaborator
//! writes to file and what the snapshot history stores. The flow id travels
//! outside the document, so importing supplies it.

use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::model::{Edge, Flow, Node, Viewport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub viewport: Viewport,
}

/// Serialize a flow into a portable document. Snapshots and exports hold
/// fully-copied state; later edits to the live flow cannot reach them.
pub fn to_document(flow: &Flow) -> FlowDocument {
    FlowDocument {
        nodes: flow.nodes.clone(),
        edges: flow.edges.clone(),
        viewport: flow.viewport,
    }
}

/// Rebuild a flow from a document, checking referential integrity. Any
/// violation yields `MalformedFlow` naming the offender; nothing is partially
/// imported.
pub fn from_document(flow_id: &str, document: FlowDocument) -> Result<Flow, FlowError> {
    check_integrity(&document)?;
    Ok(Flow {
        id: flow_id.to_string(),
        nodes: document.nodes,
        edges: document.edges,
        viewport: document.viewport,
    })
}

/// Serialize a flow to a JSON document string.
pub fn to_json(flow: &Flow) -> Result<String, FlowError> {
    serde_json::to_string(&to_document(flow))
        .map_err(|e| FlowError::MalformedFlow(format!("failed to serialize flow: {}", e)))
}

/// Parse a JSON document string and rebuild the flow.
pub fn from_json(flow_id: &str, json: &str) -> Result<Flow, FlowError> {
    let document: FlowDocument = serde_json::from_str(json)
        .map_err(|e| FlowError::MalformedFlow(format!("failed to parse flow document: {}", e)))?;
    from_document(flow_id, document)
}

fn check_integrity(document: &FlowDocument) -> Result<(), FlowError> {
    let mut node_ids = std::collections::HashSet::new();
    for node in &document.nodes {
        if !node_ids.insert(node.id.as_str()) {
            return Err(FlowError::MalformedFlow(format!(
                "duplicate node id '{}'",
                node.id
            )));
        }
        if node.kind != node.config.kind() {
            return Err(FlowError::MalformedFlow(format!(
                "node '{}' is tagged '{}' but carries a '{}' config",
                node.id,
                node.kind,
                node.config.kind()
            )));
        }
    }

    let mut edge_ids = std::collections::HashSet::new();
    for edge in &document.edges {
        if !edge_ids.insert(edge.id.as_str()) {
            return Err(FlowError::MalformedFlow(format!(
                "duplicate edge id '{}'",
                edge.id
            )));
        }
        if !node_ids.contains(edge.source.as_str()) {
            return Err(FlowError::MalformedFlow(format!(
                "edge '{}' references unknown source node '{}'",
                edge.id, edge.source
            )));
        }
        if !node_ids.contains(edge.target.as_str()) {
            return Err(FlowError::MalformedFlow(format!(
                "edge '{}' references unknown target node '{}'",
                edge.id, edge.target
            )));
        }
        if edge.source == edge.target {
            return Err(FlowError::MalformedFlow(format!(
                "edge '{}' is a self-loop on node '{}'",
                edge.id, edge.source
            )));
        }
    }

    Ok(())
}
