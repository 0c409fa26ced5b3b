//! The mutation operations over a flow: add, duplicate, delete, connect and
//! update-config. These are the only writers of a [`Flow`]; taking `&mut Flow`
//! enforces the single-writer discipline at compile time.
//!
//! Every operation is synchronous and atomic: it either applies fully or
//! returns an error with the flow unchanged.

pub mod patch;

use serde_json::Value;

use crate::error::{ConfigFieldError, FlowError};
use crate::factory;
use crate::model::{Edge, Flow, Node, NodeConfig, Position};
use crate::validate::{config_rules, connection};

/// Canvas offset applied to a duplicated node so the copy is visibly distinct.
pub const DUPLICATE_OFFSET: f64 = 50.0;

/// Insert a prebuilt node. Fails if the id is already taken or the node's
/// `kind` tag disagrees with its config variant; a mismatched node would
/// export a document the importer rejects.
pub fn add_node(flow: &mut Flow, node: Node) -> Result<(), FlowError> {
    if flow.contains_node(&node.id) {
        return Err(FlowError::DuplicateId(node.id));
    }
    if node.kind != node.config.kind() {
        return Err(FlowError::MalformedFlow(format!(
            "node '{}' is tagged '{}' but carries a '{}' config",
            node.id,
            node.kind,
            node.config.kind()
        )));
    }
    flow.nodes.push(node);
    Ok(())
}

/// Clone a node's kind and config into a new node offset by
/// [`DUPLICATE_OFFSET`] on both axes. Incident edges are not copied. Returns
/// the new node's id, or `None` if `node_id` is absent (a no-op).
pub fn duplicate_node(flow: &mut Flow, node_id: &str) -> Option<String> {
    let original = flow.node(node_id)?.clone();

    let mut id = factory::duplicate_id(node_id);
    while flow.contains_node(&id) {
        id = factory::duplicate_id(node_id);
    }

    let copy = Node {
        id: id.clone(),
        kind: original.kind,
        position: Position::new(
            original.position.x + DUPLICATE_OFFSET,
            original.position.y + DUPLICATE_OFFSET,
        ),
        config: original.config,
        selected: false,
    };
    flow.nodes.push(copy);
    Some(id)
}

/// Remove a node and every edge touching it. No-op if the node is absent.
pub fn delete_node(flow: &mut Flow, node_id: &str) {
    flow.nodes.retain(|n| n.id != node_id);
    flow.edges.retain(|e| e.source != node_id && e.target != node_id);
}

/// Connect two nodes, checking the kind adjacency rules. The edge id is
/// deterministic for the pair, so reconnecting an already-connected pair
/// returns the existing id without inserting a duplicate.
pub fn connect(flow: &mut Flow, source_id: &str, target_id: &str) -> Result<String, FlowError> {
    if source_id == target_id {
        return Err(FlowError::SelfLoop(source_id.to_string()));
    }
    let source = flow
        .node(source_id)
        .ok_or_else(|| FlowError::NodeNotFound(source_id.to_string()))?;
    let target = flow
        .node(target_id)
        .ok_or_else(|| FlowError::NodeNotFound(target_id.to_string()))?;

    connection::check_connection(source.kind, target.kind)?;

    let id = factory::edge_id(source_id, target_id);
    if flow.edge(&id).is_some() {
        return Ok(id);
    }

    flow.edges.push(Edge {
        id: id.clone(),
        source: source_id.to_string(),
        target: target_id.to_string(),
        animated: true,
    });
    Ok(id)
}

/// Merge a partial config (JSON, as committed by the canvas forms) into a
/// node's config, validate the merged result against the node's kind schema,
/// and commit only if it passes. On any failure the node is left untouched.
///
/// The node's kind is immutable: a patch that tries to change `kind` is
/// rejected. Numeric fields arriving as text are coerced before validation.
pub fn update_node_config(
    flow: &mut Flow,
    node_id: &str,
    config_patch: &Value,
) -> Result<(), FlowError> {
    let node = flow
        .node(node_id)
        .ok_or_else(|| FlowError::NodeNotFound(node_id.to_string()))?;

    if let Some(patched_kind) = config_patch.get("kind") {
        if patched_kind.as_str() != Some(node.kind.as_str()) {
            return Err(FlowError::ConfigValidation {
                node_id: node_id.to_string(),
                errors: vec![ConfigFieldError::new("kind", "node kind is immutable")],
            });
        }
    }

    let mut merged = serde_json::to_value(&node.config).map_err(|e| {
        FlowError::ConfigValidation {
            node_id: node_id.to_string(),
            errors: vec![ConfigFieldError::new("config", e.to_string())],
        }
    })?;
    let mut normalized_patch = config_patch.clone();
    patch::coerce_numeric_strings(&mut normalized_patch);
    patch::deep_merge(&mut merged, &normalized_patch);

    let merged_config: NodeConfig =
        serde_json::from_value(merged).map_err(|e| FlowError::ConfigValidation {
            node_id: node_id.to_string(),
            errors: vec![ConfigFieldError::new("config", e.to_string())],
        })?;

    let errors = config_rules::validate_config(&merged_config);
    if !errors.is_empty() {
        return Err(FlowError::ConfigValidation {
            node_id: node_id.to_string(),
            errors,
        });
    }

    if let Some(node) = flow.node_mut(node_id) {
        node.config = merged_config;
    }
    Ok(())
}
