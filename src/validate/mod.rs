//! Flow validation: connection rules, per-kind config rules and whole-flow
//! structural diagnostics.

pub mod config_rules;
pub mod connection;
pub mod structural;

pub use config_rules::validate_config;
pub use connection::{check_connection, is_valid_connection};

use crate::model::{Flow, FlowIndex, Node};

/// One advisory finding over a flow. Unlike [`crate::error::FlowError`] these
/// never reject an operation; they describe the current state of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDiagnostic {
    pub code: &'static str,
    pub message: String,
    pub node_id: Option<String>,
}

impl FlowDiagnostic {
    pub fn new(code: &'static str, message: impl Into<String>, node_id: Option<String>) -> Self {
        FlowDiagnostic {
            code,
            message: message.into(),
            node_id,
        }
    }
}

impl std::fmt::Display for FlowDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(f, "[{}] {} (node '{}')", self.code, self.message, id),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// Validate an entire flow: structural rules plus every node's config rules.
pub fn validate_flow(flow: &Flow) -> Vec<FlowDiagnostic> {
    let index = FlowIndex::build(flow);
    let mut diags = structural::validate_structural(flow, &index);

    for node in &flow.nodes {
        diags.extend(validate_node(node));
    }

    diags
}

/// Validate a single node's configuration, reported as diagnostics.
pub fn validate_node(node: &Node) -> Vec<FlowDiagnostic> {
    config_rules::validate_config(&node.config)
        .into_iter()
        .map(|e| {
            FlowDiagnostic::new(
                "C001",
                format!("{}: {}", e.field, e.message),
                Some(node.id.clone()),
            )
        })
        .collect()
}
