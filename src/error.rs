//! Error taxonomy shared across the graph model, mutator, serializer and history.
//!
//! Every variant carries the context (offending id, kind pair, field name) the
//! canvas UI needs to render a precise message. None of these corrupt the flow:
//! a failed operation leaves the graph exactly as it was.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::NodeKind;

/// A single rejected field inside a node configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFieldError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ConfigFieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        ConfigFieldError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Rejected flow operations. All of them are recoverable: the caller gets the
/// error, the graph is unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error("unknown node kind '{0}'")]
    UnknownKind(String),

    #[error("node id '{0}' already exists in this flow")]
    DuplicateId(String),

    #[error("node '{0}' not found in this flow")]
    NodeNotFound(String),

    #[error("a '{source_kind}' node cannot connect to a '{target_kind}' node")]
    InvalidConnection {
        source_kind: NodeKind,
        target_kind: NodeKind,
    },

    #[error("node '{0}' cannot connect to itself")]
    SelfLoop(String),

    #[error(
        "invalid config for node '{node_id}': {}",
        .errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    ConfigValidation {
        node_id: String,
        errors: Vec<ConfigFieldError>,
    },

    #[error("malformed flow document: {0}")]
    MalformedFlow(String),
}

/// Failure of the injected snapshot store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Non-fatal: the in-memory mutation already applied, only the snapshot write
/// failed. Reported to the caller, never blocks or rolls back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to persist snapshot for flow '{flow_id}': {reason}")]
pub struct PersistenceWarning {
    pub flow_id: String,
    pub reason: String,
}
