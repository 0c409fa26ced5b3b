//! Core flow graph types.
//!
//! These types are the serde target for the canvas flow document. Node
//! configuration is a tagged union keyed by `kind`, so every node carries
//! exactly the fields its kind defines and nothing is shape-guessed at runtime.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FlowError;

// =============================================================================
// NODE KIND
// =============================================================================

/// The role a node plays in the gateway pipeline. Immutable once a node is
/// created; determines the node's configuration shape and registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Input,
    Endpoint,
    Transform,
    Auth,
    RateLimit,
    Cache,
    Mock,
    Validator,
    Output,
}

impl NodeKind {
    pub const ALL: [NodeKind; 9] = [
        NodeKind::Input,
        NodeKind::Endpoint,
        NodeKind::Transform,
        NodeKind::Auth,
        NodeKind::RateLimit,
        NodeKind::Cache,
        NodeKind::Mock,
        NodeKind::Validator,
        NodeKind::Output,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Input => "input",
            NodeKind::Endpoint => "endpoint",
            NodeKind::Transform => "transform",
            NodeKind::Auth => "auth",
            NodeKind::RateLimit => "ratelimit",
            NodeKind::Cache => "cache",
            NodeKind::Mock => "mock",
            NodeKind::Validator => "validator",
            NodeKind::Output => "output",
        }
    }

    /// Entry nodes originate traffic; they may only be edge sources.
    pub fn is_entry(&self) -> bool {
        matches!(self, NodeKind::Input)
    }

    /// Terminal nodes end the pipeline; they may only be edge targets.
    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeKind::Output)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NodeKind {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(NodeKind::Input),
            "endpoint" => Ok(NodeKind::Endpoint),
            "transform" => Ok(NodeKind::Transform),
            "auth" => Ok(NodeKind::Auth),
            "ratelimit" => Ok(NodeKind::RateLimit),
            "cache" => Ok(NodeKind::Cache),
            "mock" => Ok(NodeKind::Mock),
            "validator" => Ok(NodeKind::Validator),
            "output" => Ok(NodeKind::Output),
            other => Err(FlowError::UnknownKind(other.to_string())),
        }
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// Canvas pan/zoom state. Carried through documents untouched; the core never
/// interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

// =============================================================================
// NODE CONFIG — tagged union over the nine node kinds
// =============================================================================

/// Numeric fields edited as text in the canvas (`ttl`, `statusCode`, `limit`,
/// `windowSeconds`, `timeoutMs`) are `i64` so out-of-range input survives
/// deserialization and is rejected by the config rules with a named field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeConfig {
    Input(InputConfig),
    Endpoint(EndpointConfig),
    Transform(TransformConfig),
    Auth(AuthConfig),
    RateLimit(RateLimitConfig),
    Cache(CacheConfig),
    Mock(MockConfig),
    Validator(ValidatorConfig),
    Output(OutputConfig),
}

impl NodeConfig {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeConfig::Input(_) => NodeKind::Input,
            NodeConfig::Endpoint(_) => NodeKind::Endpoint,
            NodeConfig::Transform(_) => NodeKind::Transform,
            NodeConfig::Auth(_) => NodeKind::Auth,
            NodeConfig::RateLimit(_) => NodeKind::RateLimit,
            NodeConfig::Cache(_) => NodeKind::Cache,
            NodeConfig::Mock(_) => NodeKind::Mock,
            NodeConfig::Validator(_) => NodeKind::Validator,
            NodeConfig::Output(_) => NodeKind::Output,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NodeConfig::Input(c) => &c.label,
            NodeConfig::Endpoint(c) => &c.label,
            NodeConfig::Transform(c) => &c.label,
            NodeConfig::Auth(c) => &c.label,
            NodeConfig::RateLimit(c) => &c.label,
            NodeConfig::Cache(c) => &c.label,
            NodeConfig::Mock(c) => &c.label,
            NodeConfig::Validator(c) => &c.label,
            NodeConfig::Output(c) => &c.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConfig {
    pub label: String,
    /// Routing path the gateway listens on, e.g. `/orders`.
    pub path: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    pub label: String,
    pub target_url: String,
    pub method: String,
    pub timeout_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformConfig {
    pub label: String,
    pub transform_type: String,
    /// May be empty; an empty script is a pass-through transform.
    pub transform_script: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    pub label: String,
    pub scheme: String,
    pub header_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitConfig {
    pub label: String,
    pub limit: i64,
    pub window_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    pub label: String,
    pub ttl: i64,
    pub key_template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockConfig {
    pub label: String,
    pub mock_response: MockResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockResponse {
    pub status_code: i64,
    pub body: String,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorConfig {
    pub label: String,
    pub rules: Vec<ValidationRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    pub field: String,
    pub rule: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub label: String,
    pub format: String,
}

// =============================================================================
// NODE / EDGE / FLOW
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Immutable and unique within a flow once assigned.
    pub id: String,
    pub kind: NodeKind,
    pub position: Position,
    pub config: NodeConfig,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub animated: bool,
}

/// One authored gateway pipeline: the node and edge sets plus the canvas
/// viewport. Insertion order is preserved so document round-trips are
/// structurally equal.
///
/// The mutator operations in [`crate::mutate`] are the only writers; they take
/// `&mut Flow`, which enforces the single-writer discipline at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub id: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub viewport: Viewport,
}

impl Flow {
    pub fn new(id: impl Into<String>) -> Self {
        Flow {
            id: id.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
            viewport: Viewport::default(),
        }
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn node_mut(&mut self, node_id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == node_id)
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.node(node_id).is_some()
    }

    pub fn edge(&self, edge_id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == edge_id)
    }

    /// Edges touching `node_id` on either end.
    pub fn incident_edges(&self, node_id: &str) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| e.source == node_id || e.target == node_id)
            .collect()
    }
}
