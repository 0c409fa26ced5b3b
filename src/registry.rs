//! Static catalog of node kinds: display label, canvas color and default
//! configuration. Read-only after process start; the factory and the
//! presentation layer are the only consumers.
//!
//! The fallible string boundary is `NodeKind::from_str`, which reports
//! `FlowError::UnknownKind` for tags the catalog does not know.

use crate::model::{
    AuthConfig, CacheConfig, EndpointConfig, InputConfig, MockConfig, MockResponse, NodeConfig,
    NodeKind, OutputConfig, RateLimitConfig, TransformConfig, ValidatorConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeTypeInfo {
    pub label: &'static str,
    pub color: &'static str,
}

pub fn info(kind: NodeKind) -> NodeTypeInfo {
    match kind {
        NodeKind::Input => NodeTypeInfo {
            label: "Input",
            color: "#22c55e",
        },
        NodeKind::Endpoint => NodeTypeInfo {
            label: "Endpoint",
            color: "#3b82f6",
        },
        NodeKind::Transform => NodeTypeInfo {
            label: "Transform",
            color: "#a855f7",
        },
        NodeKind::Auth => NodeTypeInfo {
            label: "Auth",
            color: "#f59e0b",
        },
        NodeKind::RateLimit => NodeTypeInfo {
            label: "Rate Limit",
            color: "#ef4444",
        },
        NodeKind::Cache => NodeTypeInfo {
            label: "Cache",
            color: "#06b6d4",
        },
        NodeKind::Mock => NodeTypeInfo {
            label: "Mock",
            color: "#8b5cf6",
        },
        NodeKind::Validator => NodeTypeInfo {
            label: "Validator",
            color: "#10b981",
        },
        NodeKind::Output => NodeTypeInfo {
            label: "Output",
            color: "#64748b",
        },
    }
}

/// Default configuration for a freshly created node of `kind`. Every default
/// satisfies its own kind's validation rules.
pub fn default_config(kind: NodeKind) -> NodeConfig {
    match kind {
        NodeKind::Input => NodeConfig::Input(InputConfig {
            label: "Input".into(),
            path: "/".into(),
            method: "GET".into(),
        }),
        NodeKind::Endpoint => NodeConfig::Endpoint(EndpointConfig {
            label: "Endpoint".into(),
            target_url: "https://example.com/api".into(),
            method: "GET".into(),
            timeout_ms: 30_000,
        }),
        NodeKind::Transform => NodeConfig::Transform(TransformConfig {
            label: "Transform".into(),
            transform_type: "body".into(),
            transform_script: String::new(),
        }),
        NodeKind::Auth => NodeConfig::Auth(AuthConfig {
            label: "Auth".into(),
            scheme: "api-key".into(),
            header_name: Some("X-Api-Key".into()),
        }),
        NodeKind::RateLimit => NodeConfig::RateLimit(RateLimitConfig {
            label: "Rate Limit".into(),
            limit: 100,
            window_seconds: 60,
        }),
        NodeKind::Cache => NodeConfig::Cache(CacheConfig {
            label: "Cache".into(),
            ttl: 300,
            key_template: "{{method}}-{{path}}".into(),
        }),
        NodeKind::Mock => NodeConfig::Mock(MockConfig {
            label: "Mock".into(),
            mock_response: MockResponse {
                status_code: 200,
                body: "{}".into(),
                headers: None,
            },
        }),
        NodeKind::Validator => NodeConfig::Validator(ValidatorConfig {
            label: "Validator".into(),
            rules: Vec::new(),
        }),
        NodeKind::Output => NodeConfig::Output(OutputConfig {
            label: "Output".into(),
            format: "json".into(),
        }),
    }
}
