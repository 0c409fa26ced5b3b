//! WASM entry points for the browser canvas.

use wasm_bindgen::prelude::*;

use crate::factory;
use crate::model::{NodeKind, Position};
use crate::validate;

/// Create a node of `kind` at canvas coordinates (`x`, `y`).
/// Returns `{status: "success", node}` or `{status: "error", error}`.
#[wasm_bindgen]
pub fn create_node(kind: &str, x: f64, y: f64) -> JsValue {
    let result = create_node_inner(kind, x, y);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn create_node_inner(kind: &str, x: f64, y: f64) -> CreateNodeResult {
    match kind.parse::<NodeKind>() {
        Ok(kind) => CreateNodeResult::Success(factory::create_node(kind, Position::new(x, y))),
        Err(e) => CreateNodeResult::Error(ErrorDto {
            message: e.to_string(),
        }),
    }
}

/// Check whether a `source_kind` node may connect to a `target_kind` node.
/// Returns `{status: "success", allowed}` or `{status: "error", error}` for
/// unrecognized kind strings.
#[wasm_bindgen]
pub fn is_valid_connection(source_kind: &str, target_kind: &str) -> JsValue {
    let result = is_valid_connection_inner(source_kind, target_kind);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn is_valid_connection_inner(source_kind: &str, target_kind: &str) -> ConnectionResult {
    let source = match source_kind.parse::<NodeKind>() {
        Ok(k) => k,
        Err(e) => {
            return ConnectionResult::Error(ErrorDto {
                message: e.to_string(),
            });
        }
    };
    let target = match target_kind.parse::<NodeKind>() {
        Ok(k) => k,
        Err(e) => {
            return ConnectionResult::Error(ErrorDto {
                message: e.to_string(),
            });
        }
    };
    ConnectionResult::Success {
        allowed: validate::is_valid_connection(source, target),
    }
}

/// Lint a flow document JSON: structural rules plus every node's config rules.
/// Returns a JSON array of diagnostics; a parse failure is itself reported as
/// a single `P001` diagnostic.
#[wasm_bindgen]
pub fn validate_flow(document_json: &str) -> JsValue {
    let result = validate_flow_inner(document_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_flow_inner(document_json: &str) -> Vec<DiagnosticDto> {
    let document: crate::document::FlowDocument = match serde_json::from_str(document_json) {
        Ok(d) => d,
        Err(e) => {
            return vec![DiagnosticDto {
                code: "P001".into(),
                message: format!("Failed to parse flow document: {}", e),
                node_id: None,
            }];
        }
    };

    // Lint runs over the raw document, so broken references are reported as
    // diagnostics instead of failing the import outright.
    let flow = crate::model::Flow {
        id: String::new(),
        nodes: document.nodes,
        edges: document.edges,
        viewport: document.viewport,
    };
    validate::validate_flow(&flow)
        .into_iter()
        .map(DiagnosticDto::from)
        .collect()
}

/// Validate a single node JSON against its kind's config rules.
/// Returns a JSON array of `{field, message}` errors.
#[wasm_bindgen]
pub fn validate_node(node_json: &str) -> JsValue {
    let result = validate_node_inner(node_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_node_inner(node_json: &str) -> Vec<DiagnosticDto> {
    let node = match serde_json::from_str::<crate::model::Node>(node_json) {
        Ok(n) => n,
        Err(e) => {
            return vec![DiagnosticDto {
                code: "P001".into(),
                message: format!("Failed to parse node JSON: {}", e),
                node_id: None,
            }];
        }
    };

    validate::validate_node(&node)
        .into_iter()
        .map(DiagnosticDto::from)
        .collect()
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
struct ErrorDto {
    message: String,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiagnosticDto {
    code: String,
    message: String,
    node_id: Option<String>,
}

impl From<validate::FlowDiagnostic> for DiagnosticDto {
    fn from(d: validate::FlowDiagnostic) -> Self {
        DiagnosticDto {
            code: d.code.to_string(),
            message: d.message,
            node_id: d.node_id,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum CreateNodeResult {
    #[serde(rename = "success")]
    Success(crate::model::Node),
    #[serde(rename = "error")]
    Error(ErrorDto),
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum ConnectionResult {
    #[serde(rename = "success")]
    Success { allowed: bool },
    #[serde(rename = "error")]
    Error(ErrorDto),
}
