//! Per-kind configuration rules.
//!
//! Validation runs where an external collaborator commits edited configuration
//! to the mutator, not continuously. All field errors are collected, not
//! first-fail, so the UI can flag every offending input at once. Field names
//! in errors use the wire (camelCase) spelling.

use crate::error::ConfigFieldError;
use crate::model::NodeConfig;

/// Validate a config against its own kind's rules. Returns all errors found.
pub fn validate_config(config: &NodeConfig) -> Vec<ConfigFieldError> {
    let mut errors = Vec::new();

    match config {
        NodeConfig::Input(c) => {
            require_non_empty(&mut errors, "label", &c.label);
            require_non_empty(&mut errors, "path", &c.path);
            require_non_empty(&mut errors, "method", &c.method);
        }
        NodeConfig::Endpoint(c) => {
            require_non_empty(&mut errors, "label", &c.label);
            require_non_empty(&mut errors, "targetUrl", &c.target_url);
            require_non_empty(&mut errors, "method", &c.method);
            if c.timeout_ms < 0 {
                errors.push(ConfigFieldError::new(
                    "timeoutMs",
                    "must not be negative",
                ));
            }
        }
        NodeConfig::Transform(c) => {
            require_non_empty(&mut errors, "label", &c.label);
            require_non_empty(&mut errors, "transformType", &c.transform_type);
            // transformScript may be empty: pass-through transform.
        }
        NodeConfig::Auth(c) => {
            require_non_empty(&mut errors, "label", &c.label);
            require_non_empty(&mut errors, "scheme", &c.scheme);
        }
        NodeConfig::RateLimit(c) => {
            require_non_empty(&mut errors, "label", &c.label);
            if c.limit < 0 {
                errors.push(ConfigFieldError::new("limit", "must not be negative"));
            }
            if c.window_seconds < 1 {
                errors.push(ConfigFieldError::new(
                    "windowSeconds",
                    "must be at least 1",
                ));
            }
        }
        NodeConfig::Cache(c) => {
            require_non_empty(&mut errors, "label", &c.label);
            if c.ttl < 0 {
                errors.push(ConfigFieldError::new("ttl", "must not be negative"));
            }
            require_non_empty(&mut errors, "keyTemplate", &c.key_template);
        }
        NodeConfig::Mock(c) => {
            require_non_empty(&mut errors, "label", &c.label);
            let status = c.mock_response.status_code;
            if !(100..=599).contains(&status) {
                errors.push(ConfigFieldError::new(
                    "mockResponse.statusCode",
                    format!("'{}' is not a valid HTTP status code (100-599)", status),
                ));
            }
        }
        NodeConfig::Validator(c) => {
            require_non_empty(&mut errors, "label", &c.label);
            for (i, rule) in c.rules.iter().enumerate() {
                if rule.field.trim().is_empty() {
                    errors.push(ConfigFieldError::new(
                        &format!("rules[{}].field", i),
                        "must not be empty",
                    ));
                }
            }
        }
        NodeConfig::Output(c) => {
            require_non_empty(&mut errors, "label", &c.label);
            require_non_empty(&mut errors, "format", &c.format);
        }
    }

    errors
}

fn require_non_empty(errors: &mut Vec<ConfigFieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ConfigFieldError::new(field, "must not be empty"));
    }
}
