//! JSON patch helpers for config updates coming from the canvas forms.

use serde_json::Value;

/// Field names the canvas edits as free text but the model stores as integers.
const NUMERIC_TEXT_FIELDS: [&str; 5] = ["ttl", "statusCode", "limit", "windowSeconds", "timeoutMs"];

/// Recursively merge `patch` into `base`. Objects merge key by key; any other
/// value replaces the base value outright.
pub fn deep_merge(base: &mut Value, patch: &Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge(base_value, patch_value),
                    None => {
                        base_map.insert(key.clone(), patch_value.clone());
                    }
                }
            }
        }
        (base, patch) => *base = patch.clone(),
    }
}

/// Coerce numeric-text fields (`"300"` → `300`) in the patch. A string that
/// does not parse is left as-is and rejected later by the schema. The mock
/// `headers` map is free-form string→string; its keys may shadow numeric
/// field names, so coercion never descends into it.
pub fn coerce_numeric_strings(value: &mut Value) {
    let Value::Object(map) = value else { return };
    for (key, entry) in map.iter_mut() {
        if NUMERIC_TEXT_FIELDS.contains(&key.as_str()) {
            if let Value::String(text) = entry {
                if let Ok(n) = text.trim().parse::<i64>() {
                    *entry = Value::from(n);
                }
            }
            continue;
        }
        if key == "headers" {
            continue;
        }
        coerce_numeric_strings(entry);
    }
}
