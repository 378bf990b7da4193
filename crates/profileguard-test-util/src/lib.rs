//! Shared test utilities for the profileguard workspace.
//!
//! This crate exists because `xtask` and the CLI integration tests both need
//! `normalize_nondeterministic` outside `#[cfg(test)]`.

use serde_json::Value;

const TIMESTAMP_KEYS: &[&str] = &["startedAt", "finishedAt", "recordedAt"];

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `tool.version` and `id` are replaced only when the root
///    object looks like a report envelope (`schema`, `tool`, `id`, `rules`, `run`).
///    Audit entries wrapping a report under `report` get the same treatment there.
/// 2. **Recursive**: timestamp keys are normalized at any depth because their
///    placeholder is fixed and cannot collide with profile data.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    normalize_envelope(&mut value);
    if let Some(report) = value.get_mut("report")
        && value_is_envelope(report)
    {
        normalize_envelope(report);
        if let Some(obj) = value.as_object_mut()
            && obj.contains_key("id")
        {
            obj.insert("id".to_string(), Value::String("__ID__".to_string()));
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn value_is_envelope(value: &Value) -> bool {
    value.as_object().is_some_and(|obj| {
        ["schema", "tool", "id", "rules", "run"]
            .iter()
            .all(|k| obj.contains_key(*k))
    })
}

fn normalize_envelope(value: &mut Value) {
    if !value_is_envelope(value) {
        return;
    }
    let Some(obj) = value.as_object_mut() else {
        return;
    };
    obj.insert("id".to_string(), Value::String("__ID__".to_string()));
    if let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
        && tool_obj.contains_key("version")
    {
        tool_obj.insert(
            "version".to_string(),
            Value::String("__VERSION__".to_string()),
        );
    }
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in TIMESTAMP_KEYS {
                if map.contains_key(*key) {
                    map.insert(
                        (*key).to_string(),
                        Value::String("__TIMESTAMP__".to_string()),
                    );
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
