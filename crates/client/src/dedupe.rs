//! Device listing post-processing.
//!
//! The tenant device listing often carries dozens of devices of the same
//! kind. `unique_by_device_type` reduces it to one representative per
//! device type, which is what the dashboard's type filter shows.

use std::collections::HashSet;

use serde_json::Value;

/// Keep the first element for each distinct truthy `device_type` value.
///
/// Elements whose `device_type` is missing or falsy (null, `false`, `0`,
/// empty string, empty array, empty object) are dropped. Input order is
/// preserved for the survivors; the input itself is not modified, and
/// re-applying the filter to its own output is a no-op.
pub fn unique_by_device_type(items: &[Value]) -> Vec<Value> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for item in items {
        let Some(device_type) = item.get("device_type") else {
            continue;
        };
        if !is_truthy(device_type) {
            continue;
        }
        // Canonical JSON text keys the seen-set, so 1 and "1" stay distinct.
        if seen.insert(device_type.to_string()) {
            unique.push(item.clone());
        }
    }

    unique
}

/// JSON truthiness: null, false, 0, "", [], {} are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
