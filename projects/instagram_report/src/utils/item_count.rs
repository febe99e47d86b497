use serde_json::Value;

/// Keys under which Metricool wraps a result list, checked in order.
const ENVELOPE_KEYS: [&str; 2] = ["data", "items"];

/// Number of items in a decoded response.
///
/// Arrays count their elements. Objects count the array under an envelope
/// key when one is present, otherwise their keys. `null` is empty and any
/// other scalar is a single item.
///
/// A wrapped list such as `{"items": [1, 2, 3]}` counts its contents (3), not
/// the wrapper's keys (1).
pub fn item_count(document: &Value) -> usize {
    match document {
        Value::Array(items) => items.len(),
        Value::Object(map) => ENVELOPE_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .map_or(map.len(), Vec::len),
        Value::Null => 0,
        Value::Bool(_) | Value::Number(_) | Value::String(_) => 1,
    }
}
