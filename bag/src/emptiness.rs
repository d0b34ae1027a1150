//! The loose-emptiness predicate behind [`RequestBag::has`](crate::RequestBag::has).

use serde_json::Value;

/// Returns `true` if a stored value counts as "not set" for `has`.
///
/// Exactly these values are empty: `null`, `false`, any number equal to zero,
/// the empty string, an empty array and an empty object. Everything else is
/// non-empty, including the string `"0"` and containers that only hold empty
/// members.
pub fn is_empty_value(value: &Value) -> bool {
  match value {
    Value::Null => true,
    Value::Bool(b) => !b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
    Value::String(s) => s.is_empty(),
    Value::Array(items) => items.is_empty(),
    Value::Object(map) => map.is_empty(),
  }
}
