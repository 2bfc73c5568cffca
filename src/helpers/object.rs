// ABOUTME: Object and JSON helpers - serialization, parsing, entry iteration
// ABOUTME: forIn binds the current entry value to "." inside its block body

use serde_json::Value;

use super::{coerce, insert, BlockCall, Helper, Registry};
use crate::engine::context::Scope;

pub fn register(registry: &mut Registry) {
    insert(registry, "object", Helper::Inline(object));
    insert(registry, "JSONstringify", Helper::Inline(object));
    insert(registry, "JSONparse", Helper::Inline(json_parse));
    insert(registry, "forIn", Helper::Block(for_in));
}

/// Compact JSON text of any value.
fn object(args: &[Value], _scope: &Scope<'_>) -> Value {
    match args.first() {
        Some(Value::Null) | None => Value::Null,
        Some(value) => Value::String(serde_json::to_string(value).unwrap_or_default()),
    }
}

/// Parse JSON text back into a structured value for further helper
/// chaining. Unparseable input is absent, not an error.
fn json_parse(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(Value::String(text)) = args.first() else {
        return Value::Null;
    };
    serde_json::from_str(text).unwrap_or(Value::Null)
}

/// Block helper iterating mapping entries (or sequence items) in insertion
/// order, rendering the body once per entry with `.` bound to the value.
/// Empty or non-container input renders the else branch.
fn for_in(call: &BlockCall<'_>) -> Value {
    let mut out = String::new();
    match call.args.first() {
        Some(Value::Object(map)) if !map.is_empty() => {
            for value in map.values() {
                out.push_str(&(call.render)(call.body, &call.scope.with_current(value)));
            }
        }
        Some(Value::Array(items)) if !items.is_empty() => {
            for value in items {
                out.push_str(&(call.render)(call.body, &call.scope.with_current(value)));
            }
        }
        _ => return call.branch(false),
    }
    Value::String(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_serializes_compact() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(object(&[json!({"a": 1})], &scope), json!("{\"a\":1}"));
    }

    #[test]
    fn test_json_parse_round_trips() {
        let context = json!({});
        let scope = Scope::new(&context);
        let parsed = json_parse(&[json!("{\"a\":1, \"b\":2}")], &scope);
        assert_eq!(parsed, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_json_parse_bad_input_is_null() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(json_parse(&[json!("{nope")], &scope), Value::Null);
        assert_eq!(json_parse(&[json!(42)], &scope), Value::Null);
    }
}
