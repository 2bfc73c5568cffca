// ABOUTME: Shared value coercion and stringification rules for helpers
// ABOUTME: Arrays comma-join, objects render as compact JSON, null renders empty

use serde_json::Value;

/// Best-effort numeric coercion. Numeric strings count, booleans count as
/// 0/1, everything else is absent.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

pub fn as_sequence(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

/// Truthiness for the logic helpers: empty strings, zero, null, and empty
/// sequences are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Render a value for substitution into template output.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Minimal decimal representation: no trailing zeros, no decimal point for
/// integral values.
pub fn render_number(number: &serde_json::Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    match number.as_f64() {
        Some(float) => format_float(float),
        None => number.to_string(),
    }
}

pub fn format_float(float: f64) -> String {
    if float.fract() == 0.0 && float.abs() < 9_007_199_254_740_992.0 {
        format!("{}", float as i64)
    } else {
        format!("{}", float)
    }
}

/// Wrap a computed float, collapsing integral results to integer numbers so
/// they render without a decimal point.
pub fn number_value(float: f64) -> Value {
    if !float.is_finite() {
        return Value::Null;
    }
    if float.fract() == 0.0 && float.abs() < 9_007_199_254_740_992.0 {
        return Value::from(float as i64);
    }
    serde_json::Number::from_f64(float)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(as_number(&json!(10)), Some(10.0));
        assert_eq!(as_number(&json!("50")), Some(50.0));
        assert_eq!(as_number(&json!(" 1.5 ")), Some(1.5));
        assert_eq!(as_number(&json!("nope")), None);
        assert_eq!(as_number(&json!(null)), None);
    }

    #[test]
    fn test_render_array_comma_joins() {
        assert_eq!(
            render_value(&json!(["person", "how", "are", "you"])),
            "person,how,are,you"
        );
    }

    #[test]
    fn test_render_object_compact_json() {
        assert_eq!(render_value(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn test_render_number_minimal() {
        assert_eq!(render_value(&json!(2.0)), "2");
        assert_eq!(render_value(&json!(1.5)), "1.5");
        assert_eq!(render_value(&json!(20)), "20");
    }

    #[test]
    fn test_null_renders_empty() {
        assert_eq!(render_value(&json!(null)), "");
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(1)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(null)));
    }
}
