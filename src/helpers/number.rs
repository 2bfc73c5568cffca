// ABOUTME: Number formatting helpers - thousands separators, phone numbers,
// ABOUTME: significant-digit precision, and humanized byte sizes

use serde_json::Value;

use super::{coerce, insert, Helper, Registry};
use crate::engine::context::Scope;

const BYTE_UNITS: [&str; 6] = ["B", "kB", "MB", "GB", "TB", "PB"];

pub fn register(registry: &mut Registry) {
    insert(registry, "addCommas", Helper::Inline(add_commas));
    insert(registry, "phoneNumber", Helper::Inline(phone_number));
    insert(registry, "toPrecision", Helper::Inline(to_precision));
    insert(registry, "bytes", Helper::Inline(bytes));
}

/// Thousands separators in the integer part: 10000000 -> "10,000,000".
fn add_commas(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(n) = args.first().and_then(coerce::as_number) else {
        return Value::Null;
    };
    let rendered = coerce::format_float(n);
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), Some(fraction.to_string())),
        None => (rendered, None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits.to_string()),
        None => ("", integer),
    };

    let mut grouped = String::new();
    for (index, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - index;
        if index > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut result = format!("{sign}{grouped}");
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(&fraction);
    }
    Value::String(result)
}

/// US-style grouping of the last ten digits: 4490102030 -> "(449) 010-2030".
/// Inputs with fewer than ten digits pass through as their digit string.
fn phone_number(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(raw) = args.first() else {
        return Value::Null;
    };
    let digits: String = coerce::render_value(raw)
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.len() < 10 {
        return Value::String(digits);
    }
    let tail = &digits[digits.len() - 10..];
    Value::String(format!("({}) {}-{}", &tail[..3], &tail[3..6], &tail[6..]))
}

/// Round to `n` significant digits: toPrecision(1.222222222, 2) -> "1.2".
fn to_precision(args: &[Value], _scope: &Scope<'_>) -> Value {
    let (Some(n), Some(digits)) = (
        args.first().and_then(coerce::as_number),
        args.get(1).and_then(coerce::as_number),
    ) else {
        return Value::Null;
    };
    let digits = (digits as i32).clamp(1, 17);
    if n == 0.0 {
        return Value::String(format!("{:.*}", (digits - 1) as usize, 0.0));
    }
    let exponent = n.abs().log10().floor() as i32;
    let decimals = digits - 1 - exponent;
    if decimals >= 0 {
        Value::String(format!("{:.*}", decimals as usize, n))
    } else {
        let scale = 10f64.powi(-decimals);
        Value::String(coerce::format_float((n / scale).round() * scale))
    }
}

/// Humanized decimal byte size: 1000000 -> "1 MB", 1500 -> "1.5 kB".
/// At most two decimals, trailing zeros trimmed.
fn bytes(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(n) = args.first().and_then(coerce::as_number) else {
        return Value::Null;
    };
    if n < 1.0 {
        return Value::String("0 B".to_string());
    }
    let exponent = ((n.log10() / 3.0).floor() as usize).min(BYTE_UNITS.len() - 1);
    let scaled = n / 1000f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    Value::String(format!(
        "{} {}",
        coerce::format_float(rounded),
        BYTE_UNITS[exponent]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_commas() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(
            add_commas(&[json!(10000000)], &scope),
            json!("10,000,000")
        );
        assert_eq!(add_commas(&[json!(999)], &scope), json!("999"));
        assert_eq!(add_commas(&[json!(-1234567)], &scope), json!("-1,234,567"));
        assert_eq!(add_commas(&[json!(1234.5)], &scope), json!("1,234.5"));
    }

    #[test]
    fn test_phone_number() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(
            phone_number(&[json!(4490102030u64)], &scope),
            json!("(449) 010-2030")
        );
        assert_eq!(phone_number(&[json!("123")], &scope), json!("123"));
    }

    #[test]
    fn test_to_precision() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(
            to_precision(&[json!(1.222222222), json!(2)], &scope),
            json!("1.2")
        );
        assert_eq!(
            to_precision(&[json!(123.0), json!(2)], &scope),
            json!("120")
        );
    }

    #[test]
    fn test_bytes() {
        let context = json!({});
        let scope = Scope::new(&context);
        assert_eq!(bytes(&[json!(1000000)], &scope), json!("1 MB"));
        assert_eq!(bytes(&[json!(1500)], &scope), json!("1.5 kB"));
        assert_eq!(bytes(&[json!(999)], &scope), json!("999 B"));
        assert_eq!(bytes(&[json!(0)], &scope), json!("0 B"));
    }
}
