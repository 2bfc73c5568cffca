// ABOUTME: Comparison and boolean block helpers - lt, gt, gte, lte, and, or
// ABOUTME: String operands coerce to numbers when compared against numeric values

use std::cmp::Ordering;

use serde_json::Value;

use super::{coerce, insert, BlockCall, Helper, Registry};

pub fn register(registry: &mut Registry) {
    insert(registry, "lt", Helper::Block(lt));
    insert(registry, "gt", Helper::Block(gt));
    insert(registry, "gte", Helper::Block(gte));
    insert(registry, "lte", Helper::Block(lte));
    insert(registry, "and", Helper::Block(and));
    insert(registry, "or", Helper::Block(or));
}

/// Compare the first two operands. Numeric coercion applies when both sides
/// coerce (so `gte 51 "50"` compares numbers); otherwise the rendered forms
/// compare lexicographically. Missing operands fail the test.
fn compare(args: &[Value]) -> Option<Ordering> {
    let a = args.first()?;
    let b = args.get(1)?;
    if a.is_null() || b.is_null() {
        return None;
    }
    if let (Some(x), Some(y)) = (coerce::as_number(a), coerce::as_number(b)) {
        return x.partial_cmp(&y);
    }
    Some(coerce::render_value(a).cmp(&coerce::render_value(b)))
}

fn lt(call: &BlockCall<'_>) -> Value {
    call.branch(matches!(compare(call.args), Some(Ordering::Less)))
}

fn gt(call: &BlockCall<'_>) -> Value {
    call.branch(matches!(compare(call.args), Some(Ordering::Greater)))
}

fn gte(call: &BlockCall<'_>) -> Value {
    call.branch(matches!(
        compare(call.args),
        Some(Ordering::Greater) | Some(Ordering::Equal)
    ))
}

fn lte(call: &BlockCall<'_>) -> Value {
    call.branch(matches!(
        compare(call.args),
        Some(Ordering::Less) | Some(Ordering::Equal)
    ))
}

fn and(call: &BlockCall<'_>) -> Value {
    call.branch(!call.args.is_empty() && call.args.iter().all(coerce::is_truthy))
}

fn or(call: &BlockCall<'_>) -> Value {
    call.branch(call.args.iter().any(coerce::is_truthy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_comparisons() {
        assert_eq!(compare(&[json!(10), json!(15)]), Some(Ordering::Less));
        assert_eq!(compare(&[json!(15), json!(10)]), Some(Ordering::Greater));
        assert_eq!(compare(&[json!(10), json!(10)]), Some(Ordering::Equal));
    }

    #[test]
    fn test_string_operand_coerces() {
        assert_eq!(compare(&[json!(51), json!("50")]), Some(Ordering::Greater));
    }

    #[test]
    fn test_missing_operand_fails() {
        assert_eq!(compare(&[json!(10)]), None);
        assert_eq!(compare(&[json!(10), json!(null)]), None);
    }

    #[test]
    fn test_lexicographic_fallback() {
        assert_eq!(compare(&[json!("apple"), json!("pear")]), Some(Ordering::Less));
    }
}
