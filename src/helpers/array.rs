// ABOUTME: Array helpers - slicing, joining, sorting, de-duplication, membership
// ABOUTME: Results stay sequences so they can feed further helper calls

use std::collections::HashSet;

use serde_json::Value;

use super::{coerce, insert, BlockCall, Helper, Registry};
use crate::engine::context::Scope;

pub fn register(registry: &mut Registry) {
    insert(registry, "after", Helper::Inline(after));
    insert(registry, "before", Helper::Inline(before));
    insert(registry, "itemAt", Helper::Inline(item_at));
    insert(registry, "join", Helper::Inline(join));
    insert(registry, "sort", Helper::Inline(sort));
    insert(registry, "unique", Helper::Inline(unique));
    insert(registry, "first", Helper::Inline(first));
    insert(registry, "last", Helper::Inline(last));
    insert(registry, "filter", Helper::Block(filter));
}

fn index_arg(args: &[Value], position: usize) -> Option<usize> {
    let n = args.get(position).and_then(coerce::as_number)?;
    // Clamp so downstream index arithmetic cannot overflow.
    Some(n.clamp(0.0, u32::MAX as f64) as usize)
}

/// Everything after the first `n` items.
fn after(args: &[Value], _scope: &Scope<'_>) -> Value {
    let (Some(items), Some(n)) = (
        args.first().and_then(coerce::as_sequence),
        index_arg(args, 1),
    ) else {
        return Value::Null;
    };
    Value::Array(items[n.min(items.len())..].to_vec())
}

/// Everything through index `n` inclusive.
fn before(args: &[Value], _scope: &Scope<'_>) -> Value {
    let (Some(items), Some(n)) = (
        args.first().and_then(coerce::as_sequence),
        index_arg(args, 1),
    ) else {
        return Value::Null;
    };
    Value::Array(items[..(n + 1).min(items.len())].to_vec())
}

fn item_at(args: &[Value], _scope: &Scope<'_>) -> Value {
    let (Some(items), Some(n)) = (
        args.first().and_then(coerce::as_sequence),
        index_arg(args, 1),
    ) else {
        return Value::Null;
    };
    items.get(n).cloned().unwrap_or(Value::Null)
}

fn join(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(items) = args.first().and_then(coerce::as_sequence) else {
        return Value::Null;
    };
    let separator = match args.get(1) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => coerce::render_value(other),
        None => ",".to_string(),
    };
    Value::String(
        items
            .iter()
            .map(coerce::render_value)
            .collect::<Vec<_>>()
            .join(&separator),
    )
}

/// Lexicographic ascending sort over the rendered form of each item.
fn sort(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(items) = args.first().and_then(coerce::as_sequence) else {
        return Value::Null;
    };
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| coerce::render_value(item));
    Value::Array(sorted)
}

/// Stable de-duplication preserving first-seen order.
fn unique(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(items) = args.first().and_then(coerce::as_sequence) else {
        return Value::Null;
    };
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        if seen.insert(coerce::render_value(item)) {
            result.push(item.clone());
        }
    }
    Value::Array(result)
}

/// First item, or the first `n` items as a sequence when a count is given.
fn first(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(items) = args.first().and_then(coerce::as_sequence) else {
        return Value::Null;
    };
    match index_arg(args, 1) {
        Some(n) => Value::Array(items[..n.min(items.len())].to_vec()),
        None => items.first().cloned().unwrap_or(Value::Null),
    }
}

/// Last item, or the last `n` items (in order) when a count is given.
fn last(args: &[Value], _scope: &Scope<'_>) -> Value {
    let Some(items) = args.first().and_then(coerce::as_sequence) else {
        return Value::Null;
    };
    match index_arg(args, 1) {
        Some(n) => Value::Array(items[items.len().saturating_sub(n)..].to_vec()),
        None => items.last().cloned().unwrap_or(Value::Null),
    }
}

/// Block helper: renders the then branch when the needle is present in the
/// sequence, comparing rendered forms.
fn filter(call: &BlockCall<'_>) -> Value {
    let found = match (
        call.args.first().and_then(coerce::as_sequence),
        call.args.get(1),
    ) {
        (Some(items), Some(needle)) => {
            let needle = coerce::render_value(needle);
            items.iter().any(|item| coerce::render_value(item) == needle)
        }
        _ => false,
    };
    call.branch(found)
}
