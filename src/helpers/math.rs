// ABOUTME: Math helpers - abs, add, subtract, avg, times
// ABOUTME: Operands coerce through as_number; missing operands yield null

use serde_json::Value;

use super::{coerce, insert, Helper, Registry};
use crate::engine::context::Scope;

pub fn register(registry: &mut Registry) {
    insert(registry, "abs", Helper::Inline(abs));
    insert(registry, "add", Helper::Inline(add));
    insert(registry, "subtract", Helper::Inline(subtract));
    insert(registry, "avg", Helper::Inline(avg));
    insert(registry, "times", Helper::Inline(times));
}

fn abs(args: &[Value], _scope: &Scope<'_>) -> Value {
    match args.first().and_then(coerce::as_number) {
        Some(n) => coerce::number_value(n.abs()),
        None => Value::Null,
    }
}

fn add(args: &[Value], _scope: &Scope<'_>) -> Value {
    binary(args, |a, b| a + b)
}

fn subtract(args: &[Value], _scope: &Scope<'_>) -> Value {
    binary(args, |a, b| a - b)
}

fn times(args: &[Value], _scope: &Scope<'_>) -> Value {
    binary(args, |a, b| a * b)
}

/// Arithmetic mean over every numeric argument.
fn avg(args: &[Value], _scope: &Scope<'_>) -> Value {
    let numbers: Vec<f64> = args.iter().filter_map(coerce::as_number).collect();
    if numbers.is_empty() {
        return Value::Null;
    }
    coerce::number_value(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

fn binary(args: &[Value], op: fn(f64, f64) -> f64) -> Value {
    let a = args.first().and_then(coerce::as_number);
    let b = args.get(1).and_then(coerce::as_number);
    match (a, b) {
        (Some(a), Some(b)) => coerce::number_value(op(a, b)),
        _ => Value::Null,
    }
}
