// ABOUTME: The literal helper - returns its argument unchanged and typed
// ABOUTME: The string processor bypasses stringification when it is the sole placeholder

use serde_json::Value;

use super::{insert, Helper, Registry};
use crate::engine::context::Scope;

pub fn register(registry: &mut Registry) {
    insert(registry, "literal", Helper::Inline(literal));
}

fn literal(args: &[Value], _scope: &Scope<'_>) -> Value {
    args.first().cloned().unwrap_or(Value::Null)
}
