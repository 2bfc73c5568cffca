// ABOUTME: Evaluation scope - borrowed context root, block binding, per-call clock
// ABOUTME: Resolves context paths against nested JSON mappings and sequences

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::parser::ContextPath;

/// The read-only view a single evaluation runs against.
///
/// The context value is borrowed for the duration of one `process_*` call
/// and never mutated. Block helpers that bind a current value (`forIn`)
/// derive child scopes; the wall clock is read once at construction so every
/// `now`-relative helper inside one call sees the same instant.
#[derive(Debug, Clone)]
pub struct Scope<'a> {
    root: &'a Value,
    current: Option<&'a Value>,
    now: DateTime<Utc>,
}

impl<'a> Scope<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self {
            root,
            current: None,
            now: Utc::now(),
        }
    }

    /// Derive a child scope with `.` bound to `value`.
    pub fn with_current(&self, value: &'a Value) -> Self {
        Self {
            root: self.root,
            current: Some(value),
            now: self.now,
        }
    }

    /// The instant this evaluation started.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Resolve a context path. Missing paths are absent, not errors.
    ///
    /// Mapping segments match keys; sequence segments match numeric indexes.
    pub fn lookup(&self, path: &ContextPath) -> Option<&'a Value> {
        if path.is_current() {
            return self.current;
        }
        let mut node = self.root;
        for segment in path.segments() {
            node = match node {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(node)
    }
}
