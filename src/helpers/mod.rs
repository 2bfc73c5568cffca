// ABOUTME: Helper catalogue - named pure functions grouped by category
// ABOUTME: Registered once at engine construction, read-only afterwards

use std::collections::HashMap;

use serde_json::Value;

use crate::engine::context::Scope;

pub mod array;
pub mod coerce;
pub mod date;
pub mod literal;
pub mod logic;
pub mod math;
pub mod number;
pub mod object;
pub mod string;
pub mod url;

/// An inline helper: positional arguments in, value out. Helpers coerce
/// their own inputs and fall back to null rather than erroring.
pub type InlineFn = fn(&[Value], &Scope<'_>) -> Value;

/// A block helper: decides between its then/else branches (or iterates),
/// rendering branch text through the supplied callback.
pub type BlockFn = fn(&BlockCall<'_>) -> Value;

pub enum Helper {
    Inline(InlineFn),
    Block(BlockFn),
}

pub type RenderFn<'a> = &'a dyn Fn(&str, &Scope<'_>) -> String;

/// Everything a block helper needs: evaluated arguments, the raw branch
/// text, the enclosing scope, and a callback that renders branch text
/// (resolving any nested placeholders) in a given scope.
pub struct BlockCall<'a> {
    pub args: &'a [Value],
    pub body: &'a str,
    pub else_body: Option<&'a str>,
    pub scope: &'a Scope<'a>,
    pub render: RenderFn<'a>,
}

impl BlockCall<'_> {
    /// Render the then branch when the test holds, otherwise the else
    /// branch. A missing else branch renders empty.
    pub fn branch(&self, condition: bool) -> Value {
        let text = if condition {
            Some(self.body)
        } else {
            self.else_body
        };
        match text {
            Some(text) => Value::String((self.render)(text, self.scope)),
            None => Value::String(String::new()),
        }
    }
}

pub type Registry = HashMap<&'static str, Helper>;

/// Build the full catalogue. Called once per engine.
pub fn register_all() -> Registry {
    let mut registry = Registry::new();
    math::register(&mut registry);
    array::register(&mut registry);
    string::register(&mut registry);
    number::register(&mut registry);
    date::register(&mut registry);
    url::register(&mut registry);
    logic::register(&mut registry);
    object::register(&mut registry);
    literal::register(&mut registry);
    registry
}

/// Register one helper. A name collision is a programmer error and aborts
/// at startup rather than shadowing silently at call time.
pub fn insert(registry: &mut Registry, name: &'static str, helper: Helper) {
    if registry.insert(name, helper).is_some() {
        panic!("duplicate helper registration: {name}");
    }
}
