// ABOUTME: The public template engine - process_string, process_object, is_valid
// ABOUTME: Maps every internal failure to the return-input-unchanged contract

use lazy_static::lazy_static;
use serde_json::Value;
use tracing::{debug, trace};

use crate::helpers::{self, coerce, BlockCall, Helper, Registry};
use crate::parser::expression::{self, Expression};
use crate::parser::scanner::{self, Block, Segment};

use super::context::Scope;
use super::evaluator::{evaluate, Evaluated};

/// Nested records deeper than this fail closed: the subtree is returned
/// unresolved rather than walked further.
const MAX_OBJECT_DEPTH: usize = 64;

lazy_static! {
    static ref DEFAULT_ENGINE: TemplateEngine = TemplateEngine::new();
}

/// The template engine: an immutable helper catalogue plus the processing
/// entry points. One engine serves any number of concurrent calls since
/// every call allocates its own parse state.
pub struct TemplateEngine {
    registry: Registry,
}

impl TemplateEngine {
    /// Create an engine with the full built-in helper catalogue.
    pub fn new() -> Self {
        let registry = helpers::register_all();
        debug!("registered {} template helpers", registry.len());
        Self { registry }
    }

    /// Add a custom helper before first use. Panics on name collision,
    /// matching the registration contract of the built-ins.
    pub fn with_helper(mut self, name: &'static str, helper: Helper) -> Self {
        helpers::insert(&mut self.registry, name, helper);
        self
    }

    /// Pure syntactic validity check. Never errors, independent of the
    /// helper catalogue and context.
    pub fn is_valid(&self, template: &str) -> bool {
        scanner::validate(template)
    }

    /// Evaluate every placeholder in `template` against `context`.
    ///
    /// Returns a string with placeholders substituted - unless the whole
    /// template is a single `literal` placeholder, in which case the native
    /// value comes back untouched. Malformed templates come back unchanged.
    pub fn process_string(&self, template: &str, context: &Value) -> Value {
        let scope = Scope::new(context);
        self.process_scoped(template, &scope)
    }

    /// Walk a nested record, applying `process_string` to every string
    /// leaf. Structure, key order, and non-string leaves are preserved.
    pub fn process_object(&self, value: &Value, context: &Value) -> Value {
        let scope = Scope::new(context);
        self.process_node(value, &scope, 0)
    }

    fn process_scoped(&self, template: &str, scope: &Scope<'_>) -> Value {
        let segments = match scanner::scan(template) {
            Ok(segments) => segments,
            Err(error) => {
                trace!(%error, "template failed validation, returning input unchanged");
                return Value::String(template.to_string());
            }
        };
        if let Some(value) = self.literal_shortcut(&segments, scope) {
            return value;
        }
        let mut out = String::new();
        for segment in &segments {
            self.render_segment(segment, scope, &mut out);
        }
        Value::String(out)
    }

    /// Type preservation: a template that is exactly one `literal`
    /// placeholder (modulo surrounding whitespace) returns its native value
    /// instead of a stringified substitution.
    fn literal_shortcut(&self, segments: &[Segment], scope: &Scope<'_>) -> Option<Value> {
        let mut body = None;
        for segment in segments {
            match segment {
                Segment::Text(text) if text.trim().is_empty() => {}
                Segment::Placeholder { body: found, .. } if body.is_none() => {
                    body = Some(found)
                }
                _ => return None,
            }
        }
        let expression = expression::parse(body?).ok()?;
        let Expression::Call { ref name, .. } = expression else {
            return None;
        };
        if name != "literal" {
            return None;
        }
        match evaluate(&expression, scope, &self.registry) {
            Evaluated::Resolved(value) => Some(value),
            Evaluated::Unresolved => None,
        }
    }

    fn render_segment(&self, segment: &Segment, scope: &Scope<'_>, out: &mut String) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder { raw, body } => match expression::parse(body) {
                Ok(expression) => match evaluate(&expression, scope, &self.registry) {
                    Evaluated::Resolved(value) => out.push_str(&coerce::render_value(&value)),
                    Evaluated::Unresolved => out.push_str(raw),
                },
                Err(error) => {
                    debug!(%error, "unparseable placeholder expression");
                    out.push_str(raw);
                }
            },
            Segment::Block(block) => match self.render_block(block, scope) {
                Some(text) => out.push_str(&text),
                None => out.push_str(&block.raw),
            },
        }
    }

    /// Run a block helper. `None` means the block is unresolvable and its
    /// raw text should be emitted verbatim.
    fn render_block(&self, block: &Block, scope: &Scope<'_>) -> Option<String> {
        let function = match self.registry.get(block.name.as_str()) {
            Some(Helper::Block(function)) => *function,
            _ => {
                debug!(helper = %block.name, "unknown block helper");
                return None;
            }
        };
        let expressions = expression::parse_args(&block.args).ok()?;
        let mut values = Vec::with_capacity(expressions.len());
        for expression in &expressions {
            match evaluate(expression, scope, &self.registry) {
                Evaluated::Resolved(value) => values.push(value),
                Evaluated::Unresolved => return None,
            }
        }
        let render: &dyn Fn(&str, &Scope<'_>) -> String = &|text, scope| {
            match self.process_scoped(text, scope) {
                Value::String(text) => text,
                other => coerce::render_value(&other),
            }
        };
        let call = BlockCall {
            args: &values,
            body: &block.body,
            else_body: block.else_body.as_deref(),
            scope,
            render,
        };
        Some(coerce::render_value(&function(&call)))
    }

    fn process_node(&self, value: &Value, scope: &Scope<'_>, depth: usize) -> Value {
        if depth >= MAX_OBJECT_DEPTH {
            trace!("record nesting exceeds {MAX_OBJECT_DEPTH} levels, leaving subtree unresolved");
            return value.clone();
        }
        match value {
            Value::String(text) => self.process_scoped(text, scope),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.process_node(item, scope, depth + 1))
                    .collect(),
            ),
            Value::Object(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (key, item) in map {
                    out.insert(key.clone(), self.process_node(item, scope, depth + 1));
                }
                Value::Object(out)
            }
            other => other.clone(),
        }
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Syntactic validity of a template, via the shared default engine.
pub fn is_valid(template: &str) -> bool {
    DEFAULT_ENGINE.is_valid(template)
}

/// Evaluate and substitute placeholders in one string.
pub fn process_string(template: &str, context: &Value) -> Value {
    DEFAULT_ENGINE.process_string(template, context)
}

/// Leaf-wise template processing over a nested record.
pub fn process_object(value: &Value, context: &Value) -> Value {
    DEFAULT_ENGINE.process_object(value, context)
}
