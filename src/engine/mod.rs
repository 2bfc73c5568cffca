// ABOUTME: Evaluation engine module - scope, evaluator, and the public processor
// ABOUTME: Exposes the three entry points the rest of the system consumes

pub mod context;
pub mod evaluator;
pub mod processor;

pub use context::Scope;
pub use evaluator::Evaluated;
pub use processor::{is_valid, process_object, process_string, TemplateEngine};
