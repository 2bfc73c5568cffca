// ABOUTME: Main library module for the stencil template expression engine
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod engine;
pub mod helpers;
pub mod parser;

// Re-export commonly used types
pub use engine::{is_valid, process_object, process_string, Scope, TemplateEngine};
pub use helpers::{BlockCall, Helper};
pub use parser::{ContextPath, Expression};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
