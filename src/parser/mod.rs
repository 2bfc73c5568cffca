// ABOUTME: Template parsing module for the stencil expression engine
// ABOUTME: Exposes the balance validator, segment scanner, and expression parser

pub mod error;
pub mod expression;
pub mod path;
pub mod scanner;

pub use error::{ParserError, Result};
pub use expression::Expression;
pub use path::ContextPath;
pub use scanner::{validate, Block, Segment};
