// ABOUTME: Error types for template scanning and expression parsing
// ABOUTME: These never escape the public API - they select the no-op fallback path

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParserError {
    #[error("placeholder opened at byte {position} is never closed")]
    UnterminatedPlaceholder { position: usize },

    #[error("closing marker at byte {position} has no matching open")]
    StrayClose { position: usize },

    #[error("unexpected '{found}' inside placeholder at byte {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("unbalanced parentheses in expression '{expression}'")]
    UnbalancedParens { expression: String },

    #[error("block '{name}' is never closed")]
    UnclosedBlock { name: String },

    #[error("close tag '{found}' does not match open block '{expected}'")]
    MismatchedBlock { expected: String, found: String },

    #[error("close tag '{name}' has no matching open block")]
    StrayCloseTag { name: String },

    #[error("block '{name}' has more than one else branch")]
    DuplicateElse { name: String },

    #[error("empty placeholder expression")]
    EmptyExpression,

    #[error("invalid expression '{0}'")]
    InvalidExpression(String),

    #[error("unterminated string literal in expression '{0}'")]
    UnterminatedString(String),

    #[error("expression nesting exceeds {max} levels")]
    NestingTooDeep { max: usize },
}

pub type Result<T> = std::result::Result<T, ParserError>;
