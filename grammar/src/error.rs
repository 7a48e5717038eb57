//! Grammar error types.

use thiserror::Error;

/// Result type for grammar operations.
pub type GrammarResult<T> = Result<T, GrammarError>;

/// Errors that can occur when resolving rules.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("Rule not found: {name}")]
    RuleNotFound { name: String },
}

impl GrammarError {
    pub fn rule_not_found(name: impl Into<String>) -> Self {
        Self::RuleNotFound { name: name.into() }
    }
}
