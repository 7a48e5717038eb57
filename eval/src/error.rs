//! Evaluation error types.

use thiserror::Error;

/// Result type for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that abort an evaluation.
///
/// Hitting the shape cap is *not* an error: the evaluation stops gracefully
/// and the shapes produced so far are returned.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("grammar has no startshape")]
    MissingStartShape,

    #[error(transparent)]
    Rule(#[from] cfdg_grammar::GrammarError),
}
