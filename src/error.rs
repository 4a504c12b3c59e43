/// Lexing and parsing errors.
///
/// Defines all error types raised before evaluation starts: characters the
/// lexer does not recognise and token sequences the grammar cannot reduce.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while reducing a parse tree: unknown functions,
/// arity mismatches, domain violations, expired time budgets and failed
/// worker threads.
pub mod runtime_error;

pub use parse_error::{LexError, ParseError};
pub use runtime_error::{TimeoutError, ValueError, WorkerError};

/// Every way an evaluation can fail.
///
/// Each category stays distinguishable so the caller can render a message
/// that fits it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Tokenization failed.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form an expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A semantic failure during reduction.
    #[error(transparent)]
    Value(#[from] ValueError),
    /// A function call exceeded its time budget.
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
    /// A function call's worker thread failed.
    #[error(transparent)]
    Worker(#[from] WorkerError),
}
