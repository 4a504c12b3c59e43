//! # ratcalc
//!
//! ratcalc evaluates arithmetic expressions exactly.
//! Literals become arbitrary-precision fractions, `+ - * / % ^` stay exact,
//! and a small set of named functions (`sqrt`, `log`, `fact`, the
//! trigonometric functions and a few more) run under a time budget. Answers
//! come back as a reduced fraction plus a decimal approximation when the
//! value is not an integer.
//!
//! ```
//! let answer = ratcalc::evaluate("2 + 3 * sqrt(16)").unwrap();
//! assert_eq!(answer.to_string(), "14");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::LazyLock;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that
/// represent an expression as a tree. The tree is built by the parser and
/// reduced by the evaluator.
///
/// # Responsibilities
/// - Defines one node type per production.
/// - Attaches character positions to nodes for error reporting.
/// - Keeps the raw text of function arguments for `debug`.
pub mod ast;
/// Settings shared by every evaluation, such as the time budget.
pub mod config;
/// Provides the error types for lexing, parsing and evaluation.
///
/// This module defines every way an evaluation can fail. Each category is a
/// distinct type so callers can render a message that fits it.
///
/// # Responsibilities
/// - Defines error enums for the lexer, the parser and the evaluator.
/// - Attaches positions and function names for context.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together lexing, parsing, reduction and formatting. It
/// exposes the [`Calculator`] that runs one expression end to end.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and formatter.
/// - Provides entry points for parsing and evaluating expressions.
/// - Manages the flow of values and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u64`, `u32` and `f64` without silent
///   data loss.
pub mod util;

pub use config::Config;
pub use error::Error;
pub use interpreter::{
    evaluator::{
        core::{Calculator, DebugSignal, Outcome},
        function::core::{FunctionDefinition, FunctionFault, FunctionTable},
    },
    format::FormattedResult,
};

static STANDARD: LazyLock<Calculator> = LazyLock::new(Calculator::standard);

/// Evaluates one expression with the standard functions and default settings.
///
/// The calculator behind this function is built on first use and shared by
/// every caller afterwards.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error encountered.
///
/// # Examples
/// ```
/// use ratcalc::{Error, Outcome, evaluate};
///
/// let Outcome::Answer(answer) = evaluate("(2 + 3) * 4").unwrap() else { unreachable!() };
/// assert_eq!(answer.fraction(), "20");
///
/// // `$` is not part of the language.
/// assert!(matches!(evaluate("5 $ 3"), Err(Error::Lex(_))));
/// ```
pub fn evaluate(text: &str) -> Result<Outcome, Error> {
    STANDARD.evaluate(text)
}
