/// Entry point, token stream and nesting guard.
///
/// Runs the lexer, drives the descent from the lowest-precedence production
/// and rejects input left over after a complete expression.
pub mod core;

/// The `sum`, `product` and `power` productions.
///
/// `+ -` and `* / %` fold left to right; `^` nests to the right.
pub mod binary;

/// The `unary` production and the primaries it wraps: literals,
/// parenthesised sums and function calls.
pub mod unary;

/// Shared helpers for argument lists and expected tokens.
pub mod utils;
