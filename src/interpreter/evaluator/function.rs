/// Built-in function implementations.
///
/// The float-backed functions: `abs`, the trigonometric functions and the
/// angle conversions.
pub mod builtin;
/// The `fact` (factorial) function implementation.
///
/// Computes exact factorials of non-negative integers, checking for
/// cancellation while it multiplies.
pub mod fact;
/// The `log` function implementation.
///
/// Logarithm of a value to an arbitrary base.
pub mod log;
/// The `sqrt` (square root) function implementation.
pub mod sqrt;
/// Cancellation tokens and the time budget function calls run under.
pub mod budget;

pub mod core;
