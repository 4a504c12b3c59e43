use crate::interpreter::{
    evaluator::function::{budget::CancellationToken, builtin::finite, core::FunctionFault},
    value::core::Number,
};

/// Computes the square root of a non-negative value.
///
/// Negative arguments are outside the domain; there are no complex results.
///
/// # Errors
/// `FunctionFault::Domain` when the argument is negative.
///
/// # Example
/// ```
/// use ratcalc::interpreter::{
///     evaluator::function::{budget::CancellationToken, sqrt::sqrt},
///     value::core::Number,
/// };
///
/// let token = CancellationToken::new();
/// assert_eq!(sqrt(&[16.0], &token).unwrap(), Number::from(4));
/// assert!(sqrt(&[-1.0], &token).is_err());
/// ```
pub fn sqrt(args: &[f64], _: &CancellationToken) -> Result<Number, FunctionFault> {
    let x = args[0];
    if x < 0.0 {
        return Err(FunctionFault::Domain("math domain error".to_string()));
    }
    finite(x.sqrt())
}
