use crate::interpreter::{
    evaluator::function::{budget::CancellationToken, builtin::finite, core::FunctionFault},
    value::core::Number,
};

/// Computes `log(x, base)`, the logarithm of `x` to an arbitrary base.
///
/// Both the value and the base must be positive, and the base must not be
/// one.
///
/// # Errors
/// `FunctionFault::Domain` when either argument is out of range.
///
/// # Example
/// ```
/// use ratcalc::interpreter::{
///     evaluator::function::{budget::CancellationToken, log::log},
///     value::core::Number,
/// };
///
/// let token = CancellationToken::new();
/// assert_eq!(log(&[8.0, 2.0], &token).unwrap(), Number::from(3));
/// assert!(log(&[8.0, 1.0], &token).is_err());
/// ```
pub fn log(args: &[f64], _: &CancellationToken) -> Result<Number, FunctionFault> {
    let (x, base) = (args[0], args[1]);
    if x <= 0.0 || base <= 0.0 {
        return Err(FunctionFault::Domain("math domain error".to_string()));
    }
    if base == 1.0 {
        return Err(FunctionFault::Domain("logarithm base must not be 1".to_string()));
    }
    finite(x.ln() / base.ln())
}
