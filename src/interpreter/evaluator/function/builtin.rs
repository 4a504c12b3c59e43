use std::f64::consts::PI;

use crate::interpreter::{
    evaluator::function::{budget::CancellationToken, core::FunctionFault},
    value::core::Number,
};

/// Converts a float result back to an exact number.
///
/// NaN and the infinities have no rational value and are rejected.
pub(crate) fn finite(value: f64) -> Result<Number, FunctionFault> {
    Number::from_f64(value).ok_or(FunctionFault::NotRepresentable)
}

/// Defines a one-argument builtin backed by an `f64` method or expression.
///
/// The generated function expects exactly one argument, which the
/// dispatcher guarantees. The float result is converted back to an exact
/// number; a non-finite result is a `NotRepresentable` fault.
///
/// # Example
/// ```
/// use ratcalc::interpreter::{
///     evaluator::function::{budget::CancellationToken, builtin::sin},
///     value::core::Number,
/// };
///
/// let r = sin(&[0.0], &CancellationToken::new()).unwrap();
/// assert_eq!(r, Number::from(0));
/// ```
macro_rules! float_builtin {
    ($(#[$meta:meta])* $fname:ident, |$x:ident| $body:expr) => {
        $(#[$meta])*
        pub fn $fname(args: &[f64], _: &CancellationToken) -> Result<Number, FunctionFault> {
            let $x = args[0];
            finite($body)
        }
    };
}

float_builtin!(
    /// Absolute value.
    abs, |x| x.abs()
);
float_builtin!(
    /// Sine of an angle in radians.
    sin, |x| x.sin()
);
float_builtin!(
    /// Cosine of an angle in radians.
    cos, |x| x.cos()
);
float_builtin!(
    /// Tangent of an angle in radians.
    tan, |x| x.tan()
);
float_builtin!(
    /// Converts degrees to radians.
    ///
    /// # Example
    /// ```
    /// use ratcalc::interpreter::evaluator::function::{
    ///     budget::CancellationToken, builtin::deg_to_rad,
    /// };
    ///
    /// let r = deg_to_rad(&[180.0], &CancellationToken::new()).unwrap();
    /// let r = r.to_f64().unwrap();
    /// assert!((r - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    deg_to_rad, |x| x * PI / 180.0
);
float_builtin!(
    /// Converts radians to degrees.
    rad_to_deg, |x| x * 180.0 / PI
);
