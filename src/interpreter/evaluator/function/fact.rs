use num_bigint::{BigInt, BigUint};
use num_traits::One;

use crate::{
    interpreter::{
        evaluator::function::{budget::CancellationToken, core::FunctionFault},
        value::core::Number,
    },
    util::num::{IntegerConversionError, MAX_SAFE_U64_INT, f64_to_u64_checked},
};

/// How many factors are multiplied between two cancellation checks.
const CANCEL_CHECK_INTERVAL: u64 = 256;

/// Computes the factorial of a non-negative integer, exactly.
///
/// The product grows without bound, so the worker polls `token` while it
/// multiplies and gives up once the time budget has expired.
///
/// # Errors
/// - `FunctionFault::Domain` for negative, fractional or too large input.
/// - `FunctionFault::Cancelled` when the token is cancelled mid-product.
///
/// # Example
/// ```
/// use ratcalc::interpreter::{
///     evaluator::function::{budget::CancellationToken, fact::fact},
///     value::core::Number,
/// };
///
/// let token = CancellationToken::new();
/// assert_eq!(fact(&[5.0], &token).unwrap(), Number::from(120));
/// assert_eq!(fact(&[0.0], &token).unwrap(), Number::from(1));
/// assert!(fact(&[-1.0], &token).is_err());
/// ```
pub fn fact(args: &[f64], token: &CancellationToken) -> Result<Number, FunctionFault> {
    let n = f64_to_u64_checked(args[0]).map_err(domain_fault)?;

    let mut product = BigUint::one();
    for k in 2..=n {
        if k % CANCEL_CHECK_INTERVAL == 0 && token.is_cancelled() {
            return Err(FunctionFault::Cancelled);
        }
        product *= k;
    }

    Ok(Number::from(BigInt::from(product)))
}

fn domain_fault(error: IntegerConversionError) -> FunctionFault {
    let details = match error {
        IntegerConversionError::Negative => {
            "factorial() not defined for negative values".to_string()
        },
        IntegerConversionError::TooLarge => {
            format!("factorial() argument should not exceed {MAX_SAFE_U64_INT}")
        },
        IntegerConversionError::NonFinite | IntegerConversionError::Fractional => {
            "factorial() only accepts integral values".to_string()
        },
    };
    FunctionFault::Domain(details)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn exact_beyond_float_precision() {
        let r = fact(&[25.0], &CancellationToken::new()).unwrap();
        assert_eq!(r.to_string(), "15511210043330985984000000");
    }

    #[test]
    fn rejects_fractional_and_negative() {
        let token = CancellationToken::new();
        assert_eq!(fact(&[2.5], &token),
                   Err(FunctionFault::Domain("factorial() only accepts integral values".into())));
        assert_eq!(fact(&[-3.0], &token),
                   Err(FunctionFault::Domain("factorial() not defined for negative values".into())));
    }

    #[test]
    fn rejects_values_past_the_safe_range() {
        let r = fact(&[1e300], &CancellationToken::new());
        assert!(matches!(r, Err(FunctionFault::Domain(d)) if d.contains("9007199254740991")));
    }

    #[test]
    fn stops_when_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(fact(&[100_000.0], &token), Err(FunctionFault::Cancelled));
    }
}
