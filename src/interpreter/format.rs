use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive};

use crate::interpreter::value::core::Number;

/// `f64::EPSILON` is `2^-52`.
const EPSILON_EXPONENT: usize = 52;

/// The presentation of a final value.
///
/// `numerator` and `denominator` are in lowest terms with a positive
/// denominator. `approximation` is present only for positive values whose
/// fractional part is farther than float machine epsilon from 0 and 1.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedResult {
    /// Numerator of the reduced fraction, carrying the sign.
    pub numerator:     BigInt,
    /// Denominator of the reduced fraction, always positive.
    pub denominator:   BigInt,
    /// Decimal approximation of a positive non-integral value.
    pub approximation: Option<f64>,
}

impl FormattedResult {
    /// The exact fraction, `n` when the denominator is one and `n/d`
    /// otherwise.
    #[must_use]
    pub fn fraction(&self) -> String {
        if self.denominator.is_one() {
            self.numerator.to_string()
        } else {
            format!("{}/{}", self.numerator, self.denominator)
        }
    }

    /// The decimal approximation as text, if there is one.
    #[must_use]
    pub fn decimal(&self) -> Option<String> {
        self.approximation.map(|x| x.to_string())
    }
}

impl fmt::Display for FormattedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fraction())
    }
}

/// Formats a reduced value as an exact fraction plus, for non-integral
/// values, a decimal approximation.
///
/// The decimal is shown only when the fractional part `value % 1` (which
/// carries the sign of `value`) and `1 - value % 1` both exceed
/// `f64::EPSILON`. Negative non-integers therefore show the fraction alone,
/// as do values within epsilon of an integer. The comparison is made on exact
/// rationals.
///
/// # Example
/// ```
/// use ratcalc::interpreter::{format::format_result, value::core::Number};
///
/// let third = Number::from_literal("1").unwrap()
///                                     .checked_div(&Number::from(3))
///                                     .unwrap();
/// let r = format_result(&third);
/// assert_eq!(r.fraction(), "1/3");
/// assert!(r.approximation.is_some());
///
/// let two = format_result(&Number::from(2));
/// assert_eq!(two.fraction(), "2");
/// assert_eq!(two.approximation, None);
/// ```
#[must_use]
pub fn format_result(value: &Number) -> FormattedResult {
    let epsilon = BigRational::new(BigInt::one(), BigInt::one() << EPSILON_EXPONENT);
    let frac = value.fract();
    let frac = frac.as_rational();
    let fractional = *frac > epsilon && BigRational::one() - frac > epsilon;

    FormattedResult { numerator:     value.numer().clone(),
                      denominator:   value.denom().clone(),
                      approximation: if fractional {
                          value.as_rational().to_f64()
                      } else {
                          None
                      }, }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lit(text: &str) -> Number {
        Number::from_literal(text).unwrap()
    }

    #[test]
    fn negative_fraction_shows_only_the_fraction() {
        let r = format_result(&lit("-2.5"));
        assert_eq!(r.fraction(), "-5/2");
        assert_eq!(r.approximation, None);
        assert_eq!(r.decimal(), None);
    }

    #[test]
    fn positive_fraction_gets_a_decimal() {
        let r = format_result(&lit("2.5"));
        assert_eq!(r.decimal().as_deref(), Some("2.5"));
        assert!(r.approximation.is_some());
    }

    #[test]
    fn integers_have_no_decimal() {
        let r = format_result(&lit("-7"));
        assert_eq!(r.to_string(), "-7");
        assert_eq!(r.approximation, None);
    }

    #[test]
    fn within_epsilon_of_an_integer_counts_as_integral() {
        let r = format_result(&lit("3.00000000000000000001"));
        assert_eq!(r.approximation, None);
        assert_eq!(r.fraction(), "300000000000000000001/100000000000000000000");

        let r = format_result(&lit("2.99999999999999999999"));
        assert_eq!(r.approximation, None);
    }

    #[test]
    fn just_outside_epsilon_is_not_integral() {
        assert!(format_result(&lit("3.000001")).approximation.is_some());
    }
}
