use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{error::ValueError, util::num::i64_to_u32_checked};

/// Largest decimal exponent accepted in a numeric literal (`1e10000`).
pub const MAX_LITERAL_EXPONENT: i64 = 10_000;
/// Largest integer exponent expanded exactly by `^`.
pub const MAX_EXACT_EXPONENT: i64 = 100_000;
/// Largest numerator or denominator, in bits, an integer power may produce.
pub const MAX_POWER_BITS: u64 = 1 << 22;
/// Largest numerator or denominator, in bits, any reduction may produce.
pub const MAX_VALUE_BITS: u64 = 1 << 23;

/// An exact, arbitrary-precision number.
///
/// Every value the evaluator produces is a `Number`. Sums, differences,
/// products, quotients, remainders and integer powers stay exact; the only way
/// to lose precision is an explicit trip through [`Number::to_f64`], which the
/// function table and fractional powers use.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(BigRational);

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self(BigRational::from_integer(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::from(BigInt::from(value))
    }
}

impl Number {
    /// Parses a decimal literal such as `12`, `12.5`, `.5` or `1.5e-3` into an
    /// exact value.
    ///
    /// Returns `None` when the literal is malformed or its exponent lies
    /// outside `±MAX_LITERAL_EXPONENT`.
    ///
    /// # Example
    /// ```
    /// use ratcalc::interpreter::value::core::Number;
    ///
    /// let n = Number::from_literal("2.5e-1").unwrap();
    /// assert_eq!(n.to_string(), "1/4");
    /// ```
    #[must_use]
    pub fn from_literal(text: &str) -> Option<Self> {
        let (mantissa, exponent) = match text.find(['e', 'E']) {
            Some(at) => (&text[..at], text[at + 1..].parse::<i64>().ok()?),
            None => (text, 0),
        };
        if exponent.abs() > MAX_LITERAL_EXPONENT {
            return None;
        }

        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let digits = format!("{whole}{fraction}");
        if digits.is_empty() {
            return None;
        }
        let significand = BigInt::parse_bytes(digits.as_bytes(), 10)?;

        let scale = exponent - i64::try_from(fraction.len()).ok()?;
        let power = BigInt::from(10u32).pow(u32::try_from(scale.unsigned_abs()).ok()?);
        let value = if scale >= 0 {
            BigRational::from_integer(significand * power)
        } else {
            BigRational::new(significand, power)
        };
        Some(Self(value))
    }

    /// Converts a finite float into the exact rational it denotes.
    ///
    /// Returns `None` for NaN and infinities.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        BigRational::from_float(value).map(Self)
    }

    /// Converts to the nearest `f64`.
    ///
    /// This is the one place precision can be lost. Returns `None` when the
    /// magnitude does not fit in a finite float.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64().filter(|f| f.is_finite())
    }

    /// Borrows the underlying reduced fraction.
    #[must_use]
    pub const fn as_rational(&self) -> &BigRational {
        &self.0
    }

    /// Numerator of the reduced fraction; carries the sign.
    #[must_use]
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// Denominator of the reduced fraction; always positive.
    #[must_use]
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// The fractional part with the sign of `self`, i.e. `self % 1`. Lies in
    /// `(-1, 1)`.
    ///
    /// # Example
    /// ```
    /// use ratcalc::interpreter::value::core::Number;
    ///
    /// let n = Number::from_literal("-1.25").unwrap();
    /// assert_eq!(n.fract().to_string(), "-1/4");
    /// ```
    #[must_use]
    pub fn fract(&self) -> Self {
        Self(self.0.fract())
    }

    /// Bits in the wider of the numerator and the denominator.
    #[must_use]
    pub fn bits(&self) -> u64 {
        self.numer().bits().max(self.denom().bits())
    }

    /// Passes `self` through unless it is wider than `MAX_VALUE_BITS`.
    ///
    /// # Errors
    /// `ValueError::ValueTooLarge` naming the operation that produced it.
    pub fn bounded(self, operation: &str) -> Result<Self, ValueError> {
        if self.bits() > MAX_VALUE_BITS {
            return Err(ValueError::ValueTooLarge { operation: operation.to_string(),
                                                   limit:     MAX_VALUE_BITS, });
        }
        Ok(self)
    }

    /// Exact division.
    ///
    /// # Errors
    /// `ValueError::DivisionByZero` when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ValueError> {
        if rhs.is_zero() {
            return Err(ValueError::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Exact remainder of truncated division; the sign follows `self`.
    ///
    /// # Errors
    /// `ValueError::ModuloByZero` when `rhs` is zero.
    ///
    /// # Example
    /// ```
    /// use ratcalc::interpreter::value::core::Number;
    ///
    /// let r = Number::from(-7).checked_rem(&Number::from(3)).unwrap();
    /// assert_eq!(r, Number::from(-1));
    /// ```
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, ValueError> {
        if rhs.is_zero() {
            return Err(ValueError::ModuloByZero);
        }
        let quotient = (&self.0 / &rhs.0).trunc();
        Ok(Self(&self.0 - &rhs.0 * quotient))
    }

    /// Raises `self` to `exponent`.
    ///
    /// Integer exponents are expanded exactly. Any other exponent goes through
    /// `f64::powf` and the result is converted back.
    ///
    /// # Errors
    /// - `DivisionByZero` for zero raised to a negative power.
    /// - `ExponentTooLarge` for integer exponents beyond `MAX_EXACT_EXPONENT`
    ///   whose result is not trivially known, or whose result would need more
    ///   than `MAX_POWER_BITS` bits.
    /// - `NotRepresentable` when the float fallback yields NaN or infinity.
    pub fn pow(&self, exponent: &Self) -> Result<Self, ValueError> {
        if exponent.is_integer() {
            return self.pow_integer(exponent.numer());
        }

        let float = self.to_f64()
                        .zip(exponent.to_f64())
                        .map(|(base, exp)| base.powf(exp));
        float.and_then(Self::from_f64)
             .ok_or_else(|| ValueError::NotRepresentable { operation: "^".to_string() })
    }

    fn pow_integer(&self, exponent: &BigInt) -> Result<Self, ValueError> {
        if exponent.is_zero() {
            return Ok(Self::from(1));
        }
        if self.is_zero() {
            return if exponent.is_negative() {
                Err(ValueError::DivisionByZero)
            } else {
                Ok(self.clone())
            };
        }
        if self.0.is_one() {
            return Ok(self.clone());
        }
        if (-&self.0).is_one() {
            let even = (exponent % 2u32).is_zero();
            return Ok(if even { Self::from(1) } else { self.clone() });
        }

        let too_large = || ValueError::ExponentTooLarge { exponent: exponent.to_string() };
        let exp = exponent.to_i64().ok_or_else(too_large)?;
        if exp.abs() > MAX_EXACT_EXPONENT {
            return Err(too_large());
        }
        let magnitude = i64_to_u32_checked(exp.abs()).ok_or_else(too_large)?;

        if self.bits().saturating_mul(u64::from(magnitude)) > MAX_POWER_BITS {
            return Err(too_large());
        }

        let numer = self.numer().pow(magnitude);
        let denom = self.denom().pow(magnitude);
        Ok(if exp > 0 {
            Self(BigRational::new(numer, denom))
        } else {
            Self(BigRational::new(denom, numer))
        })
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Renders the reduced fraction: `n` for integers, `n/d` otherwise.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}
