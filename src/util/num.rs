use thiserror::Error;

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Why a float could not be turned into an unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegerConversionError {
    /// NaN or an infinity.
    #[error("value is not finite")]
    NonFinite,
    /// Below zero.
    #[error("value is negative")]
    Negative,
    /// Above `MAX_SAFE_U64_INT`.
    #[error("value is too large")]
    TooLarge,
    /// Has a fractional part.
    #[error("value is not an integer")]
    Fractional,
}

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within the exactly representable range, and not fractional.
///
/// ## Errors
/// Returns the first rule the value breaks, checked in the order listed on
/// [`IntegerConversionError`].
///
/// ## Example
/// ```
/// use ratcalc::util::num::{IntegerConversionError, f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(7.0), Ok(7));
/// assert_eq!(f64_to_u64_checked(-5.0), Err(IntegerConversionError::Negative));
/// assert_eq!(f64_to_u64_checked(1.23), Err(IntegerConversionError::Fractional));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64) -> Result<u64, IntegerConversionError> {
    if !value.is_finite() {
        return Err(IntegerConversionError::NonFinite);
    }
    if value < 0.0 {
        return Err(IntegerConversionError::Negative);
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return Err(IntegerConversionError::TooLarge);
    }
    if value.fract() != 0.0 {
        return Err(IntegerConversionError::Fractional);
    }
    Ok(value as u64)
}

/// Converts an `i64` to `u32` when it fits, `None` otherwise.
///
/// ## Example
/// ```
/// use ratcalc::util::num::i64_to_u32_checked;
///
/// assert_eq!(i64_to_u32_checked(45), Some(45));
/// assert_eq!(i64_to_u32_checked(-1), None);
/// assert_eq!(i64_to_u32_checked(i64::MAX), None);
/// ```
#[must_use]
pub fn i64_to_u32_checked(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}
