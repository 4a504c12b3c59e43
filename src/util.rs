/// Numeric conversion helpers.
///
/// Safe conversions between floats and integers that report why a value was
/// rejected instead of silently truncating or saturating.
pub mod num;
