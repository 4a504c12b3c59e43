/// Exact numeric values.
///
/// Defines `Number`, the arbitrary-precision rational every reduction works
/// on, together with its literal parser and the explicit float conversions.
pub mod core;
