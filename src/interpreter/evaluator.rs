/// Core reduction logic and the calculator that owns the function table.
///
/// Contains the post-order tree reducer, the outcome types and the control
/// flow used to stop early on errors and debug requests.
pub mod core;

/// `sum`, `product` and `power` reductions.
pub mod binary;

/// Sign application for the `unary` production.
pub mod unary;

/// Function dispatch.
///
/// The dispatch table, the builtin implementations and the time budget
/// every call runs under.
pub mod function;
