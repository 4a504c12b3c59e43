use thiserror::Error;

/// Semantic failures raised while reducing a parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Called a function that is not in the dispatch table.
    #[error("unknown function {name}({arguments})")]
    UnknownFunction {
        /// The name of the function.
        name:      String,
        /// The raw argument text, comma separated.
        arguments: String,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("function {function} takes {expected} args, not {found}")]
    ArityMismatch {
        /// The name of the function.
        function: String,
        /// The declared arity.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// Attempted division by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Attempted modulo by zero.
    #[error("modulo by zero")]
    ModuloByZero,
    /// An argument lies outside the function's domain.
    #[error("function {function}: {details}")]
    Domain {
        /// The name of the function.
        function: String,
        /// Why the argument was rejected.
        details:  String,
    },
    /// An integer exponent too large to expand exactly.
    #[error("exponent {exponent} is too large")]
    ExponentTooLarge {
        /// The exponent as written.
        exponent: String,
    },
    /// An exact result grew wider than the evaluator accepts.
    #[error("{operation} produced a value wider than {limit} bits")]
    ValueTooLarge {
        /// The operator involved.
        operation: String,
        /// The maximum width, in bits, of a numerator or denominator.
        limit:     u64,
    },
    /// A float computation produced NaN or infinity, or an operand could not
    /// be converted to a float.
    #[error("{operation} produced a value that cannot be represented")]
    NotRepresentable {
        /// The function or operator involved.
        operation: String,
    },
}

/// A function call ran past its time budget and was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("function {function} took too long to run and was killed")]
pub struct TimeoutError {
    /// The name of the function.
    pub function: String,
}

/// The worker thread running a function call failed before answering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("function {function} failed to run: {reason}")]
pub struct WorkerError {
    /// The name of the function.
    pub function: String,
    /// What went wrong.
    pub reason:   String,
}
