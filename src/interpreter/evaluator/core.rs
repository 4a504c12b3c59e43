use std::fmt;

use log::debug;

use crate::{
    ast::Expr,
    config::Config,
    error::{Error, TimeoutError, ValueError, WorkerError},
    interpreter::{
        evaluator::function::core::FunctionTable,
        format::{FormattedResult, format_result},
        parser::core::parse,
        value::core::Number,
    },
};

/// A request, made through the `debug` function, to see a call's arguments
/// instead of a number.
///
/// Not an error: evaluation stops, but nothing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugSignal {
    /// The arguments exactly as written, unevaluated.
    pub arguments: Vec<String>,
}

impl fmt::Display for DebugSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.arguments)
    }
}

/// What a successful evaluation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The expression reduced to a number.
    Answer(FormattedResult),
    /// The expression asked for its raw arguments via `debug`.
    Debug(DebugSignal),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Answer(answer) => write!(f, "{answer}"),
            Self::Debug(signal) => write!(f, "{signal}"),
        }
    }
}

/// Why a reduction stopped before producing a number.
#[derive(Debug)]
pub(crate) enum Halt {
    /// `debug` was called.
    Debug(DebugSignal),
    /// Something failed.
    Fail(Error),
}

impl From<Error> for Halt {
    fn from(error: Error) -> Self {
        Self::Fail(error)
    }
}

impl From<ValueError> for Halt {
    fn from(error: ValueError) -> Self {
        Self::Fail(error.into())
    }
}

impl From<TimeoutError> for Halt {
    fn from(error: TimeoutError) -> Self {
        Self::Fail(error.into())
    }
}

impl From<WorkerError> for Halt {
    fn from(error: WorkerError) -> Self {
        Self::Fail(error.into())
    }
}

/// Result type used while reducing a tree.
pub(crate) type Reduction<T> = Result<T, Halt>;

/// Evaluates expressions against a fixed function table.
///
/// A `Calculator` holds no per-call state: the table and the configuration
/// are set at construction and only read afterwards, so one instance can
/// serve any number of threads at once.
///
/// ## Usage
///
/// Build one with [`Calculator::standard`] or [`Calculator::new`], then call
/// [`Calculator::evaluate`] once per expression.
#[derive(Debug)]
pub struct Calculator {
    /// Every function an expression may call.
    pub(crate) functions: FunctionTable,
    /// Time budget and other settings.
    pub(crate) config:    Config,
}

impl Calculator {
    /// Creates a calculator from a function table and a configuration.
    #[must_use]
    pub const fn new(functions: FunctionTable, config: Config) -> Self {
        Self { functions,
               config }
    }

    /// Creates a calculator with the standard functions and default settings.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(FunctionTable::standard(), Config::default())
    }

    /// Parses, reduces and formats one expression.
    ///
    /// The pipeline runs straight through; the first failure at any stage
    /// ends it and no partial result is returned.
    ///
    /// # Errors
    /// - `Error::Lex` / `Error::Parse` before any evaluation happens.
    /// - `Error::Value` for unknown functions, arity mismatches and domain
    ///   violations.
    /// - `Error::Timeout` when a function call runs past the time budget.
    /// - `Error::Worker` when a function call's worker thread fails.
    ///
    /// # Example
    /// ```
    /// use ratcalc::{Calculator, Outcome};
    ///
    /// let calc = Calculator::standard();
    ///
    /// let Outcome::Answer(answer) = calc.evaluate("1 / 3").unwrap() else { unreachable!() };
    /// assert_eq!(answer.fraction(), "1/3");
    /// assert!(answer.approximation.is_some());
    ///
    /// let Outcome::Debug(signal) = calc.evaluate("debug(3, 4)").unwrap() else { unreachable!() };
    /// assert_eq!(signal.arguments, ["3", "4"]);
    /// ```
    pub fn evaluate(&self, text: &str) -> Result<Outcome, Error> {
        debug!("evaluating {text:?}");
        let tree = parse(text).inspect_err(|e| debug!("{text:?} rejected: {e}"))?;

        let outcome = match self.reduce(&tree) {
            Ok(value) => Outcome::Answer(format_result(&value)),
            Err(Halt::Debug(signal)) => Outcome::Debug(signal),
            Err(Halt::Fail(error)) => {
                debug!("{text:?} failed: {error}");
                return Err(error);
            },
        };

        debug!("{text:?} => {outcome}");
        Ok(outcome)
    }

    /// Reduces a tree to a single number, children before parents.
    ///
    /// Operands are reduced left to right; the first failure or debug request
    /// ends the walk. Every arithmetic result is held to
    /// [`MAX_VALUE_BITS`](crate::interpreter::value::core::MAX_VALUE_BITS), so
    /// no chain of operators can grow a value without bound.
    pub(crate) fn reduce(&self, expr: &Expr) -> Reduction<Number> {
        match expr {
            Expr::Number { value, .. } => Ok(value.clone()),
            Expr::Sum { left, op, right, .. } => {
                let left = self.reduce(left)?;
                let right = self.reduce(right)?;
                Ok(Self::eval_sum(left, *op, right).bounded(&op.to_string())?)
            },
            Expr::Product { left, op, right, .. } => {
                let left = self.reduce(left)?;
                let right = self.reduce(right)?;
                Ok(Self::eval_product(left, *op, right)?.bounded(&op.to_string())?)
            },
            Expr::Power { base, exponent, .. } => {
                let base = self.reduce(base)?;
                let exponent = self.reduce(exponent)?;
                Ok(Self::eval_power(&base, &exponent)?.bounded("^")?)
            },
            Expr::Unary { sign, operand, .. } => {
                let operand = self.reduce(operand)?;
                Ok(Self::eval_unary(*sign, operand))
            },
            Expr::FunctionCall { name, arguments, .. } => self.eval_function_call(name, arguments),
        }
    }
}
