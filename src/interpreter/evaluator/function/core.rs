use std::{collections::HashMap, fmt, sync::Arc};

use log::trace;

use crate::{
    ast::Argument,
    error::{TimeoutError, ValueError, WorkerError},
    interpreter::{
        evaluator::{
            core::{Calculator, DebugSignal, Halt, Reduction},
            function::{
                budget::{BudgetError, CancellationToken, run_with_budget},
                builtin, fact, sqrt,
            },
        },
        value::core::Number,
    },
};

/// Why a function body rejected its arguments or gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionFault {
    /// An argument lies outside the function's domain.
    Domain(String),
    /// The result is NaN or infinite.
    NotRepresentable,
    /// The body noticed its token was cancelled and stopped.
    Cancelled,
}

/// Signature of a builtin numeric function.
///
/// A builtin receives its arguments already converted to floats, in call
/// order and with the arity checked, plus the token of the budget it runs
/// under.
pub type BuiltinFn = fn(&[f64], &CancellationToken) -> Result<Number, FunctionFault>;

/// A numeric function body, shareable with the worker threads that run it.
pub type FunctionBody =
    Arc<dyn Fn(&[f64], &CancellationToken) -> Result<Number, FunctionFault> + Send + Sync>;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `Variadic` accepts any count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments, including none.
    Variadic,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Variadic => true,
        }
    }
}

/// What calling a function does.
#[derive(Clone)]
pub enum Behavior {
    /// Compute a number from float arguments, under the time budget.
    Numeric(FunctionBody),
    /// Stop evaluation and hand back the raw argument text.
    Debug,
}

/// A named entry of the dispatch table.
#[derive(Clone)]
pub struct FunctionDefinition {
    name:     String,
    arity:    Arity,
    behavior: Behavior,
}

impl fmt::Debug for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.behavior {
            Behavior::Numeric(_) => "numeric",
            Behavior::Debug => "debug",
        };
        f.debug_struct("FunctionDefinition")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .field("behavior", &kind)
         .finish()
    }
}

impl FunctionDefinition {
    /// Defines a numeric function taking exactly `arity` arguments.
    ///
    /// # Example
    /// ```
    /// use ratcalc::{
    ///     Calculator, Config, FunctionDefinition, FunctionTable,
    ///     interpreter::value::core::Number,
    /// };
    ///
    /// let double = FunctionDefinition::numeric("double", 1, |args, _| {
    ///     Ok(Number::from_f64(args[0] * 2.0).unwrap())
    /// });
    /// let calc = Calculator::new(FunctionTable::standard().with_function(double),
    ///                            Config::default());
    ///
    /// assert_eq!(calc.evaluate("double(21)").unwrap().to_string(), "42");
    /// ```
    pub fn numeric<F>(name: impl Into<String>, arity: usize, body: F) -> Self
        where F: Fn(&[f64], &CancellationToken) -> Result<Number, FunctionFault>
                  + Send
                  + Sync
                  + 'static
    {
        Self { name:     name.into(),
               arity:    Arity::Exact(arity),
               behavior: Behavior::Numeric(Arc::new(body)), }
    }

    /// Defines a function that returns its raw arguments instead of a value.
    pub fn debug(name: impl Into<String>) -> Self {
        Self { name:     name.into(),
               arity:    Arity::Variadic,
               behavior: Behavior::Debug, }
    }

    /// The name calls use, unique within a table.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many arguments a call must pass.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// What a call does once its arity is checked.
    #[must_use]
    pub const fn behavior(&self) -> &Behavior {
        &self.behavior
    }
}

/// Defines the builtin numeric functions by generating a lookup table and a
/// name list.
///
/// Each entry provides:
/// - a string name,
/// - an exact arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table the standard function table is built from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names, `debug` included).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
            DEBUG_FUNCTION,
        ];
    };
}

/// Name of the function that returns its raw arguments.
pub const DEBUG_FUNCTION: &str = "debug";

builtin_functions! {
    "abs"        => { arity: 1, func: builtin::abs },
    "sin"        => { arity: 1, func: builtin::sin },
    "cos"        => { arity: 1, func: builtin::cos },
    "tan"        => { arity: 1, func: builtin::tan },
    "deg_to_rad" => { arity: 1, func: builtin::deg_to_rad },
    "rad_to_deg" => { arity: 1, func: builtin::rad_to_deg },
    "sqrt"       => { arity: 1, func: sqrt::sqrt },
    "fact"       => { arity: 1, func: fact::fact },
    "log"        => { arity: 2, func: super::log::log },
}

/// The dispatch table: function name to definition.
///
/// Built once and never changed after it is handed to a
/// [`Calculator`]; `with_function` consumes and returns the table so all
/// registration happens before that point.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<String, FunctionDefinition>,
}

impl FunctionTable {
    /// A table with no functions at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard functions: `abs`, `sin`, `cos`, `tan`, `deg_to_rad`,
    /// `rad_to_deg`, `sqrt`, `fact`, `log` and `debug`.
    #[must_use]
    pub fn standard() -> Self {
        BUILTIN_TABLE.iter()
                     .map(|b| FunctionDefinition::numeric(b.name, b.arity, b.func))
                     .chain(std::iter::once(FunctionDefinition::debug(DEBUG_FUNCTION)))
                     .fold(Self::empty(), Self::with_function)
    }

    /// Adds a definition, replacing any existing one with the same name.
    #[must_use]
    pub fn with_function(mut self, definition: FunctionDefinition) -> Self {
        self.functions.insert(definition.name.clone(), definition);
        self
    }

    /// Looks a function up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FunctionDefinition> {
        self.functions.get(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.functions.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

impl Calculator {
    /// Evaluates a function call.
    ///
    /// A `debug` call stops evaluation at once with the raw argument text and
    /// leaves its arguments unevaluated. Any other call reduces its arguments
    /// first, then looks the name up, checks the arity and runs the body
    /// under the time budget with float arguments. The body's result comes
    /// back as an exact [`Number`].
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Argument])
                                     -> Reduction<Number> {
        let definition = match self.functions.get(name) {
            Some(FunctionDefinition { behavior: Behavior::Debug, .. }) => {
                let arguments = arguments.iter().map(|a| a.text.clone()).collect();
                return Err(Halt::Debug(DebugSignal { arguments }));
            },
            other => other,
        };

        let values = arguments.iter()
                              .map(|a| self.reduce(&a.expr))
                              .collect::<Reduction<Vec<_>>>()?;

        let Some(FunctionDefinition { arity,
                                      behavior: Behavior::Numeric(body),
                                      .. }) = definition
        else {
            let arguments = arguments.iter()
                                     .map(|a| a.text.as_str())
                                     .collect::<Vec<_>>()
                                     .join(", ");
            return Err(ValueError::UnknownFunction { name: name.to_string(),
                                                     arguments }.into());
        };

        if let Arity::Exact(expected) = *arity
           && !arity.check(values.len())
        {
            return Err(ValueError::ArityMismatch { function: name.to_string(),
                                                   expected,
                                                   found: values.len() }.into());
        }

        let floats = values.iter()
                           .map(Number::to_f64)
                           .collect::<Option<Vec<_>>>()
                           .ok_or_else(|| {
                               ValueError::NotRepresentable { operation: name.to_string() }
                           })?;

        trace!("calling {name}{floats:?}");
        self.invoke(name, body, floats)
    }

    /// Runs a numeric body under the configured time budget and maps its
    /// failures onto the error taxonomy.
    fn invoke(&self, name: &str, body: &FunctionBody, floats: Vec<f64>) -> Reduction<Number> {
        let body = Arc::clone(body);
        let outcome = run_with_budget(name, self.config.time_budget, move |token| {
            body(&floats, &token)
        });

        match outcome {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(FunctionFault::Domain(details))) => {
                Err(ValueError::Domain { function: name.to_string(),
                                         details }.into())
            },
            Ok(Err(FunctionFault::NotRepresentable)) => {
                Err(ValueError::NotRepresentable { operation: name.to_string() }.into())
            },
            Ok(Err(FunctionFault::Cancelled)) | Err(BudgetError::Elapsed) => {
                Err(TimeoutError { function: name.to_string() }.into())
            },
            Err(BudgetError::Spawn(reason)) => Err(WorkerError { function: name.to_string(),
                                                                 reason }.into()),
            Err(BudgetError::Died) => {
                Err(WorkerError { function: name.to_string(),
                                  reason:   "worker stopped without a result".to_string(), }.into())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn standard_table_has_every_builtin() {
        let table = FunctionTable::standard();
        let mut expected = BUILTIN_FUNCTIONS.to_vec();
        expected.sort_unstable();
        assert_eq!(table.names(), expected);
        assert_eq!(table.get("log").map(FunctionDefinition::arity), Some(Arity::Exact(2)));
        assert_eq!(table.get("debug").map(FunctionDefinition::arity), Some(Arity::Variadic));
        assert!(matches!(table.get("debug").map(FunctionDefinition::behavior),
                         Some(Behavior::Debug)));
        assert_eq!(table.get("sqrt").map(FunctionDefinition::name), Some("sqrt"));
    }

    #[test]
    fn with_function_replaces_by_name() {
        let zero = FunctionDefinition::numeric("abs", 2, |_, _| Ok(Number::from(0)));
        let table = FunctionTable::standard().with_function(zero);
        assert_eq!(table.get("abs").map(FunctionDefinition::arity), Some(Arity::Exact(2)));
    }

    #[test]
    fn arity_check() {
        assert!(Arity::Exact(1).check(1));
        assert!(!Arity::Exact(1).check(2));
        assert!(Arity::Variadic.check(0));
    }
}
