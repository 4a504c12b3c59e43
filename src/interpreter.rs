/// The evaluator module reduces parse trees to numbers.
///
/// The evaluator walks the tree children first, applies the arithmetic of
/// each production on exact values and dispatches function calls through
/// the function table under a time budget.
///
/// # Responsibilities
/// - Reduces every tree node to a `Number`, or stops at the first failure.
/// - Short-circuits on `debug(...)` with the raw argument text.
/// - Runs builtin functions on worker threads that can be abandoned.
pub mod evaluator;
/// Turns a final value into an exact fraction and, when useful, a decimal.
pub mod format;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw text and produces tokens for numeric literals,
/// identifiers, operators, parentheses and commas, each tagged with its
/// character position.
///
/// # Responsibilities
/// - Converts the input into tokens with type and source location.
/// - Parses decimal literals into exact values.
/// - Reports the first unrecognised character and where it is.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive descent over the productions `sum`, `product`, `power`,
/// `unary`, function calls and primaries. Parsing is purely structural: no
/// value is computed.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Reports the first token the grammar cannot accept, with its position.
/// - Bounds nesting depth and input length.
pub mod parser;
/// Runtime values.
pub mod value;
