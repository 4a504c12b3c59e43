use std::fmt;

use crate::interpreter::value::core::Number;

/// A node of the parse tree.
///
/// There is one variant per grammar production. Operator fields use closed
/// enums, so a node can never carry an operator its production does not
/// declare, and the evaluator reduces every variant by exhaustive matching.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, already converted to an exact value.
    Number {
        /// The literal's value.
        value:    Number,
        /// 0-based character offset in the source.
        position: usize,
    },
    /// `left + right` or `left - right`.
    Sum {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       SumOperator,
        /// Right operand.
        right:    Box<Self>,
        /// 0-based character offset of the operator.
        position: usize,
    },
    /// `left * right`, `left / right` or `left % right`.
    Product {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       ProductOperator,
        /// Right operand.
        right:    Box<Self>,
        /// 0-based character offset of the operator.
        position: usize,
    },
    /// `base ^ exponent`.
    Power {
        /// The base.
        base:     Box<Self>,
        /// The exponent.
        exponent: Box<Self>,
        /// 0-based character offset of the `^`.
        position: usize,
    },
    /// `+operand` or `-operand`.
    Unary {
        /// The sign applied.
        sign:     Sign,
        /// The operand expression.
        operand:  Box<Self>,
        /// 0-based character offset of the sign.
        position: usize,
    },
    /// `name(arg, arg, ...)`.
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments in call order.
        arguments: Vec<Argument>,
        /// 0-based character offset of the name.
        position:  usize,
    },
}

impl Expr {
    /// Gets the source position of the node.
    /// ## Example
    /// ```
    /// use ratcalc::{ast::Expr, interpreter::value::core::Number};
    ///
    /// let expr = Expr::Number { value:    Number::from(3),
    ///                           position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Sum { position, .. }
            | Self::Product { position, .. }
            | Self::Power { position, .. }
            | Self::Unary { position, .. }
            | Self::FunctionCall { position, .. } => *position,
        }
    }
}

/// One argument of a function call.
///
/// Keeps the argument's source text next to its subtree, so a call can be
/// reported without evaluating it.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    /// The parsed argument.
    pub expr: Expr,
    /// The argument exactly as written, trimmed.
    pub text: String,
}

/// Operators of the `sum` production.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SumOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

/// Operators of the `product` production.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProductOperator {
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Rem,
}

/// Prefix sign of the `unary` production.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sign {
    /// `+x`
    Plus,
    /// `-x`
    Minus,
}

impl fmt::Display for SumOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
        }
    }
}

impl fmt::Display for ProductOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Rem => write!(f, "%"),
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}
