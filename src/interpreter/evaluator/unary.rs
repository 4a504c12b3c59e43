use crate::{
    ast::Sign,
    interpreter::{evaluator::core::Calculator, value::core::Number},
};

impl Calculator {
    /// Applies a prefix sign.
    ///
    /// # Example
    /// ```
    /// use ratcalc::{Calculator, ast::Sign, interpreter::value::core::Number};
    ///
    /// let v = Calculator::eval_unary(Sign::Minus, Number::from(5));
    /// assert_eq!(v, Number::from(-5));
    /// ```
    #[must_use]
    pub fn eval_unary(sign: Sign, operand: Number) -> Number {
        match sign {
            Sign::Plus => operand,
            Sign::Minus => -operand,
        }
    }
}
