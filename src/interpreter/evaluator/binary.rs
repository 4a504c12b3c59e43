use crate::{
    ast::{ProductOperator, SumOperator},
    error::ValueError,
    interpreter::{evaluator::core::Calculator, value::core::Number},
};

impl Calculator {
    /// Reduces a `sum` node.
    ///
    /// # Example
    /// ```
    /// use ratcalc::{Calculator, ast::SumOperator, interpreter::value::core::Number};
    ///
    /// let v = Calculator::eval_sum(Number::from(2), SumOperator::Sub, Number::from(5));
    /// assert_eq!(v, Number::from(-3));
    /// ```
    #[must_use]
    pub fn eval_sum(left: Number, op: SumOperator, right: Number) -> Number {
        match op {
            SumOperator::Add => left + right,
            SumOperator::Sub => left - right,
        }
    }

    /// Reduces a `product` node.
    ///
    /// # Errors
    /// `DivisionByZero` or `ModuloByZero` when `right` is zero.
    pub fn eval_product(left: Number,
                        op: ProductOperator,
                        right: Number)
                        -> Result<Number, ValueError> {
        match op {
            ProductOperator::Mul => Ok(left * right),
            ProductOperator::Div => left.checked_div(&right),
            ProductOperator::Rem => left.checked_rem(&right),
        }
    }

    /// Reduces a `power` node.
    ///
    /// Integer exponents are exact; other exponents are computed in floating
    /// point. See [`Number::pow`].
    ///
    /// # Errors
    /// Propagates the errors of [`Number::pow`].
    pub fn eval_power(base: &Number, exponent: &Number) -> Result<Number, ValueError> {
        base.pow(exponent)
    }
}
