use crate::ast::{Expr, UnaryOperator};

/// Computes the value of an analyzed expression.
///
/// A pure post-order fold: operands are evaluated first, then combined by the
/// operator's rule or the builtin's implementation. There is no failure path.
/// Division by zero and out-of-domain function arguments follow IEEE-754 and
/// produce `inf` or `NaN`, which callers must check for if they care.
///
/// # Example
/// ```
/// use reckon::{evaluate, parse};
///
/// assert_eq!(evaluate(&parse("2 + 3 * 4").unwrap()), 14.0);
/// assert_eq!(evaluate(&parse("2 ^ 3 ^ 2").unwrap()), 64.0);
/// assert!(evaluate(&parse("1 / 0").unwrap()).is_infinite());
/// ```
#[must_use]
pub fn evaluate(expr: &Expr) -> f64 {
    match expr {
        Expr::Literal { value, .. } | Expr::Constant { value, .. } => *value,
        Expr::Unary { op: UnaryOperator::Negate,
                      operand,
                      .. } => -evaluate(operand),
        Expr::Binary { op, lhs, rhs, .. } => (op.rules().apply)(evaluate(lhs), evaluate(rhs)),
        Expr::Call { function,
                     arguments,
                     .. } => {
            let values: Vec<f64> = arguments.iter().map(evaluate).collect();
            (function.func)(&values)
        },
    }
}

impl Expr {
    /// Evaluates this tree. See [`evaluate`].
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        evaluate(self)
    }
}
