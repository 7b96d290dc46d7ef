use tracing::debug;

use crate::{
    ast::{Expr, NumericType},
    error::SemanticError,
};

/// Result type used by the analysis pass.
pub type AnalyzeResult<T> = Result<T, SemanticError>;

/// Validates a parsed expression before it is evaluated.
///
/// Walks the tree once in post-order and stops at the first violation:
/// - a call whose argument count differs from the builtin's arity,
/// - a bitwise operator with an operand that is not an `Integer`.
///
/// The pass never modifies the tree, so running it again on the same tree
/// gives the same answer.
///
/// # Errors
/// Returns the first [`SemanticError`] found.
///
/// # Example
/// ```
/// use reckon::{analyze, error::SemanticError, parse};
///
/// assert!(analyze(&parse("0b110 & 3").unwrap()).is_ok());
/// assert!(matches!(analyze(&parse("3.5 & 2").unwrap()),
///                  Err(SemanticError::IllegalOperands { .. })));
/// assert!(matches!(analyze(&parse("pow(2)").unwrap()),
///                  Err(SemanticError::ArityMismatch { expected: 2, found: 1, .. })));
/// ```
pub fn analyze(expr: &Expr) -> AnalyzeResult<()> {
    let numeric_type = check(expr)?;
    debug!(%numeric_type, "analysis passed");
    Ok(())
}

/// Checks `expr` and returns its type, so each node is visited only once.
fn check(expr: &Expr) -> AnalyzeResult<NumericType> {
    match expr {
        Expr::Literal { numeric_type, .. } | Expr::Constant { numeric_type, .. } => {
            Ok(*numeric_type)
        },
        Expr::Unary { operand, .. } => check(operand),
        Expr::Binary { op, lhs, rhs, line } => {
            let lhs = check(lhs)?;
            let rhs = check(rhs)?;
            let rules = op.rules();
            (rules.analyze)(*op, lhs, rhs, *line)?;
            Ok((rules.result_type)(lhs, rhs))
        },
        Expr::Call { function,
                     arguments,
                     line, } => {
            if arguments.len() != function.arity {
                return Err(SemanticError::ArityMismatch { name:     function.name.to_string(),
                                                          expected: function.arity,
                                                          found:    arguments.len(),
                                                          line:     *line, });
            }
            for argument in arguments {
                check(argument)?;
            }
            Ok(NumericType::Float)
        },
    }
}

impl Expr {
    /// Runs the analysis pass on this tree. See [`analyze`].
    ///
    /// # Errors
    /// Returns the first [`SemanticError`] found.
    pub fn analyze(&self) -> AnalyzeResult<()> {
        analyze(self)
    }
}
