use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that the analysis pass can report.
pub enum SemanticError {
    /// A bitwise operator was applied to an operand that is not an integer.
    IllegalOperands {
        /// The operator whose operands were rejected.
        operator: BinaryOperator,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A builtin function was called with the wrong number of arguments.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The number of arguments the function takes.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalOperands { operator, line } => {
                write!(f, "Error on line {line}: Illegal operands for {operator}.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: Expected {expected} arguments in {name}, got {found}."),
        }
    }
}

impl std::error::Error for SemanticError {}
