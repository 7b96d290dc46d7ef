use crate::{
    ast::{BinaryOperator, NumericType},
    error::SemanticError,
    interpreter::analyzer::AnalyzeResult,
    util::num::{f64_to_i64_truncated, i64_to_f64},
};

/// Checks the operand types of a binary operator. Receives the operator, the
/// left and right operand types and the source line.
pub type AnalyzeFn = fn(BinaryOperator, NumericType, NumericType, usize) -> AnalyzeResult<()>;
/// Computes the result type from the two operand types.
pub type ResultTypeFn = fn(NumericType, NumericType) -> NumericType;
/// Combines the two evaluated operands.
pub type ApplyFn = fn(f64, f64) -> f64;

/// The behavior attached to a binary operator.
///
/// One static record exists per [`BinaryOperator`]; the analyzer, the type
/// inference and the evaluator all dispatch through it.
#[derive(Debug)]
pub struct OperatorRules {
    /// Validates the operand types.
    pub analyze:     AnalyzeFn,
    /// Infers the result type.
    pub result_type: ResultTypeFn,
    /// Computes the result.
    pub apply:       ApplyFn,
}

static ADD: OperatorRules = OperatorRules { analyze:     accept_any,
                                            result_type: NumericType::join,
                                            apply:       add, };
static SUB: OperatorRules = OperatorRules { analyze:     accept_any,
                                            result_type: NumericType::join,
                                            apply:       sub, };
static MUL: OperatorRules = OperatorRules { analyze:     accept_any,
                                            result_type: NumericType::join,
                                            apply:       mul, };
static DIV: OperatorRules = OperatorRules { analyze:     accept_any,
                                            result_type: always_float,
                                            apply:       div, };
static MOD: OperatorRules = OperatorRules { analyze:     accept_any,
                                            result_type: NumericType::join,
                                            apply:       rem, };
static POW: OperatorRules = OperatorRules { analyze:     accept_any,
                                            result_type: NumericType::join,
                                            apply:       f64::powf, };
static BIT_AND: OperatorRules = OperatorRules { analyze:     require_integers,
                                                result_type: NumericType::join,
                                                apply:       bit_and, };
static BIT_OR: OperatorRules = OperatorRules { analyze:     require_integers,
                                               result_type: NumericType::join,
                                               apply:       bit_or, };

impl BinaryOperator {
    /// Returns the analysis, typing and evaluation rules of the operator.
    ///
    /// ## Example
    /// ```
    /// use reckon::ast::{BinaryOperator, NumericType};
    ///
    /// let rules = BinaryOperator::Div.rules();
    ///
    /// assert_eq!((rules.apply)(7.0, 2.0), 3.5);
    /// assert_eq!((rules.result_type)(NumericType::Integer, NumericType::Integer),
    ///            NumericType::Float);
    /// ```
    #[must_use]
    pub fn rules(self) -> &'static OperatorRules {
        match self {
            Self::Add => &ADD,
            Self::Sub => &SUB,
            Self::Mul => &MUL,
            Self::Div => &DIV,
            Self::Mod => &MOD,
            Self::Pow => &POW,
            Self::BitAnd => &BIT_AND,
            Self::BitOr => &BIT_OR,
        }
    }
}

#[allow(clippy::unnecessary_wraps)]
const fn accept_any(_: BinaryOperator, _: NumericType, _: NumericType, _: usize) -> AnalyzeResult<()> {
    Ok(())
}

fn require_integers(operator: BinaryOperator,
                    lhs: NumericType,
                    rhs: NumericType,
                    line: usize)
                    -> AnalyzeResult<()> {
    if lhs == NumericType::Integer && rhs == NumericType::Integer {
        Ok(())
    } else {
        Err(SemanticError::IllegalOperands { operator, line })
    }
}

const fn always_float(_: NumericType, _: NumericType) -> NumericType {
    NumericType::Float
}

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn sub(a: f64, b: f64) -> f64 {
    a - b
}

fn mul(a: f64, b: f64) -> f64 {
    a * b
}

fn div(a: f64, b: f64) -> f64 {
    a / b
}

/// Remainder of the truncated operands. A zero divisor (or `i64::MIN % -1`)
/// has no integer result and yields `NaN`.
fn rem(a: f64, b: f64) -> f64 {
    f64_to_i64_truncated(a).checked_rem(f64_to_i64_truncated(b))
                           .map_or(f64::NAN, i64_to_f64)
}

fn bit_and(a: f64, b: f64) -> f64 {
    i64_to_f64(f64_to_i64_truncated(a) & f64_to_i64_truncated(b))
}

fn bit_or(a: f64, b: f64) -> f64 {
    i64_to_f64(f64_to_i64_truncated(a) | f64_to_i64_truncated(b))
}
