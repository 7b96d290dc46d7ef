use std::fmt;

use crate::interpreter::builtin::Builtin;

/// The static type of a (sub)expression.
///
/// A two-element lattice where `Integer` is the more specific value. The type
/// only drives validation; every value is stored and computed as an `f64`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NumericType {
    /// A whole number.
    Integer,
    /// A floating-point number.
    Float,
}

impl NumericType {
    /// Combines two operand types: `Integer` only if both sides are.
    ///
    /// ## Example
    /// ```
    /// use reckon::ast::NumericType;
    ///
    /// assert_eq!(NumericType::Integer.join(NumericType::Integer), NumericType::Integer);
    /// assert_eq!(NumericType::Integer.join(NumericType::Float), NumericType::Float);
    /// ```
    #[must_use]
    pub const fn join(self, other: Self) -> Self {
        match (self, other) {
            (Self::Integer, Self::Integer) => Self::Integer,
            _ => Self::Float,
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
        }
    }
}

/// An abstract syntax tree node representing an expression.
///
/// Each variant owns its children, so a parsed expression is a plain tree that
/// is never mutated after the parser builds it. Every node records the source
/// line it came from for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The value of the literal.
        value:        f64,
        /// `Integer` for decimal, hexadecimal and binary integers.
        numeric_type: NumericType,
        /// Line number in the source code.
        line:         usize,
    },
    /// A named constant such as `pi`.
    Constant {
        /// Canonical name of the constant.
        name:         &'static str,
        /// The value of the constant.
        value:        f64,
        /// The type of the constant.
        numeric_type: NumericType,
        /// Line number in the source code.
        line:         usize,
    },
    /// A unary operation.
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op:   BinaryOperator,
        /// Left operand.
        lhs:  Box<Self>,
        /// Right operand.
        rhs:  Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A call to a builtin function (e.g. `sin(x)`).
    Call {
        /// The builtin being called.
        function:  &'static Builtin,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Builds a binary node from two operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, lhs: Self, rhs: Self, line: usize) -> Self {
        Self::Binary { op,
                       lhs: Box::new(lhs),
                       rhs: Box::new(rhs),
                       line }
    }

    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use reckon::ast::{Expr, NumericType};
    ///
    /// let expr = Expr::Literal { value:        2.0,
    ///                            numeric_type: NumericType::Integer,
    ///                            line:         5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Constant { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }

    /// Infers the numeric type of the expression bottom-up.
    ///
    /// Literals and constants report their own type, negation keeps the type
    /// of its operand, binary operators follow their type rule and calls are
    /// always `Float`. This does not validate anything; see
    /// [`crate::analyze`].
    ///
    /// ## Example
    /// ```
    /// use reckon::{ast::NumericType, parse};
    ///
    /// assert_eq!(parse("0x10 | 2 * 3").unwrap().numeric_type(), NumericType::Integer);
    /// assert_eq!(parse("6 / 3").unwrap().numeric_type(), NumericType::Float);
    /// assert_eq!(parse("abs(2)").unwrap().numeric_type(), NumericType::Float);
    /// ```
    #[must_use]
    pub fn numeric_type(&self) -> NumericType {
        match self {
            Self::Literal { numeric_type, .. } | Self::Constant { numeric_type, .. } => {
                *numeric_type
            },
            Self::Unary { operand, .. } => operand.numeric_type(),
            Self::Binary { op, lhs, rhs, .. } => {
                (op.rules().result_type)(lhs.numeric_type(), rhs.numeric_type())
            },
            Self::Call { .. } => NumericType::Float,
        }
    }

    /// Renders the tree as an indented multi-line dump.
    ///
    /// Each node takes one line; children are indented one level (`| `)
    /// deeper than their parent.
    ///
    /// ## Example
    /// ```
    /// use reckon::parse;
    ///
    /// let tree = parse("1 + sqrt(4)").unwrap();
    /// assert_eq!(tree.render(), "+\n| 1\n| sqrt\n| | 4\n");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        out.push_str(&"| ".repeat(depth));
        out.push_str(&self.label());
        out.push('\n');

        match self {
            Self::Literal { .. } | Self::Constant { .. } => {},
            Self::Unary { operand, .. } => operand.render_into(out, depth + 1),
            Self::Binary { lhs, rhs, .. } => {
                lhs.render_into(out, depth + 1);
                rhs.render_into(out, depth + 1);
            },
            Self::Call { arguments, .. } => {
                for argument in arguments {
                    argument.render_into(out, depth + 1);
                }
            },
        }
    }

    fn label(&self) -> String {
        match self {
            Self::Literal { value, .. } => value.to_string(),
            Self::Constant { name, .. } => (*name).to_string(),
            Self::Unary { op, .. } => op.to_string(),
            Self::Binary { op, .. } => op.to_string(),
            Self::Call { function, .. } => function.name.to_string(),
        }
    }
}

/// Represents a binary operator.
///
/// Each operator carries a fixed set of rules for analysis, typing and
/// evaluation; see [`BinaryOperator::rules`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`, or two adjacent operands)
    Mul,
    /// Division (`/`)
    Div,
    /// Integer remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, BitAnd, BitOr, Div, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
            BitAnd => "&",
            BitOr => "|",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
