//! # reckon
//!
//! reckon is a small arithmetic expression language written in Rust.
//! It scans, parses, analyzes, and evaluates single expressions built from
//! decimal, hexadecimal and binary numbers, arithmetic and bitwise operators,
//! named constants and builtin functions.
//!
//! ```
//! assert_eq!(reckon::calculate("2 (3 + 4)").unwrap(), 14.0);
//! assert_eq!(reckon::calculate("0x1F | 0b100000").unwrap(), 63.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{error::ParseError, interpreter::parser::core::Parser};
pub use crate::{
    ast::Expr,
    interpreter::{analyzer::analyze, evaluator::evaluate},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator and type enums that
/// describe an expression as a tree. The tree is built by the parser, checked
/// by the analyzer and folded by the evaluator.
///
/// # Responsibilities
/// - Defines the expression variants: literal, constant, unary, binary, call.
/// - Attaches source lines to nodes for error reporting.
/// - Infers numeric types and renders trees for diagnostics.
pub mod ast;
/// Provides unified error types for parsing and analysis.
///
/// This module defines all errors that can be raised while scanning, parsing,
/// or analyzing an expression. Evaluation itself cannot fail.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, analyzer).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the pipeline from source text to number.
///
/// This module ties together the scanner, parser, builtin tables, operator
/// rules, analyzer and evaluator.
pub mod interpreter;
/// General numeric conversion helpers.
pub mod util;

/// Parses `source` into an expression tree.
///
/// The tree is not yet analyzed; call [`analyze`] before trusting the result
/// of [`evaluate`].
///
/// # Errors
/// Returns the first scanning or grammar error.
///
/// # Example
/// ```
/// use reckon::{error::ParseError, parse};
///
/// assert!(parse("sqrt(16) + pi").is_ok());
/// assert!(matches!(parse("tau"), Err(ParseError::UnknownIdentifier { .. })));
/// assert!(matches!(parse("2 $ 3"), Err(ParseError::UnknownCharacter { character: '$', .. })));
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    Parser::new(source).parse()
}

/// Renders an expression tree as an indented multi-line dump.
///
/// See [`Expr::render`].
#[must_use]
pub fn render(expr: &Expr) -> String {
    expr.render()
}

/// Parses, analyzes and evaluates `source` in one call.
///
/// # Errors
/// Returns a [`ParseError`] or an [`error::SemanticError`] describing the
/// first problem found.
///
/// # Examples
/// ```
/// use reckon::calculate;
///
/// assert_eq!(calculate("(2 + 3) * 4").unwrap(), 20.0);
///
/// // Bitwise operators only take integers.
/// assert!(calculate("3.5 & 2").is_err());
/// ```
pub fn calculate(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let expr = parse(source)?;
    analyze(&expr)?;

    let value = evaluate(&expr);
    debug!(value, "evaluated expression");
    Ok(value)
}
