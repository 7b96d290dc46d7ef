/// The parser state, its token buffer and the entry points.
///
/// Contains the lookahead machinery shared by every precedence level and the
/// top-level `parse` that checks the whole input was consumed.
pub mod core;

/// Binary operator precedence levels.
///
/// One function per level, from bitwise or down to exponentiation, including
/// implicit multiplication.
pub mod binary;

/// Atomic expressions.
///
/// Negation, parenthesized groups, function calls, constants and numeric
/// literals.
pub mod unary;

/// Small shared helpers, such as comma-separated argument lists.
pub mod utils;
