/// Static semantic checks on a parsed tree.
///
/// The analyzer infers operand types bottom-up and rejects trees that cannot
/// be evaluated meaningfully: bitwise operators over non-integers and calls
/// with the wrong number of arguments.
pub mod analyzer;
/// Builtin function and constant tables.
///
/// Both tables are fixed at compile time. The parser resolves names against
/// them; the analyzer checks call arity against them.
pub mod builtin;
/// Computes the numeric result of an analyzed tree.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The scanner reads the raw source text and produces tokens on demand, each
/// carrying its kind, its exact lexeme and its source position.
///
/// # Responsibilities
/// - Skips whitespace and `//` line comments.
/// - Classifies decimal, fractional, hexadecimal and binary literals.
/// - Reports characters that start no token.
pub mod lexer;
/// Per-operator analysis, typing and evaluation rules.
pub mod operator;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level. It pulls
/// tokens lazily from the scanner into a small lookahead buffer.
///
/// # Responsibilities
/// - Converts tokens into a single expression tree.
/// - Resolves function and constant names against the builtin tables.
/// - Reports the first grammar violation, with its source line.
pub mod parser;
