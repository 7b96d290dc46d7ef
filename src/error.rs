/// Scanning and parsing errors.
///
/// Defines every failure that can occur before a tree exists: characters that
/// start no token, malformed numeric literals, unknown names and grammar
/// violations.
pub mod parse_error;
/// Semantic analysis errors.
///
/// Contains the failures the analysis pass reports on a well-formed tree:
/// calls with the wrong number of arguments and bitwise operators applied to
/// non-integer operands.
pub mod semantic_error;

pub use parse_error::ParseError;
pub use semantic_error::SemanticError;
