use reckon::{
    analyze,
    ast::{BinaryOperator, Expr, NumericType, UnaryOperator},
    error::{ParseError, SemanticError},
    parse, render,
};

fn literal(value: f64, numeric_type: NumericType) -> Expr {
    Expr::Literal { value,
                    numeric_type,
                    line: 1 }
}

#[test]
fn implicit_multiplication_builds_a_mul_node() {
    let tree = parse("2 (3 + 4)").unwrap();

    let expected = Expr::binary(BinaryOperator::Mul,
                                literal(2.0, NumericType::Integer),
                                Expr::binary(BinaryOperator::Add,
                                             literal(3.0, NumericType::Integer),
                                             literal(4.0, NumericType::Integer),
                                             1),
                                1);
    assert_eq!(tree, expected);
}

#[test]
fn negation_wraps_a_single_atom() {
    let tree = parse("-2 ^ 2").unwrap();

    let Expr::Binary { op: BinaryOperator::Pow, lhs, .. } = tree else {
        panic!("expected a power node");
    };
    assert!(matches!(*lhs, Expr::Unary { op: UnaryOperator::Negate, .. }));
}

#[test]
fn calls_collect_any_number_of_arguments() {
    for (src, count) in [("sqrt()", 0), ("sqrt(1)", 1), ("pow(1, 2)", 2), ("pow(1, 2, 3)", 3)] {
        let Expr::Call { arguments, .. } = parse(src).unwrap() else {
            panic!("expected a call for {src}");
        };
        assert_eq!(arguments.len(), count, "{src}");
    }
}

#[test]
fn renders_an_indented_tree() {
    let tree = parse("-pi * pow(2, 0x3)").unwrap();

    assert_eq!(render(&tree), "*\n| -\n| | pi\n| pow\n| | 2\n| | 3\n");
}

#[test]
fn renders_constant_aliases_by_canonical_name() {
    assert_eq!(parse("π").unwrap().render(), "pi\n");
}

#[test]
fn infers_numeric_types() {
    let cases = [("1 + 2", NumericType::Integer),
                 ("0x10 % 0b11", NumericType::Integer),
                 ("2 ^ 3", NumericType::Integer),
                 ("-(1 | 2)", NumericType::Integer),
                 ("1 + 2.0", NumericType::Float),
                 ("4 / 2", NumericType::Float),
                 ("e", NumericType::Float),
                 ("floor(2)", NumericType::Float)];

    for (src, numeric_type) in cases {
        assert_eq!(parse(src).unwrap().numeric_type(), numeric_type, "{src}");
    }
}

#[test]
fn nodes_remember_their_line() {
    let tree = parse("1\n+\n2").unwrap();

    assert_eq!(tree.line_number(), 2);
}

#[test]
fn parse_errors_name_the_problem() {
    assert_eq!(parse("1 +\n\n)"),
               Err(ParseError::UnexpectedToken { token: ")".to_string(),
                                                 line:  3, }));
    assert_eq!(parse("(1"), Err(ParseError::ExpectedClosingParen { line: 1 }));
    assert_eq!(parse("1 *"), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
    assert_eq!(parse("1 2"),
               Err(ParseError::UnexpectedTrailingTokens { token: "2".to_string(),
                                                          line:  1, }));
    assert_eq!(parse("0x"),
               Err(ParseError::InvalidNumber { literal: "0x".to_string(),
                                               line:    1, }));
    assert_eq!(parse("pow(1 2)"),
               Err(ParseError::UnexpectedToken { token: "2".to_string(),
                                                 line:  1, }));
    assert_eq!(parse("2 pi ^ 2"),
               Err(ParseError::UnexpectedTrailingTokens { token: "^".to_string(),
                                                          line:  1, }));
    assert_eq!(parse(&format!("1{}.0", "0".repeat(400))),
               Err(ParseError::InvalidNumber { literal: format!("1{}.0", "0".repeat(400)),
                                               line:    1, }));
    assert_eq!(parse(&format!("{}1", "-".repeat(200_000))),
               Err(ParseError::NestingTooDeep { line: 1 }));
    assert_eq!(parse("foo(1)"),
               Err(ParseError::UnknownIdentifier { name: "foo".to_string(),
                                                   line: 1, }));
}

#[test]
fn analysis_reports_the_first_violation() {
    assert_eq!(analyze(&parse("3.5 & 2").unwrap()),
               Err(SemanticError::IllegalOperands { operator: BinaryOperator::BitAnd,
                                                    line:     1, }));
    assert_eq!(analyze(&parse("pow(2)").unwrap()),
               Err(SemanticError::ArityMismatch { name:     "pow".to_string(),
                                                  expected: 2,
                                                  found:    1,
                                                  line:     1, }));
    assert_eq!(analyze(&parse("sqrt(1.5 | 1, 2)").unwrap()),
               Err(SemanticError::ArityMismatch { name:     "sqrt".to_string(),
                                                  expected: 1,
                                                  found:    2,
                                                  line:     1, }));
    assert_eq!(analyze(&parse("sqrt(1.5 | 1)").unwrap()),
               Err(SemanticError::IllegalOperands { operator: BinaryOperator::BitOr,
                                                    line:     1, }));
}

#[test]
fn errors_render_as_one_line_diagnostics() {
    let parse_error = parse("2 $").unwrap_err();
    assert_eq!(parse_error.to_string(),
               "Error on line 1: Unknown character '$' at column 3.");

    let argument_error = parse("pow(1 2)").unwrap_err();
    assert_eq!(argument_error.to_string(),
               "Error on line 1: Unexpected token: 2.");

    let semantic_error = analyze(&parse("1 | 0.5").unwrap()).unwrap_err();
    assert_eq!(semantic_error.to_string(),
               "Error on line 1: Illegal operands for |.");
}
