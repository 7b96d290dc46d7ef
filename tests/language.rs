use std::fs;

use reckon::{analyze, calculate, evaluate, parse};
use walkdir::WalkDir;

const RESULT_MARKER: &str = "result:";
const MARGIN: f64 = 1e-5;

#[test]
fn pass_files_evaluate_to_their_results() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/pass").into_iter()
                                  .filter_map(Result::ok)
                                  .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expected_result(&content).unwrap_or_else(|| {
                                                    panic!("Missing result for file {path:?}")
                                                });

        count += 1;
        match calculate(&content) {
            Ok(value) => assert!((value - expected).abs() <= MARGIN,
                                 "{path:?}: result {value}, expected {expected}"),
            Err(e) => panic!("{path:?} failed:\n{content}\nError: {e}"),
        }
    }

    assert!(count > 0, "No test files found in tests/pass");
}

fn expected_result(content: &str) -> Option<f64> {
    content.lines().find_map(|line| {
                       let index = line.find(RESULT_MARKER)?;
                       line[index + RESULT_MARKER.len()..].trim().parse().ok()
                   })
}

fn assert_result(src: &str, expected: f64) {
    match calculate(src) {
        Ok(value) => assert!((value - expected).abs() <= MARGIN,
                             "{src}: result {value}, expected {expected}"),
        Err(e) => panic!("Expression failed: {src}: {e}"),
    }
}

fn assert_failure(src: &str) {
    if calculate(src).is_ok() {
        panic!("Expression succeeded but was expected to fail: {src}")
    }
}

#[test]
fn precedence_of_arithmetic_operators() {
    assert_result("2 + 3 * 4", 14.0);
    assert_result("(2 + 3) * 4", 20.0);
    assert_result("10 - 4 - 3", 3.0);
    assert_result("48 / 4 / 3", 4.0);
    assert_result("2 * 3 ^ 2", 18.0);
    assert_result("7 % 4 * 2", 6.0);
}

#[test]
fn exponentiation_is_left_associative() {
    assert_result("2 ^ 3 ^ 2", 64.0);
    assert_result("2 ^ (3 ^ 2)", 512.0);
}

#[test]
fn negation_binds_tighter_than_power() {
    assert_result("-2 ^ 2", 4.0);
    assert_result("-(2 ^ 2)", -4.0);
    assert_result("--3", 3.0);
    assert_result("4 - -2", 6.0);
}

#[test]
fn bitwise_operators_bind_looser_than_additive() {
    assert_result("1 | 2 + 4", 7.0);
    assert_result("6 & 3 + 1", 4.0);
    assert_result("1 | 6 & 3", 3.0);
    assert_result("0x1F & 0b1010", 10.0);
}

#[test]
fn numeric_literal_formats() {
    assert_result("0x1F", 31.0);
    assert_result("0xff", 255.0);
    assert_result("0b101", 5.0);
    assert_result("0", 0.0);
    assert_result("007", 7.0);
    assert_result("3.25", 3.25);
    assert_result("0.5", 0.5);
}

#[test]
fn large_integer_literals_are_exact() {
    assert_eq!(calculate("9007199254740993").unwrap(), 9_007_199_254_740_993_u64 as f64);
    assert_eq!(calculate("18446744073709551615").unwrap(), u64::MAX as f64);
    assert_eq!(calculate("123456789").unwrap(), 123_456_789.0);
}

#[test]
fn implicit_multiplication() {
    assert_result("2 (3 + 4)", 14.0);
    assert_result("(1 + 1)(2 + 2)", 8.0);
    assert_result("2pi", 2.0 * std::f64::consts::PI);
    assert_result("3 sqrt(4)", 6.0);
    assert_result("2 ^ 2 pi", 4.0 * std::f64::consts::PI);
}

#[test]
fn implicit_operand_takes_no_exponent() {
    assert_failure("2 pi ^ 2");
    assert_failure("2(3) ^ 2");
    assert_result("2 (pi ^ 2)", 2.0 * std::f64::consts::PI.powi(2));
}

#[test]
fn builtin_functions() {
    assert_result("sqrt(16)", 4.0);
    assert_result("pow(2, 10)", 1024.0);
    assert_result("log(1000)", 3.0);
    assert_result("log10(100)", 2.0);
    assert_result("log2(8)", 3.0);
    assert_result("ln(e)", 1.0);
    assert_result("abs(-3)", 3.0);
    assert_result("sin(0) + cos(0)", 1.0);
    assert_result("tan(0)", 0.0);
    assert_result("asin(1)", std::f64::consts::FRAC_PI_2);
    assert_result("acos(1)", 0.0);
    assert_result("atan(1)", std::f64::consts::FRAC_PI_4);
    assert_result("deg(pi)", 180.0);
    assert_result("rad(180)", std::f64::consts::PI);
    assert_result("round(2.5)", 3.0);
    assert_result("floor(-2.5)", -3.0);
    assert_result("ceil(2.1)", 3.0);
    assert_result("sqrt(sqrt(16) * 4)", 4.0);
}

#[test]
fn constants() {
    assert_result("pi", std::f64::consts::PI);
    assert_result("π", std::f64::consts::PI);
    assert_result("e", std::f64::consts::E);
}

#[test]
fn remainder_truncates_operands() {
    assert_result("7 % 3", 1.0);
    assert_result("7.9 % 3.2", 1.0);
    assert_result("-7 % 3", -1.0);
    assert!(calculate("5 % 0").unwrap().is_nan());
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_result("1 + // one\n 2 // two", 3.0);
    assert_result("\t1\r\n+\n2\n", 3.0);
}

#[test]
fn evaluation_does_not_trap_floating_point_edge_cases() {
    assert!(calculate("1 / 0").unwrap().is_infinite());
    assert!(calculate("sqrt(-1)").unwrap().is_nan());
    assert!(calculate("(-8) ^ 0.5").unwrap().is_nan());
}

#[test]
fn evaluation_is_repeatable() {
    let tree = parse("sqrt(2) * 3 + 0x10 % 3").unwrap();
    analyze(&tree).unwrap();
    analyze(&tree).unwrap();

    let first = evaluate(&tree);
    let second = evaluate(&tree);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn malformed_input_is_error() {
    assert_failure("");
    assert_failure("2 +");
    assert_failure("(2 + 3");
    assert_failure("2 3");
    assert_failure("2 $ 3");
    assert_failure("0x");
    assert_failure("0b");
    assert_failure("99999999999999999999");
    assert_failure("sqrt(4");
    assert_failure("sqrt(4 5)");
    assert_failure("3.");
    assert_failure(&format!("1{}.0", "0".repeat(400)));
}

#[test]
fn unknown_names_are_error() {
    assert_failure("tau");
    assert_failure("sinh(1)");
    assert_failure("2x");
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure("pow(2)");
    assert_failure("sqrt()");
    assert_failure("sqrt(1, 2)");
}

#[test]
fn bitwise_operators_reject_float_operands() {
    assert_failure("3.5 & 2");
    assert_failure("2 | 0.5");
    assert_failure("pi | 1");
    assert_failure("(4 / 2) & 1");
    assert_failure("sqrt(4) & 1");
}

#[test]
fn deep_nesting_is_error_not_a_crash() {
    assert_result(&format!("{}1", "-".repeat(100)), 1.0);
    assert_result(&format!("{}1{}", "(".repeat(40), ")".repeat(40)), 1.0);
    assert_failure(&format!("{}1", "-".repeat(200_000)));
    assert_failure(&format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000)));
}
