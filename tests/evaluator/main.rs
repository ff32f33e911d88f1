use keycalc::{evaluate, format_result, EvalError, Normalizer};

fn normalized_eval(text: &str) -> Result<f64, EvalError> {
    let normalizer = Normalizer::new();
    evaluate(&normalizer.normalize(text))
}

#[test]
fn plain_arithmetic() {
    assert_eq!(normalized_eval("1+2").unwrap(), 3.0);
    assert_eq!(normalized_eval("2*3+4").unwrap(), 10.0);
    assert_eq!(normalized_eval("2*(3+4)").unwrap(), 14.0);
    assert_eq!(normalized_eval("1/4").unwrap(), 0.25);
    assert_eq!(normalized_eval("10%4").unwrap(), 2.0);
}

#[test]
fn power_notation() {
    assert_eq!(normalized_eval("2^3").unwrap(), 8.0);
    assert!((normalized_eval("9^0.5").unwrap() - 3.0).abs() < 1e-12);
}

#[test]
fn factorial_notation() {
    assert_eq!(normalized_eval("(5)!").unwrap(), 120.0);
    assert_eq!(normalized_eval("(3+2)!").unwrap(), 120.0);
    assert_eq!(normalized_eval("(3)!+(4)!").unwrap(), 30.0);
}

#[test]
fn nested_factorial_rejected() {
    // Single-pass normalization leaves the outer '!' behind.
    assert!(normalized_eval("((2)!)!").is_err());
}

#[test]
fn named_functions() {
    assert_eq!(normalized_eval("sqrt(16)").unwrap(), 4.0);
    assert!((normalized_eval("log10(1000)").unwrap() - 3.0).abs() < 1e-12);
    assert!((normalized_eval("log2(32)").unwrap() - 5.0).abs() < 1e-12);
    assert_eq!(normalized_eval("log(1)").unwrap(), 0.0);
    assert!((normalized_eval("exp(1)").unwrap() - std::f64::consts::E).abs() < 1e-12);
}

#[test]
fn malformed_input_fails() {
    assert!(normalized_eval("").is_err());
    assert!(normalized_eval("1+").is_err());
    assert!(normalized_eval("(1+2").is_err());
    assert!(normalized_eval("1+2)").is_err());
    assert!(normalized_eval("!").is_err());
    assert!(normalized_eval("1..2").is_err());
}

#[test]
fn math_failures() {
    assert_eq!(normalized_eval("5/0"), Err(EvalError::DivisionByZero));
    assert_eq!(normalized_eval("5%0"), Err(EvalError::DivisionByZero));
    assert!(normalized_eval("sqrt(-1)").unwrap_err().is_math());
    assert!(normalized_eval("(-3)!").unwrap_err().is_math());
    assert!(normalized_eval("(2.5)!").unwrap_err().is_math());
}

#[test]
fn no_identifiers_outside_the_grammar() {
    assert_eq!(
        normalized_eval("system(1)"),
        Err(EvalError::UnknownIdentifier("system".to_string()))
    );
    assert!(normalized_eval("x+1").is_err());
    assert!(normalized_eval("a=1").is_err());
}

#[test]
fn leading_zero_literals_accepted() {
    assert_eq!(normalized_eval("1/05").unwrap(), 0.2);
    assert_eq!(format_result(normalized_eval("1/05").unwrap()), "0.2");
}

#[test]
fn display_formatting() {
    assert_eq!(format_result(normalized_eval("1+2").unwrap()), "3");
    assert_eq!(format_result(normalized_eval("(5)!").unwrap()), "120");
    assert_eq!(format_result(normalized_eval("4/2").unwrap()), "2");
    assert_eq!(
        format_result(normalized_eval("1/3").unwrap()),
        "0.3333333333"
    );
}
