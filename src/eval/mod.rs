mod parser;
mod token;

use crate::error::EvalError;

use parser::Parser;

/// Evaluates an already-normalized arithmetic expression.
///
/// Pure function of the input text. Everything outside the fixed
/// grammar fails with an [`EvalError`]; nothing is ever executed.
pub fn evaluate(text: &str) -> Result<f64, EvalError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let tokens = token::tokenize(trimmed)?;
    Parser::new(tokens).evaluate()
}

/// Formats a result for the display.
///
/// The string doubles as the next expression text, so it has to
/// re-evaluate to the same value: integral results drop the decimal
/// point, everything else keeps up to ten fractional digits with
/// trailing zeros trimmed.
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.10}", value);
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
