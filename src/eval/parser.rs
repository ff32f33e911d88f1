use std::iter::Peekable;
use std::vec::IntoIter;

use crate::error::EvalError;

use super::token::Token;

/// Factorial arguments above this overflow `f64`.
const FACTORIAL_MAX: f64 = 170.0;

/// Recursive-descent evaluator over a fixed arithmetic grammar.
///
/// ```text
/// expr   := term { ('+'|'-') term }
/// term   := factor { ('*'|'/'|'%') factor }
/// factor := ('+'|'-') factor | power
/// power  := atom [ '^' factor ]
/// atom   := number | '(' expr ')' | ident '(' expr ')'
/// ```
///
/// Values are computed during the descent; there is no AST and no way
/// to reach anything outside the grammar above.
pub struct Parser {
    tokens: Peekable<IntoIter<Token>>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens: tokens.into_iter().peekable(),
        }
    }

    pub fn evaluate(mut self) -> Result<f64, EvalError> {
        let value = self.expr()?;
        if let Some(extra) = self.tokens.next() {
            return Err(EvalError::TrailingInput(extra.to_string()));
        }
        if !value.is_finite() {
            return Err(EvalError::NonFiniteResult);
        }
        Ok(value)
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut lhs = self.term()?;

        while let Some(Token::Plus | Token::Minus) = self.tokens.peek() {
            let is_plus = self.tokens.next() == Some(Token::Plus);
            let rhs = self.term()?;
            if is_plus {
                lhs += rhs;
            } else {
                lhs -= rhs;
            }
        }

        Ok(lhs)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut lhs = self.factor()?;

        loop {
            match self.tokens.peek() {
                Some(Token::Star) => {
                    self.tokens.next();
                    lhs *= self.factor()?;
                }
                Some(Token::Slash) => {
                    self.tokens.next();
                    let rhs = self.factor()?;
                    if rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    lhs /= rhs;
                }
                Some(Token::Percent) => {
                    self.tokens.next();
                    let rhs = self.factor()?;
                    if rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    lhs = floored_mod(lhs, rhs);
                }
                _ => break,
            }
        }

        Ok(lhs)
    }

    fn factor(&mut self) -> Result<f64, EvalError> {
        match self.tokens.peek() {
            Some(Token::Plus) => {
                self.tokens.next();
                self.factor()
            }
            Some(Token::Minus) => {
                self.tokens.next();
                Ok(-self.factor()?)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, EvalError> {
        let base = self.atom()?;

        if let Some(Token::Caret) = self.tokens.peek() {
            self.tokens.next();
            // Right-associative, and the exponent may carry its own sign.
            let exponent = self.factor()?;
            return Ok(base.powf(exponent));
        }

        Ok(base)
    }

    fn atom(&mut self) -> Result<f64, EvalError> {
        match self.tokens.next() {
            Some(Token::Num(value)) => Ok(value),
            Some(Token::ParenOpen) => {
                let value = self.expr()?;
                self.expect_paren_close()?;
                Ok(value)
            }
            Some(Token::Ident(name)) => {
                match self.tokens.next() {
                    Some(Token::ParenOpen) => {}
                    Some(other) => return Err(EvalError::UnexpectedToken(other.to_string())),
                    None => return Err(EvalError::UnexpectedEnd),
                }
                let argument = self.expr()?;
                self.expect_paren_close()?;
                apply_function(&name, argument)
            }
            Some(other) => Err(EvalError::UnexpectedToken(other.to_string())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn expect_paren_close(&mut self) -> Result<(), EvalError> {
        match self.tokens.next() {
            Some(Token::ParenClose) => Ok(()),
            Some(other) => Err(EvalError::UnexpectedToken(other.to_string())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}

/// Modulo with the sign of the divisor, `a - b * floor(a / b)`.
fn floored_mod(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}

fn apply_function(name: &str, argument: f64) -> Result<f64, EvalError> {
    match name {
        "factorial" => factorial(argument),
        "sqrt" => {
            if argument < 0.0 {
                Err(EvalError::FunctionDomain {
                    function: "sqrt",
                    argument,
                })
            } else {
                Ok(argument.sqrt())
            }
        }
        // The 'ln' keypad key arrives as 'log'; both mean natural log.
        "log" | "ln" => natural_family(argument, "log", f64::ln),
        "log10" => natural_family(argument, "log10", f64::log10),
        "log2" => natural_family(argument, "log2", f64::log2),
        "exp" => Ok(argument.exp()),
        _ => Err(EvalError::UnknownIdentifier(name.to_string())),
    }
}

fn natural_family(
    argument: f64,
    function: &'static str,
    apply: fn(f64) -> f64,
) -> Result<f64, EvalError> {
    if argument <= 0.0 {
        Err(EvalError::FunctionDomain { function, argument })
    } else {
        Ok(apply(argument))
    }
}

fn factorial(argument: f64) -> Result<f64, EvalError> {
    if argument < 0.0 || argument.fract() != 0.0 {
        return Err(EvalError::FactorialDomain(argument));
    }
    if argument > FACTORIAL_MAX {
        return Err(EvalError::FactorialOverflow(argument));
    }

    let n = argument as u64;
    let mut product = 1.0_f64;
    for k in 2..=n {
        product *= k as f64;
    }
    Ok(product)
}
