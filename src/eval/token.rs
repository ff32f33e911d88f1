use std::fmt;

use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    ParenOpen,
    ParenClose,
    Num(f64),
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::Caret => write!(f, "^"),
            Token::ParenOpen => write!(f, "("),
            Token::ParenClose => write!(f, ")"),
            Token::Num(num) => write!(f, "{}", num),
            Token::Ident(name) => write!(f, "{}", name),
        }
    }
}

/// Splits an expression into tokens.
///
/// A number literal is a maximal run of digits and dots and must parse
/// as `f64`, so `5.`, `.5` and `05` are accepted while `1.2.3` is not.
/// Any character outside the fixed alphabet fails.
pub fn tokenize(text: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        let ch_len = ch.len_utf8();
        match ch {
            ch if ch.is_whitespace() => rest = &rest[ch_len..],
            '+' => {
                tokens.push(Token::Plus);
                rest = &rest[ch_len..];
            }
            '-' => {
                tokens.push(Token::Minus);
                rest = &rest[ch_len..];
            }
            '*' => {
                tokens.push(Token::Star);
                rest = &rest[ch_len..];
            }
            '/' => {
                tokens.push(Token::Slash);
                rest = &rest[ch_len..];
            }
            '%' => {
                tokens.push(Token::Percent);
                rest = &rest[ch_len..];
            }
            '^' => {
                tokens.push(Token::Caret);
                rest = &rest[ch_len..];
            }
            '(' => {
                tokens.push(Token::ParenOpen);
                rest = &rest[ch_len..];
            }
            ')' => {
                tokens.push(Token::ParenClose);
                rest = &rest[ch_len..];
            }
            '0'..='9' | '.' => {
                let end = rest
                    .find(|c: char| !c.is_ascii_digit() && c != '.')
                    .unwrap_or(rest.len());
                let literal = &rest[..end];
                let num = literal
                    .parse::<f64>()
                    .map_err(|_| EvalError::MalformedNumber(literal.to_string()))?;
                tokens.push(Token::Num(num));
                rest = &rest[end..];
            }
            ch if ch.is_ascii_alphabetic() => {
                let end = rest
                    .find(|c: char| !c.is_ascii_alphanumeric())
                    .unwrap_or(rest.len());
                tokens.push(Token::Ident(rest[..end].to_string()));
                rest = &rest[end..];
            }
            other => return Err(EvalError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}
