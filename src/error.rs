use std::fmt;

/// Why an expression failed to evaluate.
///
/// Syntax and math failures are distinguished here even though the
/// session collapses both to the `"Error"` display sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    EmptyExpression,
    UnexpectedChar(char),
    UnexpectedToken(String),
    UnexpectedEnd,
    TrailingInput(String),
    MalformedNumber(String),
    UnknownIdentifier(String),
    DivisionByZero,
    FactorialDomain(f64),
    FactorialOverflow(f64),
    FunctionDomain {
        function: &'static str,
        argument: f64,
    },
    NonFiniteResult,
}

impl EvalError {
    /// True for failures of arithmetic rather than of syntax.
    pub fn is_math(&self) -> bool {
        matches!(
            self,
            EvalError::DivisionByZero
                | EvalError::FactorialDomain(_)
                | EvalError::FactorialOverflow(_)
                | EvalError::FunctionDomain { .. }
                | EvalError::NonFiniteResult
        )
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::EmptyExpression => write!(f, "empty expression"),
            EvalError::UnexpectedChar(ch) => write!(f, "unexpected character '{}'", ch),
            EvalError::UnexpectedToken(token) => write!(f, "unexpected token '{}'", token),
            EvalError::UnexpectedEnd => write!(f, "unexpected end of expression"),
            EvalError::TrailingInput(token) => {
                write!(f, "trailing input starting at '{}'", token)
            }
            EvalError::MalformedNumber(literal) => {
                write!(f, "malformed number literal '{}'", literal)
            }
            EvalError::UnknownIdentifier(name) => write!(f, "unknown identifier '{}'", name),
            EvalError::DivisionByZero => write!(f, "division by zero"),
            EvalError::FactorialDomain(argument) => write!(
                f,
                "factorial argument must be a non-negative integer (got {})",
                argument
            ),
            EvalError::FactorialOverflow(argument) => {
                write!(f, "factorial of {} overflows", argument)
            }
            EvalError::FunctionDomain { function, argument } => {
                write!(f, "{} is undefined for argument {}", function, argument)
            }
            EvalError::NonFiniteResult => write!(f, "result is not a finite number"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Popping an undo stack that has no entries left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStackError;

impl fmt::Display for EmptyStackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "undo stack is empty")
    }
}

impl std::error::Error for EmptyStackError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    NotFound { label: String },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::NotFound { label } => {
                write!(f, "no history row labeled '{}'", label)
            }
        }
    }
}

impl std::error::Error for HistoryError {}
