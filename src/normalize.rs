use regex::{Captures, Regex};

/// Rewrites keypad notation into the grammar the evaluator accepts.
///
/// The only rewrite is factorial notation: each parenthesized group
/// directly followed by `!` becomes a `factorial(..)` call. The power
/// operator `^` is already the evaluator's own token and passes
/// through unchanged.
pub struct Normalizer {
    factorial: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Normalizer {
            // A '(' group with no nested ')' before the closing ')!'.
            factorial: Regex::new(r"\(([^)]+)\)!").expect("factorial pattern is valid"),
        }
    }

    /// Single left-to-right substitution pass.
    ///
    /// Nested groups are not reprocessed: `((2)!)!` comes out as
    /// `factorial((2))!`, which the evaluator rejects. Parenthesis
    /// balance is not checked here either; malformed input is left for
    /// the evaluator to refuse.
    pub fn normalize(&self, text: &str) -> String {
        self.factorial
            .replace_all(text, |caps: &Captures<'_>| format!("factorial({})", &caps[1]))
            .into_owned()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
