use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable record of one completed calculation.
///
/// Captures the equation as entered, the formatted result, and the
/// undo states at the moment of evaluation. Created once per
/// successful evaluation and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    equation: String,
    result: String,
    undo_states: Vec<String>,
}

impl Snapshot {
    pub fn new(
        equation: impl Into<String>,
        result: impl Into<String>,
        undo_states: Vec<String>,
    ) -> Self {
        Snapshot {
            equation: equation.into(),
            result: result.into(),
            undo_states,
        }
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    /// The undo states captured when the equation was evaluated.
    pub fn undo_states(&self) -> &[String] {
        &self.undo_states
    }

    /// The label of this snapshot's result row in the history view.
    pub fn result_label(&self) -> String {
        format!("={}", self.result)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.equation, self.result)
    }
}
