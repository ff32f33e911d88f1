use serde::{Deserialize, Serialize};

use crate::error::EmptyStackError;

/// Ordered history of prior expression-text states, most recent last.
///
/// After N key presses with no undo in between the stack holds exactly
/// N entries, entry i being the text immediately before key press i+1
/// was applied. Copies taken with [`UndoStack::snapshot`] are
/// independent values; no state is shared.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoStack {
    states: Vec<String>,
}

impl UndoStack {
    /// A stack with no entries, the state of a fresh session.
    pub fn new() -> Self {
        UndoStack { states: Vec::new() }
    }

    /// The stack state right after CLR: one empty entry, so a single
    /// undo lands back on the empty expression instead of failing.
    pub fn cleared() -> Self {
        UndoStack {
            states: vec![String::new()],
        }
    }

    /// Undo states as if `text` had been typed one character at a
    /// time: the successive proper prefixes of `text`, shortest first.
    pub fn retyped(text: &str) -> Self {
        let states = text
            .char_indices()
            .map(|(offset, _)| text[..offset].to_string())
            .collect();
        UndoStack { states }
    }

    pub fn push(&mut self, state: impl Into<String>) {
        self.states.push(state.into());
    }

    /// Removes and returns the most recently pushed state.
    pub fn pop(&mut self) -> Result<String, EmptyStackError> {
        self.states.pop().ok_or(EmptyStackError)
    }

    /// Resets to the post-CLR state of a single empty entry.
    pub fn clear(&mut self) {
        self.states.clear();
        self.states.push(String::new());
    }

    /// Owned copy of the current states, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.states.clone()
    }

    /// Replaces the contents wholesale.
    pub fn restore(&mut self, states: Vec<String>) {
        self.states = states;
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
