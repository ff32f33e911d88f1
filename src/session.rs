use std::fmt;

use crate::error::HistoryError;
use crate::eval;
use crate::history::{HistoryStore, Snapshot};
use crate::normalize::Normalizer;
#[cfg(feature = "emitter")]
use crate::signal::SignalHub;
use crate::undo::UndoStack;

/// Display value marking a failed evaluation. Never stored in history;
/// the next key press clears it before being applied.
pub const ERROR_SENTINEL: &str = "Error";

/// Signal fired when evaluation fails. Payload: the offending expression.
pub const EVALUATION_FAILED: &str = "EvaluationFailed";

/// Signal fired when display validity flips. Payload: `"valid"` or `"invalid"`.
pub const VALIDITY_CHANGED: &str = "ValidityChanged";

/// Whether the current expression would evaluate, for display feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    pub fn as_str(self) -> &'static str {
        match self {
            Validity::Valid => "valid",
            Validity::Invalid => "invalid",
        }
    }

    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }
}

/// One calculator session: the current expression, its undo stack,
/// the calculation history, and the outbound signal queue.
///
/// Key presses and history selections are synchronous; each call
/// completes its whole transition before returning. A session owns
/// all of its state, so concurrent sessions are simply independent
/// values.
pub struct Session {
    equation: String,
    undo: UndoStack,
    history: HistoryStore,
    normalizer: Normalizer,
    validity: Validity,
    #[cfg(feature = "emitter")]
    signals: SignalHub,
}

impl Session {
    pub fn new() -> Self {
        Session {
            equation: String::new(),
            undo: UndoStack::new(),
            history: HistoryStore::new(),
            normalizer: Normalizer::new(),
            validity: Validity::Valid,
            #[cfg(feature = "emitter")]
            signals: SignalHub::new(),
        }
    }

    /// The text the display shows.
    pub fn display_text(&self) -> &str {
        &self.equation
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// History row labels in view order.
    pub fn history_labels(&self) -> Vec<String> {
        self.history.labels()
    }

    pub fn undo_states(&self) -> &[String] {
        self.undo.states()
    }

    /// Registers a presentation-layer listener for a signal type.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, signal: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.signals.on(signal, listener);
    }

    /// Applies one key press.
    ///
    /// An `Error` display clears first, then the key applies to the
    /// now-empty expression. After the transition the expression is
    /// re-checked for validity and queued signals are emitted.
    pub fn press(&mut self, key: &str) {
        if self.equation == ERROR_SENTINEL {
            self.clear();
        }

        if key == "CLR" {
            self.clear();
        } else if key == "=" {
            self.evaluate_current();
        } else if key == "DEL" {
            self.delete_last_entry();
        } else if key == "mod" {
            self.undo.push(self.equation.clone());
            self.equation.push('%');
        } else if is_digit_key(key) {
            self.undo.push(self.equation.clone());
            self.equation.push_str(key);
        } else {
            self.handle_operator_key(key);
        }

        self.refresh_validity();
        self.emit_queued();
    }

    /// Restores a history row: the expression it labels and the undo
    /// stack that goes with it.
    pub fn select_history(&mut self, label: &str) -> Result<(), HistoryError> {
        let row = self.history.find_row(label)?;
        self.undo.restore(row.undo_states);
        self.equation = row.expression;
        self.set_validity(Validity::Valid);
        self.emit_queued();
        Ok(())
    }

    fn clear(&mut self) {
        self.equation.clear();
        self.undo.clear();
    }

    fn delete_last_entry(&mut self) {
        if self.equation.is_empty() || self.undo.is_empty() {
            return;
        }
        if let Ok(previous) = self.undo.pop() {
            self.equation = previous;
        }
    }

    fn handle_operator_key(&mut self, key: &str) {
        self.undo.push(self.equation.clone());

        let last = self.equation.chars().last();
        let last_is_digit = last.map_or(false, |ch| ch.is_ascii_digit());
        let chains = matches!(key, "+" | "-" | "*" | "/" | "^" | ".");

        if matches!(key, "(" | ")") || (chains && (last_is_digit || self.equation.is_empty())) {
            self.equation.push_str(key);
        } else if key == "x!"
            && !self.equation.is_empty()
            && !matches!(last, Some('+' | '-' | '*' | '/' | '^' | '(' | ')'))
        {
            self.equation = format!("({})!", self.equation);
        } else if key == "x!" {
            self.equation.push('!');
        } else if matches!(
            last,
            Some('+' | '-' | '*' | '/' | '^' | '(' | ')' | '!' | '%')
        ) {
            if chains {
                self.equation.push_str(key);
            } else {
                self.equation.push_str(&function_name(key));
                self.equation.push('(');
            }
        } else {
            self.equation = format!("{}({})", function_name(key), self.equation);
        }
    }

    fn evaluate_current(&mut self) {
        let normalized = self.normalizer.normalize(&self.equation);
        match eval::evaluate(&normalized) {
            Ok(value) => {
                let result = eval::format_result(value);
                self.history.add(Snapshot::new(
                    self.equation.clone(),
                    result.clone(),
                    self.undo.snapshot(),
                ));
                self.equation = result;
            }
            Err(_) => {
                self.enqueue_signal(EVALUATION_FAILED, self.equation.clone());
                self.equation = ERROR_SENTINEL.to_string();
            }
        }
        // Rebuild the stack so DEL peels the new display text back one
        // character at a time.
        self.undo = UndoStack::retyped(&self.equation);
    }

    fn refresh_validity(&mut self) {
        // An empty display keeps its previous validity.
        if self.equation.is_empty() {
            return;
        }
        let normalized = self.normalizer.normalize(&self.equation);
        let validity = if eval::evaluate(&normalized).is_ok() {
            Validity::Valid
        } else {
            Validity::Invalid
        };
        self.set_validity(validity);
    }

    fn set_validity(&mut self, validity: Validity) {
        if self.validity != validity {
            self.validity = validity;
            self.enqueue_signal(VALIDITY_CHANGED, validity.as_str());
        }
    }

    #[cfg(feature = "emitter")]
    fn enqueue_signal(&mut self, signal_type: &str, data: impl Into<String>) {
        self.signals.enqueue(signal_type, data);
    }

    #[cfg(not(feature = "emitter"))]
    fn enqueue_signal(&mut self, _signal_type: &str, _data: impl Into<String>) {}

    fn emit_queued(&mut self) {
        #[cfg(feature = "emitter")]
        self.signals.emit_queued();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("equation", &self.equation)
            .field("undo", &self.undo)
            .field("history", &self.history)
            .field("validity", &self.validity)
            .finish()
    }
}

fn is_digit_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|ch| ch.is_ascii_digit())
}

fn function_name(key: &str) -> String {
    key.replace("ln", "log")
}
