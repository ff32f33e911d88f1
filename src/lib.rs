mod error;
mod eval;
mod history;
mod keypad;
mod normalize;
mod session;
#[cfg(feature = "emitter")]
mod signal;
mod undo;

pub use error::{EmptyStackError, EvalError, HistoryError};
pub use eval::{evaluate, format_result};
pub use history::{HistoryRow, HistoryStore, Snapshot};
pub use keypad::{all_keys, DIGIT_KEYS, FUNCTION_KEYS, OPERATOR_KEYS};
pub use normalize::Normalizer;
pub use session::{Session, Validity, ERROR_SENTINEL, EVALUATION_FAILED, VALIDITY_CHANGED};
#[cfg(feature = "emitter")]
pub use signal::{SessionSignal, SignalHub};
pub use undo::UndoStack;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
