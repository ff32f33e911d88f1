use std::fmt;

use event_emitter_rs::EventEmitter;

/// A signal queued for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSignal {
    pub signal_type: String,
    pub data: String,
}

/// Queue-then-emit hub for outbound session signals.
///
/// Signals are enqueued while a state transition runs and emitted
/// once it has completed, so listeners never observe a session in the
/// middle of a transition.
pub struct SignalHub {
    emitter: EventEmitter,
    queued: Vec<SessionSignal>,
}

impl SignalHub {
    pub fn new() -> Self {
        SignalHub {
            emitter: EventEmitter::new(),
            queued: Vec::new(),
        }
    }

    /// Registers a listener for a signal type.
    pub fn on<F>(&mut self, signal: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(signal, listener);
    }

    pub fn enqueue(&mut self, signal_type: impl Into<String>, data: impl Into<String>) {
        self.queued.push(SessionSignal {
            signal_type: signal_type.into(),
            data: data.into(),
        });
    }

    /// Emits all queued signals in order.
    pub fn emit_queued(&mut self) {
        let signals: Vec<_> = self.queued.drain(..).collect();
        for signal in signals {
            self.emitter.emit(&signal.signal_type, signal.data);
        }
    }

    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }
}

impl Default for SignalHub {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SignalHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalHub")
            .field("queued", &self.queued)
            .finish()
    }
}
