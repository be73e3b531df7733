//! Recorder capability: the single-method sink the ledger reports notifications to.
//!
//! The ledger only ever sees `dyn Recorder`; concrete strategies (console,
//! prefixed, tracing) live in `warehouse-observability`. The two recorders here
//! are in-process only and have no output of their own.

use std::sync::Mutex;

/// Accepts a text message and records it somewhere.
///
/// Implementations are shared behind `Arc`, hence `Send + Sync`.
pub trait Recorder: Send + Sync {
    /// Record a single message.
    fn record(&self, message: &str);

    /// Short strategy name, used when a ledger snapshot is encoded.
    fn name(&self) -> &'static str {
        "recorder"
    }
}

impl<R> Recorder for std::sync::Arc<R>
where
    R: Recorder + ?Sized,
{
    fn record(&self, message: &str) {
        (**self).record(message)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRecorder;

impl Recorder for NullRecorder {
    fn record(&self, _message: &str) {}

    fn name(&self) -> &'static str {
        "null"
    }
}

/// Buffers messages in arrival order (tests, embedding).
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    messages: Mutex<Vec<String>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every message recorded so far.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.messages.lock() {
            Ok(messages) => messages.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        match self.messages.lock() {
            Ok(mut messages) => messages.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl Recorder for MemoryRecorder {
    fn record(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
