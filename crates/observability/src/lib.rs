//! Tracing, logging and the console recorders (shared setup).

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Recorder strategies that write somewhere outside the process.
pub mod recorder;

pub use recorder::{ConsoleRecorder, DEFAULT_PREFIX, PrefixedRecorder, TracingRecorder};
pub use self::tracing::try_init;
