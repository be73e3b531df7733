//! Console-facing `Recorder` strategies.
//!
//! - `ConsoleRecorder`: plain pass-through, one line per message (stdout by
//!   default, any `io::Write` via `with_writer`).
//! - `PrefixedRecorder`: decorates every message with a fixed tag before
//!   handing it to an inner recorder.
//! - `TracingRecorder`: forwards messages as `tracing` info events.

use std::io::{Stdout, Write};
use std::sync::Mutex;

use warehouse_core::Recorder;

/// Tag used by `PrefixedRecorder::console`.
pub const DEFAULT_PREFIX: &str = "[LOG]: ";

/// Writes each message verbatim as one line.
#[derive(Debug)]
pub struct ConsoleRecorder<W = Stdout> {
    writer: Mutex<W>,
}

impl ConsoleRecorder<Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for ConsoleRecorder<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> ConsoleRecorder<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the recorder, returning its writer.
    pub fn into_writer(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Recorder for ConsoleRecorder<W> {
    fn record(&self, message: &str) {
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Write failures are dropped; `record` has no error channel.
        let _ = writeln!(writer, "{message}");
        let _ = writer.flush();
    }

    fn name(&self) -> &'static str {
        "console"
    }
}

/// Prepends a fixed tag to every message, then forwards it.
#[derive(Debug, Clone)]
pub struct PrefixedRecorder<R> {
    prefix: String,
    inner: R,
}

impl<R: Recorder> PrefixedRecorder<R> {
    pub fn new(prefix: impl Into<String>, inner: R) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn decorate(&self, message: &str) -> String {
        format!("{}{}", self.prefix, message)
    }
}

impl PrefixedRecorder<ConsoleRecorder<Stdout>> {
    /// `[LOG]: `-tagged stdout output.
    pub fn console() -> Self {
        Self::console_to(std::io::stdout())
    }
}

impl<W: Write + Send> PrefixedRecorder<ConsoleRecorder<W>> {
    /// `[LOG]: `-tagged line output to `writer`.
    pub fn console_to(writer: W) -> Self {
        Self::new(DEFAULT_PREFIX, ConsoleRecorder::with_writer(writer))
    }
}

impl<R: Recorder> Recorder for PrefixedRecorder<R> {
    fn record(&self, message: &str) {
        self.inner.record(&self.decorate(message));
    }

    fn name(&self) -> &'static str {
        "prefixed"
    }
}

/// Emits each message as a `tracing::info!` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRecorder;

impl Recorder for TracingRecorder {
    fn record(&self, message: &str) {
        tracing::info!(target: "warehouse::recorder", "{message}");
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use warehouse_core::MemoryRecorder;

    /// Cloneable in-memory sink, usable as a `MakeWriter` for fmt subscribers.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn console_recorder_writes_one_line_per_message() {
        let recorder = ConsoleRecorder::with_writer(Vec::new());

        recorder.record("Added item: Lays");

        assert_eq!(recorder.into_writer(), b"Added item: Lays\n");
    }

    #[test]
    fn console_recorder_keeps_message_order() {
        let recorder = ConsoleRecorder::with_writer(Vec::new());

        recorder.record("Added item: Lays");
        recorder.record("Updated quantity for item 3: 24");

        let out = String::from_utf8(recorder.into_writer()).unwrap();
        assert_eq!(out, "Added item: Lays\nUpdated quantity for item 3: 24\n");
    }

    #[test]
    fn tagged_console_writes_prefixed_lines() {
        let recorder = PrefixedRecorder::console_to(Vec::new());
        assert_eq!(recorder.prefix(), DEFAULT_PREFIX);
        assert_eq!(recorder.name(), "prefixed");

        recorder.record("Added item: Lays");

        assert_eq!(recorder.into_inner().into_writer(), b"[LOG]: Added item: Lays\n");
    }

    #[test]
    fn prefixed_recorder_tags_every_message() {
        let sink = Arc::new(MemoryRecorder::new());
        let recorder = PrefixedRecorder::new(DEFAULT_PREFIX, sink.clone());

        recorder.record("Added item: Lays");
        recorder.record("Added item: Milka");

        assert_eq!(
            sink.messages(),
            vec!["[LOG]: Added item: Lays", "[LOG]: Added item: Milka"]
        );
    }

    #[test]
    fn prefixed_recorders_nest() {
        let sink = Arc::new(MemoryRecorder::new());
        let recorder = PrefixedRecorder::new("outer ", PrefixedRecorder::new("inner ", sink.clone()));

        recorder.record("msg");

        assert_eq!(sink.messages(), vec!["inner outer msg"]);
    }

    #[test]
    fn tracing_recorder_emits_info_event() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingRecorder.record("Added item: Lays");
        });

        let out = buf.contents();
        assert!(out.contains("INFO"));
        assert!(out.contains("warehouse::recorder"));
        assert!(out.contains("Added item: Lays"));
    }

    #[test]
    fn strategy_names_are_distinct() {
        assert_eq!(ConsoleRecorder::with_writer(Vec::new()).name(), "console");
        assert_eq!(TracingRecorder.name(), "tracing");
    }
}
