//! Captures `tracing` output for assertions.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::Level;

/// An in-memory log sink.
///
/// Installs a fmt subscriber for the duration of [`run`](LogCapture::run) on
/// the current thread only, so parallel tests do not see each other's output.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with every event at TRACE and above written to this capture.
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(Level::TRACE)
            .finish();

        tracing::subscriber::with_default(subscriber, f)
    }

    /// Everything captured so far.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Captured lines emitted at exactly `level`.
    pub fn lines_at(&self, level: Level) -> Vec<String> {
        let tag = format!(" {} ", level.as_str());
        self.contents()
            .lines()
            .filter(|line| line.contains(&tag))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_by_level() {
        let capture = LogCapture::new();
        capture.run(|| {
            tracing::warn!(username = "eve", "nothing configured for {}", "eve");
            tracing::debug!("details");
        });

        let warnings = capture.lines_at(Level::WARN);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("eve"));
        assert_eq!(capture.lines_at(Level::DEBUG).len(), 1);
        assert!(capture.lines_at(Level::ERROR).is_empty());
    }

    #[test]
    fn test_nothing_captured_outside_run() {
        let capture = LogCapture::new();
        tracing::warn!("not captured");
        assert!(capture.contents().is_empty());
    }
}
