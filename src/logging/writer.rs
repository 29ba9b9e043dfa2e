use std::io::{self, Write};

use parking_lot::Mutex;
use tracing::trace;

use super::Logger;

/// Writes each message followed by a newline to standard output.
///
/// No timestamp, level or other decoration is added.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StdoutLogger;

impl Logger for StdoutLogger {
    fn log(&self, message: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{message}") {
            trace!(error = %err, "dropping log message, stdout unavailable");
        }
    }
}

/// [`Logger`] over an arbitrary writer, flushed after every message.
///
/// Write and flush failures are swallowed.
#[derive(Debug)]
pub struct WriterLogger<W> {
    writer: Mutex<W>,
}

impl<W: Write> WriterLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write> Logger for WriterLogger<W> {
    fn log(&self, message: &str) {
        let mut writer = self.writer.lock();
        let written = writeln!(writer, "{message}").and_then(|()| writer.flush());
        if let Err(err) = written {
            trace!(error = %err, "dropping log message, writer failed");
        }
    }
}
