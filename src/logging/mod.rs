//! Best-effort message sinks.
//!
//! A [`Logger`] is a plain value built once by the application and handed to
//! whatever needs it. There is no global logger lookup. Diagnostics of the
//! crate itself go through `tracing`; these sinks only carry caller messages.

mod writer;

use std::sync::Arc;

pub use writer::{StdoutLogger, WriterLogger};

/// Stateless message output capability.
///
/// Implementations must never panic or report failure: a sink that cannot
/// write drops the message.
pub trait Logger {
    fn log(&self, message: &str);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

/// Returns the default sink, which writes to standard output.
#[must_use]
pub fn get_logger() -> StdoutLogger {
    StdoutLogger
}
