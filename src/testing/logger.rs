use parking_lot::Mutex;

use crate::logging::Logger;

/// [`Logger`] that stores messages instead of writing them anywhere.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn last_message(&self) -> Option<String> {
        self.messages.lock().last().cloned()
    }

    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) {
        self.messages.lock().push(message.to_owned());
    }
}
