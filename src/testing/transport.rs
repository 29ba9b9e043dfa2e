use std::collections::VecDeque;

use parking_lot::Mutex;
use serde_json::Value;

use crate::error::TransportError;
use crate::fetch::{Transport, TransportResponse};

#[derive(Debug, Clone)]
enum Fallback {
    Respond(TransportResponse),
    Reject(String),
    Unconfigured,
}

/// [`Transport`] that replays canned outcomes and records requested URLs.
///
/// Outcomes queued with `*_once` are consumed first, in order. Once the queue
/// is empty every call gets the fallback set by [`StaticTransport::resolving`]
/// or [`StaticTransport::rejecting`]; without one the call fails with
/// [`TransportError::Unavailable`].
#[derive(Debug)]
pub struct StaticTransport {
    queued: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    fallback: Mutex<Fallback>,
    requests: Mutex<Vec<String>>,
}

impl Default for StaticTransport {
    fn default() -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback: Mutex::new(Fallback::Unconfigured),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl StaticTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every unqueued call with `response`.
    #[must_use]
    pub fn resolving(self, response: TransportResponse) -> Self {
        *self.fallback.lock() = Fallback::Respond(response);
        self
    }

    /// Answers every unqueued call with a `200` response carrying `data`.
    #[must_use]
    pub fn resolving_data(self, data: Value) -> Self {
        self.resolving(TransportResponse::ok(data))
    }

    /// Fails every unqueued call with [`TransportError::Unavailable`].
    #[must_use]
    pub fn rejecting(self, message: impl Into<String>) -> Self {
        *self.fallback.lock() = Fallback::Reject(message.into());
        self
    }

    #[must_use]
    pub fn resolving_once(self, response: TransportResponse) -> Self {
        self.queued.lock().push_back(Ok(response));
        self
    }

    #[must_use]
    pub fn rejecting_once(self, error: TransportError) -> Self {
        self.queued.lock().push_back(Err(error));
        self
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    fn next_outcome(&self, url: &str) -> Result<TransportResponse, TransportError> {
        self.requests.lock().push(url.to_owned());
        if let Some(outcome) = self.queued.lock().pop_front() {
            return outcome;
        }
        match &*self.fallback.lock() {
            Fallback::Respond(response) => Ok(response.clone()),
            Fallback::Reject(message) => Err(TransportError::Unavailable(message.clone())),
            Fallback::Unconfigured => Err(TransportError::Unavailable(format!(
                "no response configured for {url}"
            ))),
        }
    }
}

impl Transport for StaticTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        self.next_outcome(url)
    }
}
