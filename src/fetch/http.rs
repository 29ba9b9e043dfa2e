use std::time::Duration;

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::PlaygroundConfig;
use crate::error::{PlaygroundResult, TransportError};

use super::{Transport, TransportResponse};

/// [`Transport`] backed by a shared `reqwest` client.
///
/// Non-success statuses are reported as [`TransportError::Status`]; the body of
/// a successful response is parsed as JSON into [`TransportResponse::data`],
/// and a body that is not JSON is [`TransportError::Body`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> PlaygroundResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Http)?;
        Ok(Self { client, timeout })
    }

    /// Wraps an already configured client; `timeout` should match the one it was built with.
    #[must_use]
    pub fn from_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn from_config(config: &PlaygroundConfig) -> PlaygroundResult<Self> {
        config.validate()?;
        Self::new(config.request_timeout())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            return TransportError::Timeout {
                url: url.to_owned(),
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            };
        }
        if let Some(status) = err.status() {
            return TransportError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            };
        }
        TransportError::Http(err)
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        trace!(url, "http get");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| self.classify(url, err))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| self.classify(url, err))?;
        let data: Value = serde_json::from_slice(&body).map_err(|err| TransportError::Body {
            url: url.to_owned(),
            message: err.to_string(),
        })?;
        debug!(url, status, "http get completed");
        Ok(TransportResponse::with_status(status, data))
    }
}
