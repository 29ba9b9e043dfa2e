use std::future::Future;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TransportError;

/// Response envelope handed back by a [`Transport`]: `{ "status": .., "data": .. }`.
///
/// `status` defaults to 200 so a bare `{ "data": [...] }` document is a valid
/// successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportResponse {
    #[serde(default = "default_status")]
    pub status: u16,
    pub data: Value,
}

impl TransportResponse {
    #[must_use]
    pub fn ok(data: Value) -> Self {
        Self {
            status: default_status(),
            data,
        }
    }

    #[must_use]
    pub fn with_status(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn default_status() -> u16 {
    200
}

/// Outbound GET capability used by the fetch service.
///
/// Real HTTP goes through [`HttpTransport`](super::HttpTransport); tests pass
/// any other implementation.
pub trait Transport {
    fn get(&self, url: &str)
    -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

impl<T: Transport + Sync> Transport for &T {
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        (**self).get(url)
    }
}

impl<T: Transport + Send + Sync> Transport for Arc<T> {
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        (**self).get(url)
    }
}
