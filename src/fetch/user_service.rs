use tracing::debug;

use crate::config::{DEFAULT_USERS_ENDPOINT, PlaygroundConfig};
use crate::error::{PlaygroundError, PlaygroundResult, TransportError};

use super::{Transport, UserRecord};

/// Fetches the user list from a fixed endpoint through an injected [`Transport`].
///
/// One request per call. The payload is returned unchanged: no field mapping,
/// no pagination and no retry. Transport failures reach the caller as
/// [`PlaygroundError::Transport`] without being logged here; a completed
/// exchange with an unreadable body is [`PlaygroundError::Decode`].
#[derive(Debug, Clone)]
pub struct UserService<T> {
    transport: T,
    endpoint: String,
}

impl<T: Transport> UserService<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn with_default_endpoint(transport: T) -> Self {
        Self::new(transport, DEFAULT_USERS_ENDPOINT)
    }

    pub fn from_config(transport: T, config: &PlaygroundConfig) -> PlaygroundResult<Self> {
        config.validate()?;
        Ok(Self::new(transport, config.users_endpoint.clone()))
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn fetch_users(&self) -> PlaygroundResult<Vec<UserRecord>> {
        debug!(endpoint = %self.endpoint, "fetching users");
        let response = match self.transport.get(&self.endpoint).await {
            Ok(response) => response,
            Err(TransportError::Body { url, message }) => {
                return Err(PlaygroundError::Decode(format!(
                    "response body from {url} is not json: {message}"
                )));
            }
            Err(err) => return Err(err.into()),
        };
        if !response.is_success() {
            return Err(TransportError::Status {
                url: self.endpoint.clone(),
                status: response.status,
            }
            .into());
        }

        let users: Vec<UserRecord> = serde_json::from_value(response.data).map_err(|e| {
            PlaygroundError::Decode(format!(
                "expected a sequence of user objects from {}: {e}",
                self.endpoint
            ))
        })?;
        debug!(count = users.len(), "fetched users");
        Ok(users)
    }
}
