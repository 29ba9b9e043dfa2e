use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PlaygroundError, PlaygroundResult};

/// Endpoint queried by [`UserService`](crate::fetch::UserService) unless configured otherwise.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 12_000;

/// Runtime configuration for the fetch side of the playground.
///
/// Serializable so host applications can keep it next to their own settings;
/// every field has a default so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    #[serde(default = "default_users_endpoint")]
    pub users_endpoint: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            users_endpoint: default_users_endpoint(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl PlaygroundConfig {
    #[must_use]
    pub fn with_users_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.users_endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Checks that the endpoint is an absolute http(s) URL and the timeout is non-zero.
    pub fn validate(&self) -> PlaygroundResult<()> {
        let url = reqwest::Url::parse(&self.users_endpoint).map_err(|e| {
            PlaygroundError::Config(format!(
                "users_endpoint `{}` is not a valid url: {e}",
                self.users_endpoint
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PlaygroundError::Config(format!(
                "users_endpoint scheme must be http or https, got `{}`",
                url.scheme()
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(PlaygroundError::Config(
                "request_timeout_ms must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> PlaygroundResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlaygroundError::Config(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> PlaygroundResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| PlaygroundError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_users_endpoint() -> String {
    DEFAULT_USERS_ENDPOINT.to_owned()
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}
