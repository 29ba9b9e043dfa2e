use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Render, RenderedPoint};
use crate::error::{PlaygroundError, PlaygroundResult};
use crate::fetch::{Transport, UserRecord, UserService};
use crate::logging::Logger;

/// Result of one [`Playground::run`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub users: Vec<UserRecord>,
    pub points: Vec<RenderedPoint>,
}

impl Report {
    /// Serializes the report to pretty JSON for snapshots.
    pub fn to_json_pretty(&self) -> PlaygroundResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PlaygroundError::Serialize {
            what: "report",
            message: e.to_string(),
        })
    }
}

/// Fetch + render + report, with every collaborator injected.
#[derive(Debug)]
pub struct Playground<T, L> {
    users: UserService<T>,
    logger: L,
}

impl<T: Transport, L: Logger> Playground<T, L> {
    pub fn new(users: UserService<T>, logger: L) -> Self {
        Self { users, logger }
    }

    #[must_use]
    pub fn user_service(&self) -> &UserService<T> {
        &self.users
    }

    #[must_use]
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Fetches users, renders `series` once and logs one line per user plus a summary.
    ///
    /// A failed fetch is returned before `series` is rendered or anything
    /// reaches the logger.
    pub async fn run<R: Render + ?Sized>(&self, series: &R) -> PlaygroundResult<Report> {
        let users = self.users.fetch_users().await?;
        let points = series.render();
        debug!(users = users.len(), points = points.len(), "playground run");

        for user in &users {
            self.logger.log(user.name().unwrap_or("<unnamed>"));
        }
        self.logger.log(&format!(
            "fetched {} users, rendered {} points",
            users.len(),
            points.len()
        ));

        Ok(Report { users, points })
    }
}
