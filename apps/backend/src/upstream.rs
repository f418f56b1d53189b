use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::warn;

use crate::error::AppError;

/// Leaderboard selector for the ranking endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardKind {
    Single,
    Multi,
}

impl LeaderboardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardKind::Single => "single",
            LeaderboardKind::Multi => "multi",
        }
    }
}

impl fmt::Display for LeaderboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure talking to the internal game service. Callers map this to a
/// route-specific response; it must never be swallowed.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the co-located matchmaking/ranking service.
///
/// Calls are synchronous from the handler's perspective: one request, one
/// awaited response, no retries. The only resilience is the configured
/// request timeout.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build upstream client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the matchmaking service to connect the given user.
    /// Returns the upstream JSON body verbatim.
    pub async fn request_connection(&self, uid: &str) -> Result<Value, UpstreamError> {
        let url = format!("{}/v1/user-connection-request/", self.base_url);
        let body = json!({ "user": { "uid": uid } });

        let response = self.http.post(&url).json(&body).send().await.map_err(|e| {
            warn!(error = %e, uid = %uid, "matchmaking request failed");
            e
        })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), uid = %uid, "matchmaking request rejected");
            return Err(UpstreamError::Status(response.status()));
        }

        Ok(response.json::<Value>().await?)
    }

    /// Fetch a leaderboard from the ranking service.
    /// Returns the upstream JSON body verbatim.
    pub async fn ranking(&self, kind: LeaderboardKind) -> Result<Value, UpstreamError> {
        let url = format!("{}/v1/ranking/{}/", self.base_url, kind);

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(error = %e, leaderboard = %kind, "ranking request failed");
            e
        })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), leaderboard = %kind, "ranking request rejected");
            return Err(UpstreamError::Status(response.status()));
        }

        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{LeaderboardKind, UpstreamClient};

    #[test]
    fn test_leaderboard_kind_paths() {
        assert_eq!(LeaderboardKind::Single.as_str(), "single");
        assert_eq!(LeaderboardKind::Multi.as_str(), "multi");
        assert_eq!(format!("{}", LeaderboardKind::Single), "single");
    }

    #[test]
    fn test_client_keeps_base_url() {
        let client =
            UpstreamClient::new("http://localhost:6014", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:6014");
    }
}
