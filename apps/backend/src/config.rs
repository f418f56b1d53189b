use std::time::Duration;

use crate::error::AppError;

/// Default port for the internal matchmaking/ranking service.
const DEFAULT_UPSTREAM_URL: &str = "http://localhost:6014";

/// Startup configuration, read once from the environment and passed by
/// reference afterwards. Handlers never read env vars directly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Shared secret for signing and verifying identity tokens.
    pub token_secret: String,
    /// Base URL of the internal game service, without a trailing slash.
    pub upstream_url: String,
    /// Per-request timeout for upstream calls.
    pub upstream_timeout: Duration,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// Environment variables must be set by the runtime environment:
    /// - Docker: via compose env_file or docker run --env-file
    /// - Local dev: source env files manually (e.g., set -a; . ./.env; set +a)
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("PONG_WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PONG_WEB_PORT").unwrap_or_else(|_| "8080".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|_| AppError::config(format!("PONG_WEB_PORT is not a valid port: {port}")))?;

        let token_secret = std::env::var("PONG_WEB_TOKEN_SECRET")
            .map_err(|_| AppError::config("PONG_WEB_TOKEN_SECRET must be set".to_string()))?;

        let upstream_url = std::env::var("PONG_WEB_UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        let upstream_url = normalize_base_url(&upstream_url);

        let timeout_ms = std::env::var("PONG_WEB_UPSTREAM_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".to_string());
        let timeout_ms = timeout_ms.parse::<u64>().map_err(|_| {
            AppError::config(format!(
                "PONG_WEB_UPSTREAM_TIMEOUT_MS is not a valid duration: {timeout_ms}"
            ))
        })?;

        Ok(Self {
            host,
            port,
            token_secret,
            upstream_url,
            upstream_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// Upstream paths are joined with a leading slash, so the base must not
/// carry a trailing one.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_base_url;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("http://localhost:6014/"),
            "http://localhost:6014"
        );
        assert_eq!(
            normalize_base_url("http://localhost:6014//"),
            "http://localhost:6014"
        );
    }

    #[test]
    fn test_normalize_keeps_clean_url() {
        assert_eq!(
            normalize_base_url("http://matchmaking.internal:6014"),
            "http://matchmaking.internal:6014"
        );
    }
}
