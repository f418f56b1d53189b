use std::sync::Arc;

use crate::auth::credentials::{CredentialVerifier, FixedPasswordVerifier};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;
use crate::upstream::UpstreamClient;

/// Application state containing shared resources. Everything in here is
/// read-only after startup; handlers receive it via `web::Data`.
#[derive(Clone)]
pub struct AppState {
    /// Token signing configuration
    pub security: SecurityConfig,
    /// Client for the internal matchmaking/ranking service
    pub upstream: UpstreamClient,
    /// Credential verification strategy used by the login handler
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Create a new AppState from already-built parts.
    pub fn new(
        security: SecurityConfig,
        upstream: UpstreamClient,
        credentials: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            security,
            upstream,
            credentials,
        }
    }

    /// Build the production state from startup configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let security = SecurityConfig::new(config.token_secret.as_bytes());
        let upstream = UpstreamClient::new(&config.upstream_url, config.upstream_timeout)?;

        Ok(Self::new(
            security,
            upstream,
            Arc::new(FixedPasswordVerifier::default()),
        ))
    }
}
