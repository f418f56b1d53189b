#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod upstream;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use auth::credentials::{CredentialVerifier, FixedPasswordVerifier};
pub use auth::token::{mint_token, verify_token, Claims};
pub use config::AppConfig;
pub use error::AppError;
pub use extractors::auth_token::{AuthToken, AUTH_HEADER};
pub use extractors::current_user::CurrentUser;
pub use extractors::validated_json::ValidatedJson;
pub use middleware::request_trace::RequestTrace;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
pub use upstream::{LeaderboardKind, UpstreamClient, UpstreamError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
