use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// JSON envelope for every error response.
///
/// `error_code` is the application-level code carried in the body; it is
/// not always equal to the HTTP status (ranking failures keep the legacy
/// `1001` code on a 502 response).
#[derive(Serialize)]
pub struct ErrorBody {
    pub error_code: u16,
    pub msg: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid JSON: {detail}")]
    InvalidJson { detail: String },
    #[error("Missing required field(s)")]
    MissingFields,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Token required")]
    TokenRequired,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Matchmaking upstream failure: {detail}")]
    MatchmakingUnavailable { detail: String },
    #[error("Ranking upstream failure: {detail}")]
    RankingUnavailable { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Application error code carried in the response body.
    pub fn error_code(&self) -> u16 {
        match self {
            AppError::InvalidJson { .. } => 400,
            AppError::MissingFields => 400,
            AppError::InvalidCredentials => 401,
            AppError::TokenRequired => 400,
            AppError::InvalidToken => 401,
            AppError::MatchmakingUnavailable { .. } => 502,
            AppError::RankingUnavailable { .. } => 1001,
            AppError::Internal { .. } | AppError::Config { .. } => 500,
        }
    }

    /// Client-facing message. Upstream and internal details stay in the
    /// logs; the body gets a fixed phrase.
    fn msg(&self) -> String {
        match self {
            AppError::InvalidJson { detail } => detail.clone(),
            AppError::MissingFields => "Missing required field(s)".to_string(),
            AppError::InvalidCredentials => "Invalid username or password".to_string(),
            AppError::TokenRequired => "Token required".to_string(),
            AppError::InvalidToken => "Invalid token".to_string(),
            AppError::MatchmakingUnavailable { .. } => {
                "Matchmaking service unavailable".to_string()
            }
            AppError::RankingUnavailable { .. } => "Ranking service unavailable".to_string(),
            AppError::Internal { .. } | AppError::Config { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::TokenRequired => StatusCode::BAD_REQUEST,
            AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::MatchmakingUnavailable { .. } => StatusCode::BAD_GATEWAY,
            AppError::RankingUnavailable { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn invalid_json(detail: String) -> Self {
        Self::InvalidJson { detail }
    }

    pub fn missing_fields() -> Self {
        Self::MissingFields
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn token_required() -> Self {
        Self::TokenRequired
    }

    pub fn invalid_token() -> Self {
        Self::InvalidToken
    }

    pub fn matchmaking_unavailable(detail: String) -> Self {
        Self::MatchmakingUnavailable { detail }
    }

    pub fn ranking_unavailable(detail: String) -> Self {
        Self::RankingUnavailable { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let body = ErrorBody {
            error_code: self.error_code(),
            msg: self.msg(),
        };

        HttpResponse::build(self.status()).json(body)
    }
}
