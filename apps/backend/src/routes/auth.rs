use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::token::mint_token;
use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::state::app_state::AppState;

/// Fields are optional so that a syntactically valid body with fields
/// missing yields "Missing required field(s)" rather than a parse error.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub error_code: u16,
    pub token: String,
}

/// Validate credentials and issue a signed identity token.
///
/// Validation order: JSON parse (extractor), required fields, then the
/// configured credential verifier, which extracts the uid.
async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();

    let (name, password) = match (req.name, req.password) {
        (Some(name), Some(password)) => (name, password),
        _ => return Err(AppError::missing_fields()),
    };

    let uid = app_state.credentials.verify(&name, &password).await?;

    let token = mint_token(&uid, &app_state.security)?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        error_code: 0,
        token,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/v1/login").route(web::post().to(login)));
}
