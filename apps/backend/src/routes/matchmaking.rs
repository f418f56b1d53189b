use actix_web::{web, HttpResponse, Result};
use serde_json::Value;

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::validated_json::ValidatedJson;
use crate::state::app_state::AppState;

/// Forward a matchmaking request for the authenticated user and relay the
/// upstream JSON verbatim. An unreachable or failing upstream is a 502,
/// never an empty body.
async fn multi_play(
    user: CurrentUser,
    _body: ValidatedJson<Value>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let result = app_state
        .upstream
        .request_connection(&user.uid)
        .await
        .map_err(|e| AppError::matchmaking_unavailable(e.to_string()))?;

    Ok(HttpResponse::Ok().json(result))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/v1/multi-play").route(web::post().to(multi_play)));
}
