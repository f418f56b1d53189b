use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::state::app_state::AppState;
use crate::upstream::LeaderboardKind;

async fn relay_ranking(
    app_state: &AppState,
    kind: LeaderboardKind,
) -> Result<HttpResponse, AppError> {
    let result = app_state
        .upstream
        .ranking(kind)
        .await
        .map_err(|e| AppError::ranking_unavailable(e.to_string()))?;

    Ok(HttpResponse::Ok().json(result))
}

async fn ranking_single(
    _user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    relay_ranking(&app_state, LeaderboardKind::Single).await
}

async fn ranking_multi(
    _user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    relay_ranking(&app_state, LeaderboardKind::Multi).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/v1/ranking/single/").route(web::get().to(ranking_single)))
        .service(web::resource("/v1/ranking/multi/").route(web::get().to(ranking_multi)));
}
