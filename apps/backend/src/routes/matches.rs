use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;

#[derive(Debug, Serialize)]
struct Ack {
    error_code: u16,
}

/// Acknowledgement stubs for match results. Both endpoints ignore the
/// request body entirely and always answer `{error_code: 0}`; they are the
/// integration points for a result-processing pipeline that does not
/// exist yet.
async fn single_finished(_user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(Ack { error_code: 0 }))
}

async fn result_reported() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(Ack { error_code: 0 }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/v1/match/single").route(web::post().to(single_finished)))
        .service(web::resource("/v1/match/result").route(web::post().to(result_reported)));
}
