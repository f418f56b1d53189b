use actix_web::{web, HttpResponse};

use crate::AppError;

async fn index() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body("OK"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
