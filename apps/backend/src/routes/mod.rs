use actix_web::web;

pub mod auth;
pub mod health;
pub mod matches;
pub mod matchmaking;
pub mod ranking;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(matchmaking::configure_routes)
        .configure(ranking::configure_routes)
        .configure(matches::configure_routes);
}
