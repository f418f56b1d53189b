#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer};
use pong_web::{AppState, FixedPasswordVerifier, SecurityConfig, UpstreamClient};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET.as_bytes())
}

/// App state wired to the given upstream base URL, with the demo
/// credential rule and the shared test secret.
pub fn test_state(upstream_url: &str) -> AppState {
    let upstream =
        UpstreamClient::new(upstream_url, Duration::from_secs(2)).expect("build upstream client");

    AppState::new(
        test_security(),
        upstream,
        Arc::new(FixedPasswordVerifier::default()),
    )
}

/// Mint a token the way the login endpoint would.
pub fn auth_token_for(uid: &str) -> String {
    pong_web::mint_token(uid, &test_security()).expect("mint token")
}

/// Base URL of a port nothing is listening on.
pub fn unreachable_upstream_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let port = listener.local_addr().expect("probe addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Canned responses served by the stub upstream.
#[derive(Clone)]
pub struct StubUpstream {
    pub ranking: Value,
}

async fn stub_matchmaking(body: web::Json<Value>) -> HttpResponse {
    // Echo the request back so tests can assert what was forwarded.
    HttpResponse::Ok().json(serde_json::json!({
        "error_code": 0,
        "request": body.into_inner(),
    }))
}

async fn stub_ranking(stub: web::Data<StubUpstream>) -> HttpResponse {
    HttpResponse::Ok().json(&stub.ranking)
}

/// Run a stub game service on an ephemeral port inside the test runtime
/// and return its base URL.
pub fn spawn_upstream(stub: StubUpstream) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let base_url = format!(
        "http://127.0.0.1:{}",
        listener.local_addr().expect("stub addr").port()
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(stub.clone()))
            .route(
                "/v1/user-connection-request/",
                web::post().to(stub_matchmaking),
            )
            .route("/v1/ranking/single/", web::get().to(stub_ranking))
            .route("/v1/ranking/multi/", web::get().to(stub_ranking))
    })
    .listen(listener)
    .expect("listen on stub port")
    .workers(1)
    .disable_signals()
    .run();

    actix_web::rt::spawn(server);
    base_url
}
