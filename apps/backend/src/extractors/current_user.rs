use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::auth::token::verify_token;
use crate::error::AppError;
use crate::extractors::auth_token::token_from_request;
use crate::state::app_state::AppState;

/// Identity decoded from the request's auth token.
///
/// Handlers that take this as an argument are authenticated routes: the
/// extractor rejects the request before the handler body runs when the
/// token header is missing (400) or the token does not decode under the
/// process secret (401).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub uid: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = token_from_request(&req)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available".to_string()))?;

            let claims = verify_token(&token, &app_state.security)?;

            Ok(CurrentUser { uid: claims.uid })
        })
    }
}
