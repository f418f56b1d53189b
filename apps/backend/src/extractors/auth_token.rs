use actix_web::{dev::Payload, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Custom header carrying the signed identity token.
pub const AUTH_HEADER: &str = "X-Ife-Auth";

/// Raw authentication token extracted from the `X-Ife-Auth` header.
///
/// A missing header is a 400 ("Token required"); a header whose value is
/// empty or not valid ASCII is a 401, same as any other undecodable token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthToken {
    pub token: String,
}

pub(crate) fn token_from_request(req: &HttpRequest) -> Result<String, AppError> {
    let header = req
        .headers()
        .get(AUTH_HEADER)
        .ok_or_else(AppError::token_required)?;

    let token = header.to_str().map_err(|_| AppError::invalid_token())?;
    if token.is_empty() {
        return Err(AppError::invalid_token());
    }

    Ok(token.to_string())
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = token_from_request(&req)?;
            Ok(AuthToken { token })
        })
    }
}
