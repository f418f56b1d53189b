use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Identity payload carried opaquely by the client and decoded on every
/// authenticated request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User identifier extracted at login
    pub uid: String,
}

/// Mint a signed identity token for the given uid.
///
/// Tokens carry no issued-at and no expiry; validity is signature-only.
pub fn mint_token(uid: &str, security: &SecurityConfig) -> Result<String, AppError> {
    let claims = Claims {
        uid: uid.to_string(),
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.token_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
}

/// Verify a token and return its claims.
///
/// Any decode failure collapses to `AppError::InvalidToken`; the concrete
/// reason (bad signature, malformed payload) only goes to the debug log.
pub fn verify_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // No expiry claim exists, so expiry checks must be off and `exp` must
    // not be a required claim. Algorithm is pinned to the configured one.
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.token_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "token rejected");
        AppError::invalid_token()
    })
}

#[cfg(test)]
mod tests {
    use super::{mint_token, verify_token};
    use crate::state::security_config::SecurityConfig;
    use crate::AppError;

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        let token = mint_token("42", &security).unwrap();
        let claims = verify_token(&token, &security).unwrap();

        assert_eq!(claims.uid, "42");
    }

    #[test]
    fn test_bad_signature() {
        // Mint with secret A, verify with secret B
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let security_b = SecurityConfig::new("secret-B".as_bytes());

        let token = mint_token("42", &security_a).unwrap();
        let result = verify_token(&token, &security_b);

        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_malformed_token() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        for garbage in ["", "not-a-token", "a.b.c", "e30.e30."] {
            let result = verify_token(garbage, &security);
            assert!(
                matches!(result, Err(AppError::InvalidToken)),
                "expected rejection for {garbage:?}"
            );
        }
    }

    #[test]
    fn test_token_is_opaque_but_stable() {
        let security = SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes());

        // No timestamps in the payload, so minting is deterministic.
        let a = mint_token("7", &security).unwrap();
        let b = mint_token("7", &security).unwrap();
        assert_eq!(a, b);
    }
}
