use async_trait::async_trait;

use crate::error::AppError;

/// Strategy for verifying login credentials.
///
/// Implementations return the user id on success. The login handler never
/// sees how verification happens, so a password store or an external IdP
/// can replace the demo rule without touching the route.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, name: &str, password: &str) -> Result<String, AppError>;
}

/// Demo verifier: usernames are `<prefix><uid>` and every account shares
/// one fixed password. Placeholder authentication, not a security design.
#[derive(Debug, Clone)]
pub struct FixedPasswordVerifier {
    prefix: String,
    password: String,
}

impl FixedPasswordVerifier {
    pub fn new(prefix: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            password: password.into(),
        }
    }
}

impl Default for FixedPasswordVerifier {
    fn default() -> Self {
        Self::new("user", "blah")
    }
}

#[async_trait]
impl CredentialVerifier for FixedPasswordVerifier {
    async fn verify(&self, name: &str, password: &str) -> Result<String, AppError> {
        let uid = name
            .strip_prefix(&self.prefix)
            .ok_or_else(AppError::invalid_credentials)?;

        // A bare prefix has no uid to extract.
        if uid.is_empty() {
            return Err(AppError::invalid_credentials());
        }

        if password != self.password {
            return Err(AppError::invalid_credentials());
        }

        Ok(uid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{CredentialVerifier, FixedPasswordVerifier};
    use crate::AppError;

    #[tokio::test]
    async fn test_valid_credentials_extract_uid() {
        let verifier = FixedPasswordVerifier::default();

        let uid = verifier.verify("user42", "blah").await.unwrap();
        assert_eq!(uid, "42");
    }

    #[tokio::test]
    async fn test_wrong_prefix_rejected() {
        let verifier = FixedPasswordVerifier::default();

        let result = verifier.verify("admin42", "blah").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let verifier = FixedPasswordVerifier::default();

        let result = verifier.verify("user42", "wrong").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_bare_prefix_rejected() {
        let verifier = FixedPasswordVerifier::default();

        let result = verifier.verify("user", "blah").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_password_checked_after_uid_extraction() {
        let verifier = FixedPasswordVerifier::default();

        // Bad name and bad password still reads as a credential failure.
        let result = verifier.verify("nobody", "wrong").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }
}
