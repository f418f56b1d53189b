pub mod credentials;
pub mod token;

pub use credentials::{CredentialVerifier, FixedPasswordVerifier};
pub use token::{mint_token, verify_token, Claims};
