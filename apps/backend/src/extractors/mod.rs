pub mod auth_token;
pub mod current_user;
pub mod validated_json;

pub use auth_token::{AuthToken, AUTH_HEADER};
pub use current_user::CurrentUser;
pub use validated_json::ValidatedJson;
