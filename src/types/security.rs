use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct User {
    #[validate(min_length = 1)]
    pub username: String,
    #[validate(min_length = 1)]
    pub password: String,
    pub admin: bool,
}

/// The device's complete user database plus the secret its tokens are
/// signed with. Saving a changed secret invalidates every issued token,
/// including the caller's own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecuritySettings {
    pub jwt_secret: String,
    pub users: Vec<User>,
}
