use base64::prelude::*;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use std::fmt;

/// The authenticated identity carried in the access token's claims
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub admin: bool,
}

/// Session lifecycle. `Uninitialized` is entered once at process start and
/// left only by the first `Refresh`; protected content must not render
/// before that.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", content = "principal")]
pub enum SessionState {
    #[default]
    Uninitialized,
    Unauthenticated,
    Authenticated(Principal),
}

impl SessionState {
    pub fn is_initialized(&self) -> bool {
        !matches!(self, SessionState::Uninitialized)
    }

    pub fn principal(&self) -> Option<&Principal> {
        match self {
            SessionState::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }
}

/// Sign-in request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct SignInRequest {
    #[validate(min_length = 1)]
    pub username: String,
    #[validate(min_length = 1)]
    pub password: String,
}

/// Sign-in response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInResponse {
    pub access_token: String,
}

/// Failure to derive a [`Principal`] from an access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Not a three-segment JWT
    MalformedToken,
    /// Claims segment is not valid base64/JSON
    Claims(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::MalformedToken => write!(f, "malformed token"),
            SessionError::Claims(message) => write!(f, "{message}"),
        }
    }
}

/// Decode the claims segment of the access token.
///
/// The signature is not checked here - only the device can verify it, which
/// is what the verification endpoint is for. Unknown claims (expiry etc.)
/// are ignored.
pub fn decode_principal(access_token: &str) -> Result<Principal, SessionError> {
    let claims = access_token
        .split('.')
        .nth(1)
        .ok_or(SessionError::MalformedToken)?;
    let bytes = BASE64_URL_SAFE_NO_PAD
        .decode(claims)
        .map_err(|e| SessionError::Claims(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| SessionError::Claims(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_claims(claims: &str) -> String {
        let header = BASE64_URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = BASE64_URL_SAFE_NO_PAD.encode(claims);
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn decodes_username_and_admin_flag() {
        let token = token_with_claims(r#"{"username":"admin","admin":true}"#);

        let principal = decode_principal(&token).unwrap();

        assert_eq!(principal.username, "admin");
        assert!(principal.admin);
    }

    #[test]
    fn ignores_unknown_claims() {
        let token = token_with_claims(r#"{"username":"guest","admin":false,"exp":1700000000}"#);

        let principal = decode_principal(&token).unwrap();

        assert_eq!(principal.username, "guest");
        assert!(!principal.admin);
    }

    #[test]
    fn rejects_token_without_claims_segment() {
        assert_eq!(
            decode_principal("not-a-jwt"),
            Err(SessionError::MalformedToken)
        );
    }

    #[test]
    fn rejects_garbage_claims() {
        let header = BASE64_URL_SAFE_NO_PAD.encode("{}");
        let token = format!("{header}.!!!.signature");

        assert!(matches!(
            decode_principal(&token),
            Err(SessionError::Claims(_))
        ));
    }
}
