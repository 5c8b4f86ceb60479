//! Authentication types and local signup validation.
//!
//! The session token is held by an explicitly injected [`TokenStore`] rather
//! than ambient global state, so ownership and teardown are visible at the
//! call site.

use crate::error::{Result, SomaleoError};
use crate::password;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Credentials submitted to the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Credentials submitted by the signup form.
///
/// The confirmation field never leaves the client; it is stripped before the
/// request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupCredentials {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// The authenticated user record returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
}

/// Response shape of the login/signup endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

/// An abstract store for the session token.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Persists the token, replacing any previous one.
    async fn save(&self, token: &str) -> Result<()>;

    /// Loads the stored token, if any.
    async fn load(&self) -> Result<Option<String>>;

    /// Removes the stored token.
    async fn delete(&self) -> Result<()>;
}

/// Validates signup credentials locally before any request is made.
///
/// The password must satisfy every policy rule and match its confirmation.
pub fn validate_signup(credentials: &SignupCredentials) -> Result<()> {
    let validation = password::evaluate(&credentials.password);
    if !validation.is_valid() {
        return Err(SomaleoError::auth(format!(
            "Password does not meet requirements: {}",
            validation.unmet_requirements().join("; ")
        )));
    }

    if credentials.password != credentials.confirm_password {
        return Err(SomaleoError::auth("Passwords do not match"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(password: &str, confirm: &str) -> SignupCredentials {
        SignupCredentials {
            username: "student".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn valid_signup_passes() {
        assert!(validate_signup(&signup("Abcdef1!", "Abcdef1!")).is_ok());
    }

    #[test]
    fn weak_password_is_rejected_with_guidance() {
        let err = validate_signup(&signup("abcdefg1", "abcdefg1")).unwrap_err();
        assert!(err.is_auth());
        assert!(err.to_string().contains("capital letter"));
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let err = validate_signup(&signup("Abcdef1!", "Abcdef1?")).unwrap_err();
        assert!(err.is_auth());
        assert!(err.to_string().contains("do not match"));
    }
}
