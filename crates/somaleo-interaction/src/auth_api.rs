//! AuthApiClient - REST client for the auth endpoints.
//!
//! Login and signup try the remote service first and fall back to the
//! built-in development account when the service is unreachable, so the
//! client remains usable against a dead backend. The session token is
//! persisted through an injected [`TokenStore`].

use crate::tutor_api::{status_error, transport_error};
use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use somaleo_core::auth::{
    AuthResponse, AuthUser, LoginCredentials, SignupCredentials, TokenStore, validate_signup,
};
use somaleo_core::config::ApiConfig;
use somaleo_core::error::{Result, SomaleoError};
use somaleo_core::fallback::{DEV_PASSWORD, DEV_USERNAME};
use std::sync::Arc;
use std::time::Duration;

/// Payload of the signup request; the confirmation field never leaves the
/// client.
#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// HTTP client for `/auth/*`.
pub struct AuthApiClient {
    client: Client,
    base_url: String,
    token_store: Arc<dyn TokenStore>,
}

impl AuthApiClient {
    /// Creates a client from the API configuration and a token store.
    pub fn new(config: &ApiConfig, token_store: Arc<dyn TokenStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(transport_error)?;
        Ok(Self {
            client,
            base_url: config.resolved_base_url(),
            token_store,
        })
    }

    /// Logs in against the remote service, falling back to the development
    /// account when the service cannot be reached.
    ///
    /// On success the returned token replaces any previously stored one.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        match self.post_auth("/auth/login", credentials).await {
            Ok(response) => {
                self.store_token(&response).await;
                Ok(response)
            }
            Err(err) if err.is_remote() => {
                tracing::warn!(error = %err, "remote login failed, using development account");
                let response = self.dev_login(credentials)?;
                self.store_token(&response).await;
                Ok(response)
            }
            Err(err) => Err(err),
        }
    }

    /// Creates an account.
    ///
    /// Credentials are validated locally (password policy, confirmation
    /// match) before any request is made; validation failures never reach
    /// the wire. Remote failures fall back like [`login`](Self::login).
    pub async fn signup(&self, credentials: &SignupCredentials) -> Result<AuthResponse> {
        validate_signup(credentials)?;

        let payload = SignupRequest {
            username: &credentials.username,
            password: &credentials.password,
        };
        match self.post_auth("/auth/signup", &payload).await {
            Ok(response) => {
                self.store_token(&response).await;
                Ok(response)
            }
            Err(err) if err.is_remote() => {
                tracing::warn!(error = %err, "remote signup failed, using development account");
                let login = LoginCredentials {
                    username: credentials.username.clone(),
                    password: credentials.password.clone(),
                };
                let mut response = self
                    .dev_login(&login)
                    .map_err(|_| SomaleoError::auth("Signup failed"))?;
                response.message = Some("Account created successfully".to_string());
                self.store_token(&response).await;
                Ok(response)
            }
            Err(err) => Err(err),
        }
    }

    /// Logs out: best-effort remote call, then the stored token is removed
    /// unconditionally.
    pub async fn logout(&self) -> Result<()> {
        let request = self.client.post(format!("{}/auth/logout", self.base_url));
        if let Err(err) = request.send().await {
            tracing::warn!(error = %err, "remote logout failed");
        }
        self.token_store.delete().await
    }

    /// Whether a session token is currently stored.
    pub async fn is_authenticated(&self) -> bool {
        matches!(self.token_store.load().await, Ok(Some(_)))
    }

    async fn post_auth<B: Serialize>(&self, path: &str, body: &B) -> Result<AuthResponse> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        response
            .json::<AuthResponse>()
            .await
            .map_err(|err| SomaleoError::Serialization {
                format: "JSON".to_string(),
                message: err.to_string(),
            })
    }

    fn dev_login(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        if credentials.username == DEV_USERNAME && credentials.password == DEV_PASSWORD {
            Ok(AuthResponse {
                success: true,
                message: Some("Login successful".to_string()),
                token: Some(format!("mock-jwt-token-{}", Utc::now().timestamp_millis())),
                user: Some(AuthUser {
                    id: "user-001".to_string(),
                    username: credentials.username.clone(),
                }),
            })
        } else {
            Err(SomaleoError::auth("Invalid username or password"))
        }
    }

    async fn store_token(&self, response: &AuthResponse) {
        if let Some(token) = &response.token {
            if let Err(err) = self.token_store.save(token).await {
                tracing::warn!(error = %err, "failed to persist session token");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use somaleo_infrastructure::{FileTokenStore, SomaleoPaths};
    use tempfile::TempDir;

    fn unreachable_client(dir: &TempDir) -> (AuthApiClient, Arc<FileTokenStore>) {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1/api".to_string(),
            timeout_secs: 1,
        };
        let store = Arc::new(FileTokenStore::new(&SomaleoPaths::new(dir.path())).unwrap());
        let client = AuthApiClient::new(&config, store.clone()).unwrap();
        (client, store)
    }

    #[tokio::test]
    async fn dev_account_login_works_without_a_backend() {
        let dir = TempDir::new().unwrap();
        let (client, store) = unreachable_client(&dir);

        let response = client
            .login(&LoginCredentials {
                username: DEV_USERNAME.to_string(),
                password: DEV_PASSWORD.to_string(),
            })
            .await
            .unwrap();

        assert!(response.success);
        assert!(response.token.as_deref().unwrap().starts_with("mock-jwt-token-"));
        assert!(store.load().await.unwrap().is_some());
        assert!(client.is_authenticated().await);
    }

    #[tokio::test]
    async fn wrong_credentials_are_rejected_without_a_backend() {
        let dir = TempDir::new().unwrap();
        let (client, _store) = unreachable_client(&dir);

        let err = client
            .login(&LoginCredentials {
                username: "someone".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert!(err.is_auth());
        assert!(!client.is_authenticated().await);
    }

    #[tokio::test]
    async fn signup_rejects_a_weak_password_locally() {
        let dir = TempDir::new().unwrap();
        let (client, _store) = unreachable_client(&dir);

        let err = client
            .signup(&SignupCredentials {
                username: "student".to_string(),
                password: "short".to_string(),
                confirm_password: "short".to_string(),
            })
            .await
            .unwrap_err();

        assert!(err.is_auth());
    }

    #[tokio::test]
    async fn signup_falls_back_to_the_dev_account() {
        let dir = TempDir::new().unwrap();
        let (client, _store) = unreachable_client(&dir);

        let response = client
            .signup(&SignupCredentials {
                username: DEV_USERNAME.to_string(),
                password: DEV_PASSWORD.to_string(),
                confirm_password: DEV_PASSWORD.to_string(),
            })
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(
            response.message.as_deref(),
            Some("Account created successfully")
        );
    }

    #[tokio::test]
    async fn logout_clears_the_stored_token() {
        let dir = TempDir::new().unwrap();
        let (client, store) = unreachable_client(&dir);
        store.save("mock-jwt-token-1").await.unwrap();

        client.logout().await.unwrap();

        assert_eq!(store.load().await.unwrap(), None);
    }
}
