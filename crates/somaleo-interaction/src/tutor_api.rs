//! TutorApiClient - REST client for the tutor service.
//!
//! Implements the remote side of the session and catalog logic: message
//! history, reply requests, catalogs, recent chats, and the student profile.
//! Callers handle failures by substituting fallback data; this client only
//! reports them as typed errors.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use somaleo_core::catalog::{Competency, RecentChat, Subject};
use somaleo_core::config::ApiConfig;
use somaleo_core::error::{Result, SomaleoError};
use somaleo_core::profile::{ProfileSource, StudentProfile};
use somaleo_core::session::{TutorBackend, TutorMessage};
use std::time::Duration;

/// Maps a transport-level reqwest failure into the shared error type.
pub(crate) fn transport_error(err: reqwest::Error) -> SomaleoError {
    SomaleoError::network(err.to_string())
}

/// Error body shape produced by the tutor service.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Extracts a typed error from a non-success response.
pub(crate) async fn status_error(response: Response) -> SomaleoError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body
            .message
            .or(body.error)
            .unwrap_or_else(|| "Request failed".to_string()),
        Err(_) => "Request failed".to_string(),
    };
    SomaleoError::http(status.as_u16(), message)
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    message: &'a str,
    subject: &'a str,
    competency: &'a str,
}

/// HTTP client for the tutor endpoints.
#[derive(Clone)]
pub struct TutorApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl TutorApiClient {
    /// Creates a client from the API configuration.
    ///
    /// The configured timeout applies to every request; individual calls
    /// carry no extra deadline.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(transport_error)?;
        Ok(Self {
            client,
            base_url: config.resolved_base_url(),
            token: None,
        })
    }

    /// Attaches a bearer token to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .authorize(self.client.get(self.url(path)))
            .send()
            .await
            .map_err(transport_error)?;
        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        response.json::<T>().await.map_err(|err| {
            SomaleoError::Serialization {
                format: "JSON".to_string(),
                message: err.to_string(),
            }
        })
    }
}

#[async_trait]
impl TutorBackend for TutorApiClient {
    async fn fetch_history(&self) -> Result<Vec<TutorMessage>> {
        self.get_json("/tutor/messages").await
    }

    async fn request_reply(
        &self,
        text: &str,
        subject: &str,
        competency: &str,
    ) -> Result<TutorMessage> {
        let body = SendMessageRequest {
            message: text,
            subject,
            competency,
        };
        let response = self
            .authorize(self.client.post(self.url("/tutor/messages")))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        Self::parse(response).await
    }

    async fn fetch_subjects(&self) -> Result<Vec<Subject>> {
        self.get_json("/tutor/subjects").await
    }

    async fn fetch_competencies(&self) -> Result<Vec<Competency>> {
        self.get_json("/tutor/competencies").await
    }

    async fn fetch_recent_chats(&self, limit: usize) -> Result<Vec<RecentChat>> {
        self.get_json(&format!("/tutor/chats/recent?limit={}", limit))
            .await
    }
}

#[async_trait]
impl ProfileSource for TutorApiClient {
    async fn fetch_profile(&self) -> Result<StudentProfile> {
        self.get_json("/student/profile").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> ApiConfig {
        ApiConfig {
            base_url: "http://127.0.0.1:1/api".to_string(),
            timeout_secs: 1,
        }
    }

    #[test]
    fn request_body_matches_the_wire_shape() {
        let body = SendMessageRequest {
            message: "What is 2+2?",
            subject: "Mathematics",
            competency: "Critical Thinking",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "What is 2+2?");
        assert_eq!(json["subject"], "Mathematics");
        assert_eq!(json["competency"], "Critical Thinking");
    }

    #[test]
    fn paths_are_joined_to_the_base_url() {
        let client = TutorApiClient::new(&unreachable_config()).unwrap();
        assert_eq!(
            client.url("/tutor/messages"),
            "http://127.0.0.1:1/api/tutor/messages"
        );
    }

    #[tokio::test]
    async fn unreachable_backend_reports_a_network_error() {
        let client = TutorApiClient::new(&unreachable_config()).unwrap();
        let err = client.fetch_history().await.unwrap_err();
        assert!(err.is_remote());
    }
}
