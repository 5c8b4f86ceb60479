//! Remote tutor backend trait.

use crate::catalog::{Competency, RecentChat, Subject};
use crate::error::Result;
use crate::session::TutorMessage;
use async_trait::async_trait;

/// An abstract client for the remote tutor service.
///
/// This trait decouples the session logic from the concrete transport
/// (an HTTP client in production, in-memory mocks in tests). Every method
/// maps to one request/response exchange; the caller decides how a failure
/// is recovered (typically by substituting fixed fallback data).
#[async_trait]
pub trait TutorBackend: Send + Sync {
    /// Fetches the prior conversation history, oldest first.
    async fn fetch_history(&self) -> Result<Vec<TutorMessage>>;

    /// Submits a user message and returns the tutor's reply record.
    async fn request_reply(
        &self,
        text: &str,
        subject: &str,
        competency: &str,
    ) -> Result<TutorMessage>;

    /// Fetches the subject catalog.
    async fn fetch_subjects(&self) -> Result<Vec<Subject>>;

    /// Fetches the competency catalog.
    async fn fetch_competencies(&self) -> Result<Vec<Competency>>;

    /// Fetches summaries of the most recent chats.
    async fn fetch_recent_chats(&self, limit: usize) -> Result<Vec<RecentChat>>;
}
