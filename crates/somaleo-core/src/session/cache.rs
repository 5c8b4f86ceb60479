//! Local transcript cache trait.

use crate::error::Result;
use crate::session::TutorMessage;
use async_trait::async_trait;

/// An abstract store for the serialized transcript of one chat session.
///
/// The cache is read once when a session is created, written after every
/// transcript mutation, and removed on an explicit clear. It outlives the
/// in-memory session, so a restarted process resumes where the student left
/// off. Exactly one session owns a given cache entry at a time; no
/// cross-process coordination is provided.
#[async_trait]
pub trait HistoryCache: Send + Sync {
    /// Loads the cached transcript.
    ///
    /// Returns `Ok(None)` when no entry exists yet.
    async fn load(&self) -> Result<Option<Vec<TutorMessage>>>;

    /// Replaces the cached transcript wholesale.
    async fn store(&self, messages: &[TutorMessage]) -> Result<()>;

    /// Removes the cache entry.
    async fn clear(&self) -> Result<()>;
}
