//! Chat session state machine.
//!
//! A [`ChatSession`] owns the ordered transcript of one tutoring
//! conversation and drives it through its lifecycle phases. The transcript
//! is append-only; the only wholesale mutation is [`ChatSession::clear`],
//! which resets it to the single seed message.

use crate::fallback;
use crate::session::backend::TutorBackend;
use crate::session::cache::HistoryCache;
use crate::session::message::{Sender, TutorMessage};
use crate::session::phase::SessionPhase;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Outcome of a [`ChatSession::send`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The turn completed; the appended AI reply is returned.
    Replied(TutorMessage),
    /// The input was empty after trimming; nothing was appended.
    IgnoredEmpty,
    /// A reply is already pending; nothing was appended.
    Busy,
}

struct SessionState {
    phase: SessionPhase,
    messages: Vec<TutorMessage>,
    degraded: bool,
    subject: String,
    competency: String,
}

/// An in-memory tutoring conversation with remote-fetch-with-fallback
/// initialization and local persistence after every mutation.
///
/// # Invariants
///
/// - The transcript is never empty after [`initialize`](Self::initialize):
///   it holds the seed message, the cached or fetched history, or the fixed
///   fallback transcript.
/// - At most one turn is outstanding at a time. A `send` while a reply is
///   pending is a no-op; the phase guard serializes concurrent callers.
/// - Message append order is completion order, which under the
///   single-outstanding-turn guard is also request order.
///
/// Remote failures are never fatal: history-load failures substitute the
/// fallback transcript and set the advisory [`is_degraded`](Self::is_degraded)
/// flag, reply failures substitute a fixed apology turn.
pub struct ChatSession {
    backend: Arc<dyn TutorBackend>,
    cache: Arc<dyn HistoryCache>,
    state: RwLock<SessionState>,
}

impl ChatSession {
    /// Creates an uninitialized session seeded with the welcome message.
    ///
    /// The initial subject/competency tags are the first entries of the
    /// built-in catalog; callers holding a loaded catalog override them via
    /// the setters.
    pub fn new(backend: Arc<dyn TutorBackend>, cache: Arc<dyn HistoryCache>) -> Self {
        Self {
            backend,
            cache,
            state: RwLock::new(SessionState {
                phase: SessionPhase::Uninitialized,
                messages: vec![fallback::seed_message()],
                degraded: false,
                subject: "English".to_string(),
                competency: "Communication".to_string(),
            }),
        }
    }

    /// Loads the transcript: local cache first, then remote history, then
    /// the fixed fallback.
    ///
    /// Runs once after creation. A non-empty cached transcript wins without
    /// touching the backend. Otherwise remote history replaces the seed when
    /// it is non-empty; a failed fetch and an empty result are treated
    /// identically (both substitute the fallback transcript and set the
    /// advisory flag). Never fails from the caller's perspective.
    pub async fn initialize(&self) {
        {
            let mut state = self.state.write().await;
            state.phase = SessionPhase::Loading;
        }

        match self.cache.load().await {
            Ok(Some(cached)) if !cached.is_empty() => {
                let mut state = self.state.write().await;
                state.messages = cached;
                state.phase = SessionPhase::Ready;
                return;
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = %err, "failed to read cached transcript");
            }
        }

        let (messages, degraded) = match self.backend.fetch_history().await {
            Ok(history) if !history.is_empty() => (history, false),
            Ok(_) => {
                tracing::warn!("remote history was empty, substituting fallback transcript");
                (fallback::fallback_history(), true)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch history, substituting fallback transcript");
                (fallback::fallback_history(), true)
            }
        };

        {
            let mut state = self.state.write().await;
            state.messages = messages;
            state.degraded = degraded;
            state.phase = SessionPhase::Ready;
        }
        self.persist().await;
    }

    /// Submits a user message and resolves its reply.
    ///
    /// Rejects without appending anything when the trimmed text is empty or
    /// a reply is already pending. On acceptance the user message is
    /// appended immediately, tagged with the currently selected subject and
    /// competency; exactly one AI message follows: the backend's reply, or
    /// a fixed apology when the request fails or the reply is empty. The
    /// transcript is persisted after each append.
    pub async fn send(&self, text: &str) -> SendOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SendOutcome::IgnoredEmpty;
        }

        let (subject, competency) = {
            let mut state = self.state.write().await;
            if state.phase == SessionPhase::AwaitingReply {
                return SendOutcome::Busy;
            }
            state.phase = SessionPhase::AwaitingReply;
            let subject = state.subject.clone();
            let competency = state.competency.clone();
            state.messages.push(TutorMessage::now(
                trimmed,
                Sender::User,
                Some(subject.clone()),
                Some(competency.clone()),
            ));
            (subject, competency)
        };
        self.persist().await;

        let (content, failed) = match self
            .backend
            .request_reply(trimmed, &subject, &competency)
            .await
        {
            Ok(record) if !record.content.trim().is_empty() => (record.content, false),
            Ok(_) => (fallback::EMPTY_REPLY_APOLOGY.to_string(), false),
            Err(err) => {
                tracing::warn!(error = %err, "reply request failed, substituting apology turn");
                (fallback::SEND_FAILED_APOLOGY.to_string(), true)
            }
        };
        let reply = TutorMessage::reply_now(content, Some(subject), Some(competency));

        {
            let mut state = self.state.write().await;
            state.messages.push(reply.clone());
            if failed {
                state.degraded = true;
            }
            state.phase = SessionPhase::Ready;
        }
        self.persist().await;

        SendOutcome::Replied(reply)
    }

    /// Resets the transcript to the single seed message and removes the
    /// cache entry. Always succeeds.
    pub async fn clear(&self) {
        {
            let mut state = self.state.write().await;
            state.messages = vec![fallback::seed_message()];
            state.phase = SessionPhase::Ready;
        }
        if let Err(err) = self.cache.clear().await {
            tracing::warn!(error = %err, "failed to remove cached transcript");
        }
    }

    /// A snapshot of the transcript, oldest first.
    pub async fn messages(&self) -> Vec<TutorMessage> {
        self.state.read().await.messages.clone()
    }

    /// The current lifecycle phase.
    pub async fn phase(&self) -> SessionPhase {
        self.state.read().await.phase
    }

    /// Advisory flag: true when fallback data has been substituted for a
    /// failed remote call at any point in this session.
    pub async fn is_degraded(&self) -> bool {
        self.state.read().await.degraded
    }

    /// The currently selected subject tag.
    pub async fn selected_subject(&self) -> String {
        self.state.read().await.subject.clone()
    }

    /// The currently selected competency tag.
    pub async fn selected_competency(&self) -> String {
        self.state.read().await.competency.clone()
    }

    /// Selects the subject applied to subsequent messages.
    pub async fn set_subject(&self, subject: impl Into<String>) {
        self.state.write().await.subject = subject.into();
    }

    /// Selects the competency applied to subsequent messages.
    pub async fn set_competency(&self, competency: impl Into<String>) {
        self.state.write().await.competency = competency.into();
    }

    async fn persist(&self) {
        let messages = self.state.read().await.messages.clone();
        match self.cache.store(&messages).await {
            Ok(()) => tracing::debug!(count = messages.len(), "transcript persisted"),
            Err(err) => tracing::warn!(error = %err, "failed to persist transcript"),
        }
    }
}
