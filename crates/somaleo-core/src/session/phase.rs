//! Session lifecycle phases.

use serde::{Deserialize, Serialize};

/// The lifecycle phase of a chat session.
///
/// Transitions:
///
/// ```text
/// Uninitialized --initialize()--> Loading --history loaded/fallback--> Ready
/// Ready --send() accepted--> AwaitingReply --reply resolved--> Ready
/// any --clear()--> Ready
/// ```
///
/// A failed history load is not a distinct resting phase; the session
/// degrades to fallback data and continues as `Ready` with an advisory flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Created but not yet initialized.
    Uninitialized,
    /// Remote history fetch is in flight.
    Loading,
    /// Messages available, input enabled.
    Ready,
    /// A user message has been appended and its reply is pending.
    AwaitingReply,
}

impl SessionPhase {
    /// Returns true when the session accepts new input.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Ready)
    }
}
