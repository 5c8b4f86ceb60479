//! Chat session domain module.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`Sender`, `TutorMessage`)
//! - `phase`: Session lifecycle phases (`SessionPhase`)
//! - `backend`: Remote tutor service trait (`TutorBackend`)
//! - `cache`: Local transcript cache trait (`HistoryCache`)
//! - `chat`: The session state machine (`ChatSession`)

mod backend;
mod cache;
mod chat;
mod message;
mod phase;


// Re-export public API
pub use backend::TutorBackend;
pub use cache::HistoryCache;
pub use chat::{ChatSession, SendOutcome};
pub use message::{Sender, TutorMessage};
pub use phase::SessionPhase;
