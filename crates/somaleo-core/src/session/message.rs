//! Tutor conversation message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the author of a message in a tutoring conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message from the student.
    User,
    /// Message from the AI tutor.
    Ai,
}

/// A single message in a tutoring conversation.
///
/// Messages are immutable once appended to a session. The id is generated by
/// the caller from the current epoch-millisecond clock and must be unique
/// within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorMessage {
    /// Unique identifier within the session.
    pub id: String,
    /// The message text.
    pub content: String,
    /// Who authored the message.
    pub sender: Sender,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
    /// Subject the message was tagged with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Competency the message was tagged with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competency: Option<String>,
}

impl TutorMessage {
    /// Creates a message stamped with the current time and an
    /// epoch-millisecond id.
    pub fn now(
        content: impl Into<String>,
        sender: Sender,
        subject: Option<String>,
        competency: Option<String>,
    ) -> Self {
        let timestamp = Utc::now();
        Self {
            id: timestamp.timestamp_millis().to_string(),
            content: content.into(),
            sender,
            timestamp,
            subject,
            competency,
        }
    }

    /// Creates a reply message paired with a user turn.
    ///
    /// The id is offset by one millisecond so a reply resolving within the
    /// same clock tick as its user turn still gets a distinct id.
    pub fn reply_now(
        content: impl Into<String>,
        subject: Option<String>,
        competency: Option<String>,
    ) -> Self {
        let timestamp = Utc::now();
        Self {
            id: (timestamp.timestamp_millis() + 1).to_string(),
            content: content.into(),
            sender: Sender::Ai,
            timestamp,
            subject,
            competency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::Ai).unwrap(), "\"ai\"");
    }

    #[test]
    fn message_round_trips_through_json() {
        let message = TutorMessage::now(
            "What is 2+2?",
            Sender::User,
            Some("Mathematics".to_string()),
            Some("Critical Thinking".to_string()),
        );
        let json = serde_json::to_string(&message).unwrap();
        let parsed: TutorMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn optional_tags_may_be_absent_on_the_wire() {
        let json = r#"{
            "id": "msg-1",
            "content": "Hello",
            "sender": "ai",
            "timestamp": "2024-01-01T00:00:00Z"
        }"#;
        let parsed: TutorMessage = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.sender, Sender::Ai);
        assert!(parsed.subject.is_none());
        assert!(parsed.competency.is_none());
    }
}
