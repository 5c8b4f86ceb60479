//! Fixed fallback content.
//!
//! Every remote call in Somaleo degrades to fixed built-in data rather than
//! failing the session. This module is the single home for that content: the
//! seed welcome message, the fallback transcript, the default catalogs, the
//! default profile, and the substituted reply strings.

use crate::catalog::{Competency, RecentChat, Subject};
use crate::profile::{ProfileStats, StudentProfile};
use crate::session::{Sender, TutorMessage};
use chrono::{Duration, Utc};

/// Content of the seed message shown when a session has no history.
pub const WELCOME_MESSAGE: &str = "Hello! I'm your CBE AI Tutor. I can help you with Junior Secondary subjects based on the Competency Based Curriculum in Kenya. How can I assist you today?";

/// Substituted reply when the tutor answered with empty content.
pub const EMPTY_REPLY_APOLOGY: &str =
    "I apologize, I could not generate a response. Please try again.";

/// Substituted reply when the reply request failed outright.
pub const SEND_FAILED_APOLOGY: &str = "Sorry, I encountered an error. Please try again later.";

/// Built-in development account accepted when the auth backend is down.
pub const DEV_USERNAME: &str = "johndoe";
/// Password of the built-in development account.
pub const DEV_PASSWORD: &str = "P@sw0rd1";

/// Fixed id of the seed message.
pub const SEED_MESSAGE_ID: &str = "1";

/// The fixed welcome message every fresh session is seeded with.
pub fn seed_message() -> TutorMessage {
    TutorMessage {
        id: SEED_MESSAGE_ID.to_string(),
        content: WELCOME_MESSAGE.to_string(),
        sender: Sender::Ai,
        timestamp: Utc::now(),
        subject: Some("General".to_string()),
        competency: Some("Communication".to_string()),
    }
}

/// The fixed transcript substituted when remote history cannot be loaded.
pub fn fallback_history() -> Vec<TutorMessage> {
    let now = Utc::now();
    vec![
        TutorMessage {
            id: "msg-1".to_string(),
            content: "Can you help me understand fractions in mathematics?".to_string(),
            sender: Sender::User,
            timestamp: now - Duration::hours(1),
            subject: Some("Mathematics".to_string()),
            competency: Some("Critical Thinking".to_string()),
        },
        TutorMessage {
            id: "msg-2".to_string(),
            content: "Of course! Let me explain fractions. A fraction represents a part of a whole. It consists of two numbers: the numerator (top number) and the denominator (bottom number). For example, in 1/2, 1 is the numerator and 2 is the denominator, meaning one part out of two equal parts.".to_string(),
            sender: Sender::Ai,
            timestamp: now - Duration::minutes(58),
            subject: Some("Mathematics".to_string()),
            competency: Some("Critical Thinking".to_string()),
        },
    ]
}

/// Built-in subject catalog used when the remote catalog is unavailable.
pub fn default_subjects() -> Vec<Subject> {
    vec![
        Subject::new(1, "English", "ENG", "green"),
        Subject::new(2, "Kiswahili", "SWA", "red"),
        Subject::new(3, "Mathematics", "MATH", "blue"),
        Subject::new(4, "Physical Education (PE)", "PE", "yellow"),
        Subject::new(5, "Religious Education (CRE/IRE/HRE)", "RE", "indigo"),
        Subject::new(6, "Science", "SCI", "purple"),
        Subject::new(7, "Social Studies", "SST", "amber"),
    ]
}

/// Built-in competency catalog used when the remote catalog is unavailable.
pub fn default_competencies() -> Vec<Competency> {
    vec![
        Competency::new(1, "Communication", "Ability to express and interpret concepts"),
        Competency::new(2, "Critical Thinking", "Analyze and evaluate information"),
        Competency::new(3, "Creativity", "Generate innovative ideas and solutions"),
        Competency::new(4, "Collaboration", "Work effectively in teams"),
        Competency::new(5, "Citizenship", "Responsible community participation"),
    ]
}

/// Built-in recent chat summaries used when the remote list is unavailable.
pub fn default_recent_chats() -> Vec<RecentChat> {
    vec![
        RecentChat {
            id: "chat-1".to_string(),
            title: "Algebra basics".to_string(),
            subject: "Mathematics".to_string(),
            timestamp: "10:12 AM".to_string(),
        },
        RecentChat {
            id: "chat-2".to_string(),
            title: "Reading comprehension".to_string(),
            subject: "English".to_string(),
            timestamp: "Yesterday".to_string(),
        },
        RecentChat {
            id: "chat-3".to_string(),
            title: "Forces & motion".to_string(),
            subject: "Science".to_string(),
            timestamp: "2 days ago".to_string(),
        },
        RecentChat {
            id: "chat-4".to_string(),
            title: "Map skills".to_string(),
            subject: "Social Studies".to_string(),
            timestamp: "3 days ago".to_string(),
        },
    ]
}

/// Built-in student profile used when the remote profile is unavailable.
pub fn default_profile() -> StudentProfile {
    StudentProfile {
        id: "student-001".to_string(),
        name: "Student".to_string(),
        role: "Student".to_string(),
        email: "student@school.ac.ke".to_string(),
        phone: "+254 700 000 000".to_string(),
        location: "Kenya".to_string(),
        class: "Grade 7".to_string(),
        enrollment_date: Utc::now().format("%Y-%m-%d").to_string(),
        favorite_subjects: vec!["Mathematics".to_string(), "Science".to_string()],
        bio: "Welcome to CBE AI Tutor".to_string(),
        stats: ProfileStats {
            completed_lessons: 0,
            average_score: 0,
            streak: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_history_is_one_turn() {
        let history = fallback_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender, Sender::User);
        assert_eq!(history[1].sender, Sender::Ai);
        assert!(history[0].timestamp < history[1].timestamp);
    }

    #[test]
    fn seed_message_is_from_the_tutor() {
        let seed = seed_message();
        assert_eq!(seed.id, SEED_MESSAGE_ID);
        assert_eq!(seed.sender, Sender::Ai);
        assert_eq!(seed.subject.as_deref(), Some("General"));
    }

    #[test]
    fn default_catalogs_are_non_empty() {
        assert_eq!(default_subjects().len(), 7);
        assert_eq!(default_competencies().len(), 5);
        assert_eq!(default_recent_chats().len(), 4);
    }
}
