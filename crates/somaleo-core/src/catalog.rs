//! Subject and competency catalogs.
//!
//! Catalogs populate the selectable tags on a chat session. They are fetched
//! from the remote service once at startup; a failed or empty fetch degrades
//! to the fixed built-in catalog without blocking the session.

use crate::fallback;
use crate::session::TutorBackend;
use serde::{Deserialize, Serialize};

/// A teachable subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: u32,
    pub name: String,
    /// Short code, e.g. "MATH".
    pub code: String,
    /// Display color hint used by rendering layers.
    pub color: String,
}

impl Subject {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        code: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            color: color.into(),
        }
    }
}

/// A curriculum competency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competency {
    pub id: u32,
    pub name: String,
    pub description: String,
}

impl Competency {
    pub fn new(id: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Summary of a recent chat, as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentChat {
    pub id: String,
    pub title: String,
    pub subject: String,
    /// Human-readable recency label as produced by the backend.
    pub timestamp: String,
}

/// The loaded subject/competency catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub subjects: Vec<Subject>,
    pub competencies: Vec<Competency>,
    /// Set when either list was substituted with built-in defaults.
    pub degraded: bool,
}

impl Catalog {
    /// Loads both catalogs from the backend.
    ///
    /// Each list falls back to the built-in defaults independently when its
    /// fetch fails or returns nothing. An empty result is treated the same
    /// as a failure.
    pub async fn load(backend: &dyn TutorBackend) -> Self {
        let (subjects, subjects_degraded) = match backend.fetch_subjects().await {
            Ok(list) if !list.is_empty() => (list, false),
            Ok(_) => (fallback::default_subjects(), true),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch subjects, using defaults");
                (fallback::default_subjects(), true)
            }
        };

        let (competencies, competencies_degraded) = match backend.fetch_competencies().await {
            Ok(list) if !list.is_empty() => (list, false),
            Ok(_) => (fallback::default_competencies(), true),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch competencies, using defaults");
                (fallback::default_competencies(), true)
            }
        };

        Self {
            subjects,
            competencies,
            degraded: subjects_degraded || competencies_degraded,
        }
    }

    /// The built-in catalog, without touching the backend.
    pub fn builtin() -> Self {
        Self {
            subjects: fallback::default_subjects(),
            competencies: fallback::default_competencies(),
            degraded: false,
        }
    }

    /// Name of the initially selected subject (first catalog entry).
    ///
    /// Catalog lists are never empty after [`load`](Self::load): an empty
    /// fetch result is replaced with the built-in defaults.
    pub fn initial_subject(&self) -> &str {
        &self.subjects[0].name
    }

    /// Name of the initially selected competency (first catalog entry).
    pub fn initial_competency(&self) -> &str {
        &self.competencies[0].name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, SomaleoError};
    use crate::session::TutorMessage;
    use async_trait::async_trait;

    struct MockCatalogBackend {
        subjects: Result<Vec<Subject>>,
        competencies: Result<Vec<Competency>>,
    }

    #[async_trait]
    impl TutorBackend for MockCatalogBackend {
        async fn fetch_history(&self) -> Result<Vec<TutorMessage>> {
            Ok(Vec::new())
        }

        async fn request_reply(
            &self,
            _text: &str,
            _subject: &str,
            _competency: &str,
        ) -> Result<TutorMessage> {
            Err(SomaleoError::network("not under test"))
        }

        async fn fetch_subjects(&self) -> Result<Vec<Subject>> {
            self.subjects.clone()
        }

        async fn fetch_competencies(&self) -> Result<Vec<Competency>> {
            self.competencies.clone()
        }

        async fn fetch_recent_chats(&self, _limit: usize) -> Result<Vec<RecentChat>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn builtin_catalog_selects_first_entries() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.initial_subject(), "English");
        assert_eq!(catalog.initial_competency(), "Communication");
        assert!(!catalog.degraded);
    }

    #[tokio::test]
    async fn remote_catalog_is_used_when_available() {
        let backend = MockCatalogBackend {
            subjects: Ok(vec![Subject::new(1, "Physics", "PHY", "blue")]),
            competencies: Ok(vec![Competency::new(1, "Digital Literacy", "Use technology")]),
        };

        let catalog = Catalog::load(&backend).await;

        assert_eq!(catalog.initial_subject(), "Physics");
        assert_eq!(catalog.initial_competency(), "Digital Literacy");
        assert!(!catalog.degraded);
    }

    #[tokio::test]
    async fn failed_fetch_falls_back_to_defaults() {
        let backend = MockCatalogBackend {
            subjects: Err(SomaleoError::network("connection refused")),
            competencies: Ok(vec![Competency::new(1, "Creativity", "Generate ideas")]),
        };

        let catalog = Catalog::load(&backend).await;

        assert_eq!(catalog.subjects, fallback::default_subjects());
        assert_eq!(catalog.initial_competency(), "Creativity");
        assert!(catalog.degraded);
    }

    #[tokio::test]
    async fn empty_lists_fall_back_to_defaults() {
        let backend = MockCatalogBackend {
            subjects: Ok(Vec::new()),
            competencies: Ok(Vec::new()),
        };

        let catalog = Catalog::load(&backend).await;

        assert_eq!(catalog.subjects, fallback::default_subjects());
        assert_eq!(catalog.competencies, fallback::default_competencies());
        assert!(catalog.degraded);
    }
}
