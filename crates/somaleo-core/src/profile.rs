//! Student profile types.

use crate::error::Result;
use crate::fallback;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Aggregate learning statistics shown on the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub completed_lessons: u32,
    pub average_score: u32,
    pub streak: u32,
}

/// A student's profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub class: String,
    /// Enrollment date, YYYY-MM-DD.
    pub enrollment_date: String,
    pub favorite_subjects: Vec<String>,
    pub bio: String,
    pub stats: ProfileStats,
}

/// Source of the remote student profile.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetches the student's profile record.
    async fn fetch_profile(&self) -> Result<StudentProfile>;
}

/// Loads the profile, substituting the built-in default on failure.
///
/// The boolean is the advisory degraded flag: true when fallback data was
/// substituted.
pub async fn load_profile(source: &dyn ProfileSource) -> (StudentProfile, bool) {
    match source.fetch_profile().await {
        Ok(profile) => (profile, false),
        Err(err) => {
            tracing::warn!(error = %err, "failed to fetch student profile, using default");
            (fallback::default_profile(), true)
        }
    }
}
