//! Filesystem-backed transcript cache.

use crate::paths::SomaleoPaths;
use async_trait::async_trait;
use somaleo_core::error::Result;
use somaleo_core::session::{HistoryCache, TutorMessage};
use std::path::PathBuf;
use tokio::fs;

/// Session key used when the caller does not manage multiple sessions.
pub const DEFAULT_SESSION_KEY: &str = "ai-tutor";

/// Persists one session's transcript as a JSON file.
///
/// The file is rewritten wholesale on every store; transcripts are small
/// (bounded by one conversation) so no incremental format is needed.
pub struct FileHistoryCache {
    file_path: PathBuf,
}

impl FileHistoryCache {
    /// Creates a cache for the given session key, ensuring the history
    /// directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory structure cannot be created.
    pub fn new(paths: &SomaleoPaths, session_key: &str) -> Result<Self> {
        std::fs::create_dir_all(paths.history_dir())?;
        Ok(Self {
            file_path: paths.history_file(session_key),
        })
    }

    /// Creates a cache under the default session key.
    pub fn default_session(paths: &SomaleoPaths) -> Result<Self> {
        Self::new(paths, DEFAULT_SESSION_KEY)
    }
}

#[async_trait]
impl HistoryCache for FileHistoryCache {
    async fn load(&self) -> Result<Option<Vec<TutorMessage>>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.file_path).await?;
        let messages: Vec<TutorMessage> = serde_json::from_str(&json)?;
        Ok(Some(messages))
    }

    async fn store(&self, messages: &[TutorMessage]) -> Result<()> {
        let json = serde_json::to_string_pretty(messages)?;
        fs::write(&self.file_path, json).await?;
        tracing::debug!(path = %self.file_path.display(), count = messages.len(), "transcript cached");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path).await?;
        }
        Ok(())
    }
}
