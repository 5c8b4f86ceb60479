//! Filesystem-backed session token store.

use crate::paths::SomaleoPaths;
use async_trait::async_trait;
use somaleo_core::auth::TokenStore;
use somaleo_core::error::Result;
use std::path::PathBuf;
use tokio::fs;

/// Stores the session token as a plain-text file under the somaleo base
/// directory.
pub struct FileTokenStore {
    file_path: PathBuf,
}

impl FileTokenStore {
    /// Creates a token store, ensuring the base directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory structure cannot be created.
    pub fn new(paths: &SomaleoPaths) -> Result<Self> {
        std::fs::create_dir_all(paths.base_dir())?;
        Ok(Self {
            file_path: paths.token_file(),
        })
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn save(&self, token: &str) -> Result<()> {
        fs::write(&self.file_path, token).await?;
        tracing::debug!(path = %self.file_path.display(), "session token stored");
        Ok(())
    }

    async fn load(&self) -> Result<Option<String>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let token = fs::read_to_string(&self.file_path).await?;
        Ok(Some(token.trim().to_string()))
    }

    async fn delete(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn token_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(&SomaleoPaths::new(dir.path())).unwrap();

        assert_eq!(store.load().await.unwrap(), None);

        store.save("mock-jwt-token-123").await.unwrap();
        assert_eq!(
            store.load().await.unwrap(),
            Some("mock-jwt-token-123".to_string())
        );

        store.delete().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
        // Deleting again is not an error.
        store.delete().await.unwrap();
    }
}
