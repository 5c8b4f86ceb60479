//! Unified path management for somaleo data files.
//!
//! All configuration, the auth token, and cached transcripts live under one
//! base directory so a single override relocates everything (used by tests
//! and by deployments that cannot touch the home directory).

use somaleo_core::error::{Result, SomaleoError};
use std::path::{Path, PathBuf};

/// Resolves the files somaleo stores on disk.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/somaleo/           # Base directory (default location)
/// ├── config.toml              # Application configuration
/// ├── auth_token               # Session token, plain text
/// └── history/
///     └── <session-key>.json   # Cached chat transcripts
/// ```
#[derive(Debug, Clone)]
pub struct SomaleoPaths {
    base_dir: PathBuf,
}

impl SomaleoPaths {
    /// Creates a `SomaleoPaths` rooted at the given directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Resolves the default location (`~/.config/somaleo`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform configuration directory cannot be
    /// determined.
    pub fn default_location() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SomaleoError::config("Cannot determine configuration directory"))?;
        Ok(Self::new(config_dir.join("somaleo")))
    }

    /// The base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.toml")
    }

    /// Path of the stored session token.
    pub fn token_file(&self) -> PathBuf {
        self.base_dir.join("auth_token")
    }

    /// Directory holding cached transcripts.
    pub fn history_dir(&self) -> PathBuf {
        self.base_dir.join("history")
    }

    /// Path of the cached transcript for a session key.
    pub fn history_file(&self, session_key: &str) -> PathBuf {
        self.history_dir().join(format!("{}.json", session_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_are_resolved_under_the_base_dir() {
        let paths = SomaleoPaths::new("/tmp/somaleo-test");
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/tmp/somaleo-test/config.toml")
        );
        assert_eq!(
            paths.token_file(),
            PathBuf::from("/tmp/somaleo-test/auth_token")
        );
        assert_eq!(
            paths.history_file("ai-tutor"),
            PathBuf::from("/tmp/somaleo-test/history/ai-tutor.json")
        );
    }
}
