//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` under the somaleo base
//! directory, writing the defaults on first run.

use crate::paths::SomaleoPaths;
use somaleo_core::config::RootConfig;
use somaleo_core::error::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Loads and caches the root configuration.
///
/// The configuration is read lazily on first access and cached to avoid
/// repeated file I/O.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading from the given paths.
    pub fn new(paths: &SomaleoPaths) -> Self {
        Self {
            config_path: paths.config_file(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService at the default location (`~/.config/somaleo`).
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(&SomaleoPaths::default_location()?))
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A missing or unreadable file yields the defaults; a missing file is
    /// additionally written out so the student has something to edit.
    pub fn get_config(&self) -> RootConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load config, using defaults");
            RootConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> Result<RootConfig> {
        if !self.config_path.exists() {
            let defaults = RootConfig::default();
            self.write_defaults(&defaults)?;
            return Ok(defaults);
        }

        let content = fs::read_to_string(&self.config_path)?;
        let config: RootConfig = toml::from_str(&content)?;
        Ok(config)
    }

    fn write_defaults(&self, defaults: &RootConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(defaults)?;
        fs::write(&self.config_path, toml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use somaleo_core::config::DEFAULT_BASE_URL;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults_and_writes_them() {
        let dir = TempDir::new().unwrap();
        let paths = SomaleoPaths::new(dir.path());
        let service = ConfigService::new(&paths);

        let config = service.get_config();

        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(paths.config_file().exists());
    }

    #[test]
    fn configured_values_are_loaded() {
        let dir = TempDir::new().unwrap();
        let paths = SomaleoPaths::new(dir.path());
        fs::create_dir_all(paths.base_dir()).unwrap();
        fs::write(
            paths.config_file(),
            "[api]\nbase_url = \"http://tutor.school.ac.ke/api\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = ConfigService::new(&paths).get_config();

        assert_eq!(config.api.base_url, "http://tutor.school.ac.ke/api");
        assert_eq!(config.api.timeout_secs, 5);
    }

    #[test]
    fn cache_is_reused_until_invalidated() {
        let dir = TempDir::new().unwrap();
        let paths = SomaleoPaths::new(dir.path());
        let service = ConfigService::new(&paths);
        let first = service.get_config();

        // Change the file behind the cache.
        fs::write(
            paths.config_file(),
            "[api]\nbase_url = \"http://changed.test/api\"\n",
        )
        .unwrap();

        assert_eq!(service.get_config(), first);

        service.invalidate_cache();
        assert_eq!(service.get_config().api.base_url, "http://changed.test/api");
    }
}
