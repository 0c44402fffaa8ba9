//! Settings manager
//!
//! Owns the active [`Config`] and the file it was read from.

use crate::config::{default_config_path, Config};
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SettingsManager {
    config: Config,
    path: PathBuf,
}

impl SettingsManager {
    /// Manager bound to `path`, starting from default settings.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Config::default(),
            path: path.into(),
        }
    }

    /// Load from `path` if the file exists, otherwise keep the defaults.
    pub fn load_or_default(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let mut manager = Self::with_path(path);
        if manager.path.exists() {
            manager.config = Config::load_from_file(&manager.path)?;
        } else {
            tracing::info!(
                "No configuration at {}, using defaults",
                manager.path.display()
            );
        }
        Ok(manager)
    }

    /// Load from the platform default location.
    pub fn load_default() -> SettingsResult<Self> {
        Self::load_or_default(default_config_path()?)
    }

    /// Create the directory holding the default configuration file.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let path = default_config_path()?;
        let dir = path
            .parent()
            .ok_or_else(|| SettingsError::ConfigDirectory(path.display().to_string()))?;
        std::fs::create_dir_all(dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir.to_path_buf())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the bound file, replacing the in-memory settings.
    pub fn reload(&mut self) -> SettingsResult<()> {
        self.config = Config::load_from_file(&self.path)?;
        Ok(())
    }

    /// Write the settings back, creating the parent directory if needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        self.config.save_to_file(&self.path)
    }

    /// Drop all changes and return to the defaults.
    pub fn reset(&mut self) {
        self.config = Config::default();
    }
}
