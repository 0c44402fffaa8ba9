//! Configuration file handling for PhiKit
//!
//! One file holds the default parameters for every generator plus the layout
//! scale. JSON and TOML are supported, chosen by file extension. Every
//! section is optional; missing sections and keys fall back to the
//! generator defaults.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use phikit_geometry::{
    BranchConfig, LayoutScale, LeafConfig, ShapeConfig, ShapeType, SpiralConfig, VesicaConfig,
};
use phikit_core::error::ensure_positive;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

/// Layout derivation defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Spacing scale
    pub scale: LayoutScale,
    /// Known side of the reference golden rectangle
    pub golden_side: f64,
    /// Whether `golden_side` is the rectangle's width
    pub side_is_width: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            scale: LayoutScale::default(),
            golden_side: 100.0,
            side_is_width: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub spiral: SpiralConfig,
    pub leaf: LeafConfig,
    pub branch: BranchConfig,
    pub vesica: VesicaConfig,
    pub layout: LayoutSettings,
}

fn invalid(section: &str, err: impl std::fmt::Display) -> SettingsError {
    SettingsError::InvalidSetting {
        key: section.to_string(),
        reason: err.to_string(),
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;
        tracing::debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Validate every section, naming the first one that fails.
    pub fn validate(&self) -> SettingsResult<()> {
        self.spiral.validate().map_err(|e| invalid("spiral", e))?;
        self.leaf.validate().map_err(|e| invalid("leaf", e))?;
        self.branch.validate().map_err(|e| invalid("branch", e))?;
        self.vesica.validate().map_err(|e| invalid("vesica", e))?;
        self.layout.scale.validate().map_err(|e| invalid("layout", e))?;
        ensure_positive("golden_side", self.layout.golden_side)
            .map_err(|e| invalid("layout", e))?;
        Ok(())
    }

    /// The configured parameters for one shape kind.
    pub fn shape_config(&self, shape_type: ShapeType) -> ShapeConfig {
        match shape_type {
            ShapeType::Spiral => ShapeConfig::Spiral(self.spiral.clone()),
            ShapeType::Leaf => ShapeConfig::Leaf(self.leaf.clone()),
            ShapeType::Branch => ShapeConfig::Branch(self.branch.clone()),
            ShapeType::Vesica => ShapeConfig::Vesica(self.vesica.clone()),
        }
    }
}

/// `<config dir>/phikit/config.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::UnsupportedPlatform("no configuration directory".to_string())
    })?;
    Ok(dir.join("phikit").join("config.toml"))
}
