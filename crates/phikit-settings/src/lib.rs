//! PhiKit Settings Crate
//!
//! Handles the configuration file holding default generator parameters.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{default_config_path, Config, ConfigFormat, LayoutSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use manager::SettingsManager;
