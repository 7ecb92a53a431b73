//! Configuration management for the application.
//!
//! Handles loading and saving the application configuration in TOML format
//! with platform-specific directory resolution. Only the theme preference is
//! persisted; everything else the showroom displays is static content.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_DIR_NAME;
use crate::tui::theme::ThemeMode;

/// Theme display mode preference.
///
/// `Auto` probes the OS at startup; `Light` and `Dark` are explicit. The
/// in-session toggle is never written back, so each session starts from this
/// preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemePreference {
    /// Automatically detect OS theme (dark/light)
    Auto,
    /// Always start in the dark theme
    Dark,
    /// Always start in the light theme
    #[default]
    Light,
}

impl ThemePreference {
    /// Resolves the preference into a concrete startup mode.
    #[must_use]
    pub fn resolve(self) -> ThemeMode {
        match self {
            Self::Auto => ThemeMode::detect(),
            Self::Dark => ThemeMode::Dark,
            Self::Light => ThemeMode::Light,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemePreference,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/EliteAuto/config.toml`
/// - macOS: `~/Library/Application Support/EliteAuto/config.toml`
/// - Windows: `%APPDATA%\EliteAuto\config.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the platform-specific configuration directory.
    ///
    /// # Errors
    ///
    /// Returns error if the platform config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join(CONFIG_DIR_NAME))
    }

    /// Returns the full path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Loads the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing or cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Saves the configuration to the default location, creating the
    /// directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or the file written.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_starts_light() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemePreference::Light);
    }

    #[test]
    fn test_resolve_explicit_preferences() {
        assert_eq!(ThemePreference::Dark.resolve(), ThemeMode::Dark);
        assert_eq!(ThemePreference::Light.resolve(), ThemeMode::Light);
    }

    #[test]
    fn test_parse_missing_fields_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.theme_mode, ThemePreference::Light);
    }

    #[test]
    fn test_parse_theme_mode() {
        let config: Config = toml::from_str("[ui]\ntheme_mode = \"Dark\"\n").unwrap();
        assert_eq!(config.ui.theme_mode, ThemePreference::Dark);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            ui: UiConfig {
                theme_mode: ThemePreference::Dark,
            },
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("nope.toml"));
        assert!(result.is_err());
    }
}
