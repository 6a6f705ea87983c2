//! User configuration.
//!
//! Read from `config.json` in the platform config directory. Every field has
//! a default, so a missing file or a partial one is fine.

use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ui::theme::ThemeMode;

const CONFIG_FILE: &str = "config.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale used to pick a translation catalog.
    pub locale: String,
    /// Color scheme.
    pub theme: ThemeMode,
    /// Where downloaded images are written.
    pub download_dir: Option<PathBuf>,
    /// Directory holding `<locale>.json` catalogs.
    pub locales_dir: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            theme: ThemeMode::Dark,
            download_dir: None,
            locales_dir: None,
            window_width: 420.0,
            window_height: 780.0,
        }
    }
}

impl Config {
    /// Platform config directory for courier.
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("chat", "courier", "courier").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load from the platform config directory, or defaults when absent.
    pub fn load() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load_from(&dir.join(CONFIG_FILE)),
            None => {
                tracing::warn!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from an explicit path, or defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(Error::Config(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.locale.is_empty() {
            return Err(Error::Config("locale must not be empty".to_string()));
        }
        Ok(())
    }

    /// Download directory, falling back to the user's downloads folder and
    /// then the current directory.
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(|| UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf)))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Catalog directory, falling back to `locales` in the config directory.
    pub fn resolved_locales_dir(&self) -> Option<PathBuf> {
        self.locales_dir
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("locales")))
    }
}
