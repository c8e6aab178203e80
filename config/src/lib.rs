//! Configuration file loading for Marquee.
//!
//! The file lives at `~/.marquee/config.toml` unless `MARQUEE_CONFIG` points
//! elsewhere. A missing file is not an error; every section is optional and
//! every option inside a section has a default.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;
use toml::de;

use marquee_types::ui::UiOptions;
use marquee_types::{ContinuousConfig, DisplayMode, SlideConfig};

pub const CONFIG_ENV: &str = "MARQUEE_CONFIG";
pub const MODE_ENV: &str = "MARQUEE_MODE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct MarqueeConfig {
    pub app: Option<AppConfig>,
    pub carousel: Option<SlideConfig>,
    pub continuous: Option<ContinuousConfig>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Carousel shown at startup.
    pub mode: DisplayMode,
    /// Use ASCII-only glyphs for arrows and indicators.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
    /// Render slide changes without transitions.
    pub reduced_motion: bool,
}

impl MarqueeConfig {
    /// Load from the default location. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}", path.display());
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn slide_config(&self) -> SlideConfig {
        self.carousel.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn continuous_config(&self) -> ContinuousConfig {
        self.continuous.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.clone().unwrap_or_default();
        UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
        }
    }

    /// Startup mode: `MARQUEE_MODE` wins over the `[app]` section.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        let from_file = self.app.as_ref().map(|app| app.mode).unwrap_or_default();
        mode_override(env::var(MODE_ENV).ok().as_deref()).unwrap_or(from_file)
    }
}

/// Parse a mode override, ignoring (and logging) values that are not a mode.
#[must_use]
pub fn mode_override(raw: Option<&str>) -> Option<DisplayMode> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(mode) => Some(mode),
        Err(err) => {
            tracing::warn!("Ignoring {MODE_ENV}: {err}");
            None
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(custom) = env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(custom));
    }
    dirs::home_dir().map(|home| home.join(".marquee").join("config.toml"))
}
