//! Configuration management for DiffDesk
//!
//! Defaults are overridden by an optional TOML file, then by environment
//! variables, then by command line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::core::ViewMode;
use crate::diff::{DiffAlgorithmType, Granularity};

/// Global configuration for DiffDesk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffDeskConfig {
    /// Diff computation settings
    pub diff: DiffSettings,
    /// UI configuration
    pub ui: UiConfig,
}

/// Configuration for diff computation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffSettings {
    /// Algorithm used for both granularities
    pub algorithm: DiffAlgorithmType,
    /// Granularity of the inline view at startup
    pub granularity: Granularity,
}

/// Configuration for user interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// View mode at startup
    pub view_mode: ViewMode,
    /// Input poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Lines moved by PgUp/PgDn in the output region
    pub scroll_step: usize,
    /// Share of the screen height given to the input panes
    pub editor_height_percent: u16,
    /// Draw the -/+/~ gutter in the aligned view
    pub show_markers: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            tick_rate_ms: 250,
            scroll_step: 10,
            editor_height_percent: 40,
            show_markers: true,
        }
    }
}

impl UiConfig {
    /// Get input poll duration
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl DiffDeskConfig {
    /// Default location: `<config dir>/diffdesk/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("diffdesk").join("config.toml"))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load an explicitly requested file, or fall back to the default
    /// location, or to built-in defaults.
    ///
    /// An explicit path must load; a broken file at the default location is
    /// logged and ignored.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::info!("Loading config from {}", path.display());
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => match Self::load(&path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    Ok(config)
                }
                Err(err) => {
                    tracing::warn!("Ignoring config file: {:#}", err);
                    Ok(Self::default())
                }
            },
            _ => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(algorithm) = lookup("DIFFDESK_ALGORITHM")
            .and_then(|val| DiffAlgorithmType::from_str(&val, true).ok())
        {
            self.diff.algorithm = algorithm;
        }

        if let Some(granularity) = lookup("DIFFDESK_GRANULARITY")
            .and_then(|val| Granularity::from_str(&val, true).ok())
        {
            self.diff.granularity = granularity;
        }

        if let Some(view_mode) = lookup("DIFFDESK_VIEW_MODE")
            .and_then(|val| ViewMode::from_str(&val, true).ok())
        {
            self.ui.view_mode = view_mode;
        }

        if let Some(step) = lookup("DIFFDESK_SCROLL_STEP").and_then(|val| val.parse::<usize>().ok()) {
            self.ui.scroll_step = step;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.ui.tick_rate_ms == 0 {
            return Err("tick_rate_ms must be greater than 0".to_string());
        }

        if self.ui.scroll_step == 0 {
            return Err("scroll_step must be greater than 0".to_string());
        }

        if !(10..=90).contains(&self.ui.editor_height_percent) {
            return Err("editor_height_percent must be between 10 and 90".to_string());
        }

        Ok(())
    }
}
