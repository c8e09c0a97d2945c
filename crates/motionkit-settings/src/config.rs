//! Configuration management for the motion pipeline
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Transform registration (which transforms load, and in what order)
//! - Exclude-filter options (diagnostics)

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Registration name of the object-exclusion filter.
///
/// The exclusion filter must observe fully-transformed positions, so when
/// it appears in a registration order it has to come last.
pub const EXCLUDE_TRANSFORM: &str = "exclude_object";

/// Transform registration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformSettings {
    /// Transform names in registration order. Registration order is chain
    /// order: the last entry wraps everything before it and is applied last.
    pub order: Vec<String>,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            order: vec![
                "bed_mesh".to_string(),
                "skew_correction".to_string(),
                EXCLUDE_TRANSFORM.to_string(),
            ],
        }
    }
}

/// Exclude-filter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcludeSettings {
    /// Log a diagnostic when a suppressed region is entered or left
    pub log_transitions: bool,
}

impl Default for ExcludeSettings {
    fn default() -> Self {
        Self {
            log_transitions: true,
        }
    }
}

/// Complete pipeline configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PipelineSettings {
    /// Transform registration settings
    #[serde(default)]
    pub transforms: TransformSettings,
    /// Exclude-filter settings
    #[serde(default)]
    pub exclude: ExcludeSettings,
}

impl PipelineSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration file path in the platform config directory
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("platform config directory unavailable".to_string())
        })?;
        Ok(dir.join("motionkit").join("pipeline.toml"))
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let settings: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("none").to_string(),
                )
                .into())
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from file, falling back to defaults if it is absent
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("none").to_string(),
                )
                .into())
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let order = &self.transforms.order;
        if order.is_empty() {
            return Err(ConfigError::MissingKey("transforms.order".to_string()).into());
        }

        let mut seen = HashSet::new();
        for name in order {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateTransform(name.clone()).into());
            }
        }

        // The exclusion filter wraps the chain terminal, so any order that
        // places it elsewhere would let later transforms observe suppressed
        // moves.
        if let Some(pos) = order.iter().position(|n| n == EXCLUDE_TRANSFORM) {
            if pos != order.len() - 1 {
                return Err(ConfigError::TerminalNotLast {
                    name: EXCLUDE_TRANSFORM.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
