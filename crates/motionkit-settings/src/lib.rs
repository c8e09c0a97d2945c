//! MotionKit Settings Crate
//!
//! Handles pipeline configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{ExcludeSettings, PipelineSettings, TransformSettings, EXCLUDE_TRANSFORM};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
