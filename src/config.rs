//! Timetable configuration file support.
//!
//! Reads the axis shape and rendering options from TOML. Every field has
//! a default, so an empty file yields the standard 08:00-19:30 timetable.
//!
//! ```toml
//! [axis]
//! first_start = "09:00"
//! last_start = "17:30"
//! step_minutes = 30
//!
//! [render]
//! conflict_color = "#D32F2F"
//! include_weekend = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::axis::{AxisConfig, TimeAxis};
use crate::render::RenderConfig;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid time axis: {0}")]
    InvalidAxis(String),
}

/// Top-level timetable configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimetableConfig {
    #[serde(default)]
    pub axis: AxisConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl TimetableConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: TimetableConfig = toml::from_str(content)?;
        // Surface axis errors at load time rather than at first use.
        TimeAxis::new(&config.axis)?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        log::debug!("loaded timetable config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Builds the configured time axis.
    pub fn time_axis(&self) -> ConfigResult<TimeAxis> {
        TimeAxis::new(&self.axis)
    }
}

/// Serde adapter for `"HH:MM"` clock times.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}
