//! Configuration for the PanelPi status panel
//!
//! Supports JSON and TOML files, chosen by extension. Configuration is
//! organized into sections:
//! - Display (sentinel text for unknown values)
//! - Clock (when finish-time estimates are recomputed)
//! - Speed factor slider bounds
//! - Event bus sizing

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use panelpi_core::units::NOT_AVAILABLE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the default configuration file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Text shown for unknown or not applicable values
    pub unknown_text: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            unknown_text: NOT_AVAILABLE.to_string(),
        }
    }
}

/// When finish-time estimates are recomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockRefresh {
    /// Only when a new snapshot or file arrives
    #[default]
    OnSnapshot,
    /// Also periodically, every `tick_ms`
    OnTick,
}

impl std::fmt::Display for ClockRefresh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnSnapshot => write!(f, "on_snapshot"),
            Self::OnTick => write!(f, "on_tick"),
        }
    }
}

/// Clock settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSettings {
    /// Refresh policy for finish-time estimates
    pub refresh: ClockRefresh,
    /// Tick interval in milliseconds for [`ClockRefresh::OnTick`]
    pub tick_ms: u64,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            refresh: ClockRefresh::OnSnapshot,
            tick_ms: 1000,
        }
    }
}

/// Speed factor slider bounds, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedFactorSettings {
    pub min: f64,
    pub max: f64,
}

impl Default for SpeedFactorSettings {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 200.0,
        }
    }
}

/// Event bus settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBusSettings {
    /// Broadcast channel capacity
    pub channel_capacity: usize,
    /// Keep a history of recent events
    pub enable_history: bool,
}

impl Default for EventBusSettings {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            enable_history: false,
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplaySettings,
    pub clock: ClockSettings,
    pub speed_factor: SpeedFactorSettings,
    pub event_bus: EventBusSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`<config dir>/panelpi/config.toml`)
    pub fn default_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("panelpi").join(CONFIG_FILE_NAME))
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(
                "No settings at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.display.unknown_text.trim().is_empty() {
            return Err(ConfigError::EmptyValue("display.unknown_text".to_string()));
        }

        if self.clock.refresh == ClockRefresh::OnTick && self.clock.tick_ms == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "clock.tick_ms".to_string(),
                value: self.clock.tick_ms.to_string(),
            });
        }

        let bounds = &self.speed_factor;
        if !bounds.min.is_finite() || !bounds.max.is_finite() || bounds.min < 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "speed_factor".to_string(),
                value: format!("{}..{}", bounds.min, bounds.max),
            });
        }
        if bounds.min >= bounds.max {
            return Err(ConfigError::ValueOutOfRange {
                key: "speed_factor.max".to_string(),
                value: bounds.max.to_string(),
            });
        }

        if self.event_bus.channel_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "event_bus.channel_capacity".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.display.unknown_text, "n/a");
        assert_eq!(config.display.unknown_text, NOT_AVAILABLE);
        assert_eq!(config.clock.refresh, ClockRefresh::OnSnapshot);
        assert_eq!(config.speed_factor.max, 200.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::new();
        config.display.unknown_text = "  ".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyValue("display.unknown_text".to_string()))
        );

        let mut config = Config::new();
        config.clock.refresh = ClockRefresh::OnTick;
        config.clock.tick_ms = 0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.speed_factor.min = 150.0;
        config.speed_factor.max = 100.0;
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.event_bus.channel_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_tick_allowed_when_not_ticking() {
        let mut config = Config::new();
        config.clock.tick_ms = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [clock]
            refresh = "on_tick"
            "#,
        )
        .unwrap();
        assert_eq!(config.clock.refresh, ClockRefresh::OnTick);
        assert_eq!(config.clock.tick_ms, 1000);
        assert_eq!(config.display, DisplaySettings::default());
    }

    #[test]
    fn test_format_for_extension() {
        assert!(matches!(format_for(Path::new("a.json")), Ok(Format::Json)));
        assert!(matches!(format_for(Path::new("a.toml")), Ok(Format::Toml)));
        assert_eq!(
            format_for(Path::new("a.yaml")).err(),
            Some(ConfigError::UnsupportedFormat("yaml".to_string()))
        );
    }
}
