//! PanelPi Settings Crate
//!
//! Handles panel configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{
    ClockRefresh, ClockSettings, Config, DisplaySettings, EventBusSettings, SpeedFactorSettings,
    CONFIG_FILE_NAME,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
