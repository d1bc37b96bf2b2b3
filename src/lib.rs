//! # PanelPi
//!
//! Status panel for Duet-controlled 3D printers.
//!
//! ## Architecture
//!
//! 1. **panelpi-core** - Printer models, observable feeds, event bus
//! 2. **panelpi-settings** - Panel configuration files
//! 3. **panelpi-status** - Status presentation and the print control state machine
//! 4. **panelpi** - Binary that replays recorded printer reports through the panel

pub mod replay;

pub use panelpi_core::{
    AppEvent, Error, EventBus, FileFeed, FileInfo, PrinterAction, PrinterSnapshot,
    PrinterStatus, Reading, Result, SnapshotFeed,
};
pub use panelpi_settings::{Config, SettingsError};
pub use panelpi_status::{
    Control, ControlPanel, DisplayModel, PrinterController, StatusView,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatting on stderr, keeping stdout free for output
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
