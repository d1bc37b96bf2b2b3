//! Printer data models
//!
//! Status codes, snapshots, file metadata and the actions sent back to the
//! controller.

pub mod action;
pub mod file_info;
pub mod reading;
pub mod snapshot;
pub mod status;

pub use action::PrinterAction;
pub use file_info::FileInfo;
pub use reading::Reading;
pub use snapshot::{PrintParams, PrinterSnapshot, TimesLeft, DEFAULT_SPEED_FACTOR};
pub use status::{Activity, PrinterStatus};
