//! # PanelPi Core
//!
//! Core types for the PanelPi printer panel: status codes, snapshots, file
//! metadata, controller actions, observable feeds and the event bus.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod observable;
pub mod units;

pub use data::{
    Activity, FileInfo, PrintParams, PrinterAction, PrinterSnapshot, PrinterStatus, Reading,
    TimesLeft, DEFAULT_SPEED_FACTOR,
};

pub use error::{Error, Result, StatusCodeError};

pub use event_bus::{
    AppEvent, EventBus, EventBusConfig, EventCategory, EventFilter, PrinterEvent,
    SubscriptionId, UiEvent,
};

pub use observable::{Feed, FileFeed, SnapshotFeed};
