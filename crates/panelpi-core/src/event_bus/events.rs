//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so they can be logged or replayed.

use serde::{Deserialize, Serialize};

use crate::data::{PrinterAction, PrinterStatus};

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Reports arriving from the printer controller
    Printer(PrinterEvent),
    /// User interface events
    Ui(UiEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Printer(_) => EventCategory::Printer,
            AppEvent::Ui(_) => EventCategory::Ui,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Printer(e) => e.description(),
            AppEvent::Ui(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Printer report events.
    Printer,
    /// User interface events.
    Ui,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Printer => write!(f, "Printer"),
            EventCategory::Ui => write!(f, "UI"),
        }
    }
}

/// Printer report events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrinterEvent {
    /// A new status snapshot was applied
    SnapshotReceived {
        /// Reported status
        status: PrinterStatus,
        /// Print progress in percent
        fraction_printed: f64,
    },
    /// The selected file changed
    FileChanged {
        /// Name of the new file, `None` when cleared
        file_name: Option<String>,
    },
}

impl PrinterEvent {
    pub fn description(&self) -> String {
        match self {
            PrinterEvent::SnapshotReceived {
                status,
                fraction_printed,
            } => format!("Snapshot: {} at {}%", status, fraction_printed),
            PrinterEvent::FileChanged {
                file_name: Some(name),
            } => format!("File selected: {}", name),
            PrinterEvent::FileChanged { file_name: None } => "File cleared".to_string(),
        }
    }
}

/// User interface events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiEvent {
    /// A request was sent to the printer controller
    ActionDispatched(PrinterAction),
    /// A control was activated while disabled
    ControlRejected {
        /// Control name
        control: String,
        /// Status at the time of activation
        status: PrinterStatus,
    },
}

impl UiEvent {
    pub fn description(&self) -> String {
        match self {
            UiEvent::ActionDispatched(action) => format!("Dispatched: {}", action),
            UiEvent::ControlRejected { control, status } => {
                format!("Rejected {} while {}", control, status)
            }
        }
    }
}
