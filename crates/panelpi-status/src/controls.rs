//! Print control state machine
//!
//! Decides, from the printer's [`Activity`], which buttons are enabled, how
//! they look and which [`PrinterAction`] they request when pressed.

use panelpi_core::{Activity, FileInfo, PrinterAction, PrinterStatus};
use serde::Serialize;
use std::fmt;

/// Button styling class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Success,
    Warning,
    Danger,
}

/// Button icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonIcon {
    Play,
    Pause,
    Stop,
}

/// A user-activatable print control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    PauseResume,
    StartStop,
    BabystepUp,
    BabystepDown,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PauseResume => write!(f, "Pause/Resume"),
            Self::StartStop => write!(f, "Start/Stop"),
            Self::BabystepUp => write!(f, "Babystep Up"),
            Self::BabystepDown => write!(f, "Babystep Down"),
        }
    }
}

/// How a button should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub enabled: bool,
    pub label: &'static str,
    pub icon: ButtonIcon,
    pub style: ButtonStyle,
}

/// Rendering state of every print control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlPanel {
    pub pause_resume: ControlState,
    pub start_stop: ControlState,
    pub babystep_enabled: bool,
    pub speed_factor_enabled: bool,
    pub popups_enabled: bool,
}

impl ControlPanel {
    /// Compute the panel for a status and file selection
    pub fn for_status(status: PrinterStatus, file_selected: bool) -> Self {
        Self {
            pause_resume: pause_resume_state(status),
            start_stop: start_stop_state(status, file_selected),
            babystep_enabled: true,
            speed_factor_enabled: true,
            popups_enabled: true,
        }
    }

    /// Whether a control may currently be activated
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::PauseResume => self.pause_resume.enabled,
            Control::StartStop => self.start_stop.enabled,
            Control::BabystepUp | Control::BabystepDown => self.babystep_enabled,
        }
    }
}

const PAUSE: ControlState = ControlState {
    enabled: true,
    label: "Pause Print",
    icon: ButtonIcon::Pause,
    style: ButtonStyle::Warning,
};

const RESUME: ControlState = ControlState {
    enabled: true,
    label: "Resume Print",
    icon: ButtonIcon::Play,
    style: ButtonStyle::Success,
};

const STOP: ControlState = ControlState {
    enabled: true,
    label: "Stop Print",
    icon: ButtonIcon::Stop,
    style: ButtonStyle::Danger,
};

const START: ControlState = ControlState {
    enabled: true,
    label: "Print Another",
    icon: ButtonIcon::Play,
    style: ButtonStyle::Success,
};

/// Pause/Resume: enabled while running or paused
///
/// A running print shows the resume look and any other status the pause
/// look. The action taken on press is decided by [`resolve`].
pub fn pause_resume_state(status: PrinterStatus) -> ControlState {
    match status.activity() {
        Activity::Running => RESUME,
        Activity::Paused => PAUSE,
        Activity::Idle | Activity::Other => ControlState {
            enabled: false,
            ..PAUSE
        },
    }
}

/// Start/Stop: stop while a print is underway, start when idle with a file
pub fn start_stop_state(status: PrinterStatus, file_selected: bool) -> ControlState {
    match status.activity() {
        Activity::Running | Activity::Paused => STOP,
        Activity::Idle => ControlState {
            enabled: file_selected,
            ..START
        },
        Activity::Other => ControlState {
            enabled: false,
            ..START
        },
    }
}

/// Resolve an activated control to the request it makes
///
/// Returns `None` when the control is disabled for `status`.
pub fn resolve(
    control: Control,
    status: PrinterStatus,
    file: Option<&FileInfo>,
) -> Option<PrinterAction> {
    match control {
        Control::PauseResume => match status.activity() {
            Activity::Running => Some(PrinterAction::Pause),
            Activity::Paused => Some(PrinterAction::Resume),
            Activity::Idle | Activity::Other => None,
        },
        Control::StartStop => match status.activity() {
            Activity::Running | Activity::Paused => Some(PrinterAction::Stop),
            Activity::Idle => file.map(|f| PrinterAction::SelectFileAndPrint {
                file_name: f.file_name.clone(),
            }),
            Activity::Other => None,
        },
        Control::BabystepUp => Some(PrinterAction::BabyStep { up: true }),
        Control::BabystepDown => Some(PrinterAction::BabyStep { up: false }),
    }
}
