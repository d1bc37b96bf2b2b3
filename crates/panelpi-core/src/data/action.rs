//! Requests the status panel sends to the printer controller

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-initiated request for the printer controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PrinterAction {
    /// Pause the running print
    Pause,
    /// Resume a paused print
    Resume,
    /// Cancel the current print
    Stop,
    /// Select a file and start printing it
    SelectFileAndPrint {
        /// File name on the printer's storage
        file_name: String,
    },
    /// Set the speed factor override (percent)
    SetSpeedFactorOverride {
        /// Override percentage
        percent: i32,
    },
    /// Adjust the babystep offset by one increment
    BabyStep {
        /// Raise the nozzle when true, lower it otherwise
        up: bool,
    },
}

impl fmt::Display for PrinterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pause => write!(f, "pause print"),
            Self::Resume => write!(f, "resume print"),
            Self::Stop => write!(f, "stop print"),
            Self::SelectFileAndPrint { file_name } => write!(f, "print {}", file_name),
            Self::SetSpeedFactorOverride { percent } => write!(f, "speed factor {}%", percent),
            Self::BabyStep { up: true } => write!(f, "babystep up"),
            Self::BabyStep { up: false } => write!(f, "babystep down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PrinterAction::Pause.to_string(), "pause print");
        assert_eq!(
            PrinterAction::SetSpeedFactorOverride { percent: 120 }.to_string(),
            "speed factor 120%"
        );
        assert_eq!(PrinterAction::BabyStep { up: false }.to_string(), "babystep down");
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&PrinterAction::SelectFileAndPrint {
            file_name: "cube.gcode".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"action":"select_file_and_print","file_name":"cube.gcode"}"#);
    }
}
