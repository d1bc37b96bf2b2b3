//! Printer status codes
//!
//! Duet firmware reports its state as a single letter. Only idle, printing,
//! simulating and paused carry special meaning for the status panel; every
//! other code shares one default behavior, see [`Activity::Other`].

use crate::error::StatusCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Printer status as reported by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PrinterStatus {
    /// `I`: idle, ready to start a print
    Idle,
    /// `A`: actively printing
    Active,
    /// `S`: simulating a print
    Simulating,
    /// `P`: print paused
    Paused,
    /// `O`: powered off, or no report received yet
    #[default]
    Off,
    /// `C`: reading configuration
    Configuring,
    /// `B`: busy executing a macro
    Busy,
    /// `D`: pause in progress
    Pausing,
    /// `R`: resume in progress
    Resuming,
    /// `H`: halted
    Halted,
    /// `F`: flashing firmware
    Flashing,
    /// `T`: changing tool
    ChangingTool,
    /// Any code not listed above
    Unknown(char),
}

/// How the status panel treats a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    /// A print (or simulation) is running
    Running,
    /// A print is paused
    Paused,
    /// Nothing is running and a new print may start
    Idle,
    /// Everything else, all print controls disabled
    Other,
}

impl PrinterStatus {
    /// The single-letter code for this status
    pub fn code(&self) -> char {
        match self {
            Self::Idle => 'I',
            Self::Active => 'A',
            Self::Simulating => 'S',
            Self::Paused => 'P',
            Self::Off => 'O',
            Self::Configuring => 'C',
            Self::Busy => 'B',
            Self::Pausing => 'D',
            Self::Resuming => 'R',
            Self::Halted => 'H',
            Self::Flashing => 'F',
            Self::ChangingTool => 'T',
            Self::Unknown(c) => *c,
        }
    }

    /// Decode a single-letter status code
    pub fn from_code(code: char) -> Self {
        match code {
            'I' => Self::Idle,
            'A' => Self::Active,
            'S' => Self::Simulating,
            'P' => Self::Paused,
            'O' => Self::Off,
            'C' => Self::Configuring,
            'B' => Self::Busy,
            'D' => Self::Pausing,
            'R' => Self::Resuming,
            'H' => Self::Halted,
            'F' => Self::Flashing,
            'T' => Self::ChangingTool,
            other => Self::Unknown(other),
        }
    }

    /// Classify this status for the print controls
    pub fn activity(&self) -> Activity {
        match self {
            Self::Active | Self::Simulating => Activity::Running,
            Self::Paused => Activity::Paused,
            Self::Idle => Activity::Idle,
            Self::Off
            | Self::Configuring
            | Self::Busy
            | Self::Pausing
            | Self::Resuming
            | Self::Halted
            | Self::Flashing
            | Self::ChangingTool
            | Self::Unknown(_) => Activity::Other,
        }
    }

    /// True while a print is running or paused
    pub fn is_printing(&self) -> bool {
        matches!(self.activity(), Activity::Running | Activity::Paused)
    }
}

impl fmt::Display for PrinterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Active => write!(f, "Printing"),
            Self::Simulating => write!(f, "Simulating"),
            Self::Paused => write!(f, "Paused"),
            Self::Off => write!(f, "Off"),
            Self::Configuring => write!(f, "Configuring"),
            Self::Busy => write!(f, "Busy"),
            Self::Pausing => write!(f, "Pausing"),
            Self::Resuming => write!(f, "Resuming"),
            Self::Halted => write!(f, "Halted"),
            Self::Flashing => write!(f, "Flashing"),
            Self::ChangingTool => write!(f, "Changing Tool"),
            Self::Unknown(c) => write!(f, "Unknown ({})", c),
        }
    }
}

impl FromStr for PrinterStatus {
    type Err = StatusCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(StatusCodeError::Empty),
            (Some(c), None) => Ok(Self::from_code(c.to_ascii_uppercase())),
            (Some(_), Some(_)) => Err(StatusCodeError::TooLong {
                code: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for PrinterStatus {
    type Error = StatusCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PrinterStatus> for String {
    fn from(status: PrinterStatus) -> Self {
        status.code().to_string()
    }
}
