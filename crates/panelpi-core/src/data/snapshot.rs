//! Printer status snapshots
//!
//! A [`PrinterSnapshot`] is one point-in-time report from the controller.
//! The JSON form mirrors the controller's camelCase field names; missing
//! fields take their defaults.

use super::reading::Reading;
use super::status::PrinterStatus;
use serde::{Deserialize, Serialize};

/// Default speed factor override percentage
pub const DEFAULT_SPEED_FACTOR: f64 = 100.0;

/// Remaining time estimates, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimesLeft {
    /// Estimate based on filament consumption
    pub filament: Reading,
    /// Estimate based on file progress
    pub file: Reading,
    /// Estimate based on layer times
    pub layer: Reading,
}

/// Live print parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintParams {
    /// Current babystep offset (mm)
    pub babystep: f64,
    /// Speed factor override percentage (0-200%)
    pub speed_factor: f64,
    /// Fan speeds in percent, tool fan first
    pub fan_percent: Vec<f64>,
}

impl Default for PrintParams {
    fn default() -> Self {
        Self {
            babystep: 0.0,
            speed_factor: DEFAULT_SPEED_FACTOR,
            fan_percent: Vec::new(),
        }
    }
}

/// A single status report from the printer controller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrinterSnapshot {
    /// Reported printer status
    pub status: PrinterStatus,
    /// Print progress in percent (0-100), not validated
    pub fraction_printed: f64,
    /// Remaining time estimates, absent when not printing
    pub times_left: Option<TimesLeft>,
    /// Time spent heating up (s)
    pub warm_up_duration: Reading,
    /// Time spent on the current layer (s)
    pub current_layer_time: Reading,
    /// Total print time so far (s)
    pub print_duration: Reading,
    /// Live print parameters
    pub params: PrintParams,
}

impl PrinterSnapshot {
    /// Create an empty snapshot with the given status
    pub fn with_status(status: PrinterStatus) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    /// Decode a snapshot from its JSON report
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Tool fan percentage, zero when no fans are reported
    pub fn tool_fan_percent(&self) -> f64 {
        self.params.fan_percent.first().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_report() {
        let json = r#"{
            "status": "A",
            "fractionPrinted": 42.5,
            "timesLeft": { "filament": 600.0, "file": 0, "layer": 30.5 },
            "warmUpDuration": 95.0,
            "currentLayerTime": 12.0,
            "printDuration": 1800.0,
            "params": { "babystep": 0.05, "speedFactor": 110.0, "fanPercent": [35.0, 100.0] }
        }"#;

        let snapshot = PrinterSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.status, PrinterStatus::Active);
        assert_eq!(snapshot.fraction_printed, 42.5);

        let times = snapshot.times_left.unwrap();
        assert_eq!(times.filament, Reading::Known(600.0));
        assert_eq!(times.file, Reading::Unknown);
        assert_eq!(times.layer, Reading::Known(30.5));

        assert_eq!(snapshot.warm_up_duration, Reading::Known(95.0));
        assert_eq!(snapshot.params.speed_factor, 110.0);
        assert_eq!(snapshot.tool_fan_percent(), 35.0);
    }

    #[test]
    fn test_decode_sparse_report_uses_defaults() {
        let snapshot = PrinterSnapshot::from_json(r#"{ "status": "I" }"#).unwrap();
        assert_eq!(snapshot.status, PrinterStatus::Idle);
        assert_eq!(snapshot.times_left, None);
        assert_eq!(snapshot.current_layer_time, Reading::Unknown);
        assert_eq!(snapshot.params.speed_factor, DEFAULT_SPEED_FACTOR);
        assert_eq!(snapshot.tool_fan_percent(), 0.0);
    }

    #[test]
    fn test_decode_rejects_bad_status() {
        let err = PrinterSnapshot::from_json(r#"{ "status": "" }"#).unwrap_err();
        assert!(err.is_decode_error());
    }
}
