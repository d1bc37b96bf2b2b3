//! Rendering-ready display values
//!
//! Every field is already formatted for its label. Unknown values hold the
//! configured sentinel text (`n/a` by default).

use serde::Serialize;

/// Print progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressDisplay {
    /// Progress bar position, `fraction_printed / 100`, not clamped
    pub fraction: f64,
    /// Progress label, e.g. `42.5%`
    pub label: String,
}

/// One remaining-time estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeLeftDisplay {
    /// Seconds remaining
    pub remaining: String,
    /// Local time of day the estimate ends, `HH:MM:SS`
    pub finishes_at: String,
}

/// Remaining-time estimates by method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesLeftDisplay {
    pub filament: TimeLeftDisplay,
    pub file: TimeLeftDisplay,
    pub layer: TimeLeftDisplay,
}

/// Elapsed durations, in seconds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationsDisplay {
    pub warm_up: String,
    pub current_layer: String,
    /// Most recent known layer time, kept after the layer changes
    pub last_layer: String,
    pub print: String,
}

/// Selected file metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileDisplay {
    pub name: String,
    pub size: String,
    pub object_height: String,
    /// `<first> / <layer> mm`
    pub layer_height: String,
    /// Filament for the first extruder only
    pub filament_usage: String,
    pub generated_by: String,
}

/// Everything the status panel shows for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayModel {
    pub progress: ProgressDisplay,
    pub times_left: TimesLeftDisplay,
    pub durations: DurationsDisplay,
    pub file: FileDisplay,
    pub babystep_offset: String,
    pub tool_fan_percent: f64,
}
