//! Snapshot to display mapping
//!
//! [`present`] is a pure function of the previous [`LayerMemory`], the
//! latest snapshot, the selected file and the time of day. It returns the
//! updated memory alongside the display model so callers own all state.

use crate::clock::{format_time_of_day, time_after};
use crate::display::{
    DisplayModel, DurationsDisplay, FileDisplay, ProgressDisplay, TimeLeftDisplay,
    TimesLeftDisplay,
};
use chrono::NaiveTime;
use panelpi_core::units::{format_byte_count, format_decimal, format_millimeters, format_percent};
use panelpi_core::{FileInfo, PrinterSnapshot, Reading, TimesLeft};

/// Layer timing carried across snapshots
///
/// Remembers the most recent known `current_layer_time`, so the previous
/// layer's duration stays visible once the controller resets the current one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayerMemory {
    last_layer_time: Reading,
}

impl LayerMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_layer_time(&self) -> Reading {
        self.last_layer_time
    }

    /// Fold in a new `current_layer_time` report
    pub fn observe(self, current_layer_time: Reading) -> Self {
        Self {
            last_layer_time: current_layer_time.or(self.last_layer_time),
        }
    }
}

/// Inputs that are not part of the printer report
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Local time of day used for finish-time estimates
    pub now: NaiveTime,
    /// Sentinel text for unknown values
    pub unknown: &'a str,
}

impl RenderContext<'_> {
    fn reading(&self, reading: Reading) -> String {
        match reading {
            Reading::Known(value) => format_decimal(value),
            Reading::Unknown => self.unknown.to_string(),
        }
    }

    fn finishes_at(&self, reading: Reading) -> String {
        match reading {
            Reading::Known(seconds) => format_time_of_day(time_after(self.now, seconds)),
            Reading::Unknown => self.unknown.to_string(),
        }
    }

    fn time_left(&self, reading: Reading) -> TimeLeftDisplay {
        TimeLeftDisplay {
            remaining: self.reading(reading),
            finishes_at: self.finishes_at(reading),
        }
    }

    fn file_field(&self, file: Option<&FileInfo>, render: impl FnOnce(&FileInfo) -> String) -> String {
        file.map(render).unwrap_or_else(|| self.unknown.to_string())
    }
}

/// Map a snapshot to its display model
pub fn present(
    memory: LayerMemory,
    snapshot: &PrinterSnapshot,
    file: Option<&FileInfo>,
    ctx: &RenderContext<'_>,
) -> (LayerMemory, DisplayModel) {
    let memory = memory.observe(snapshot.current_layer_time);
    let times_left = snapshot.times_left.unwrap_or_default();

    let model = DisplayModel {
        progress: ProgressDisplay {
            fraction: snapshot.fraction_printed / 100.0,
            label: format_percent(snapshot.fraction_printed),
        },
        times_left: present_times_left(&times_left, ctx),
        durations: DurationsDisplay {
            warm_up: ctx.reading(snapshot.warm_up_duration),
            current_layer: ctx.reading(snapshot.current_layer_time),
            last_layer: ctx.reading(memory.last_layer_time()),
            print: ctx.reading(snapshot.print_duration),
        },
        file: present_file(file, ctx),
        babystep_offset: format_decimal(snapshot.params.babystep),
        tool_fan_percent: snapshot.tool_fan_percent(),
    };

    (memory, model)
}

fn present_times_left(times_left: &TimesLeft, ctx: &RenderContext<'_>) -> TimesLeftDisplay {
    TimesLeftDisplay {
        filament: ctx.time_left(times_left.filament),
        file: ctx.time_left(times_left.file),
        layer: ctx.time_left(times_left.layer),
    }
}

fn present_file(file: Option<&FileInfo>, ctx: &RenderContext<'_>) -> FileDisplay {
    FileDisplay {
        name: ctx.file_field(file, |f| f.file_name.clone()),
        size: ctx.file_field(file, |f| format_byte_count(f.size)),
        object_height: ctx.file_field(file, |f| format_millimeters(f.height)),
        layer_height: ctx.file_field(file, |f| {
            format!(
                "{} / {} mm",
                format_decimal(f.first_layer_height),
                format_decimal(f.layer_height)
            )
        }),
        filament_usage: file
            .and_then(FileInfo::first_extruder_filament)
            .map(format_millimeters)
            .unwrap_or_else(|| ctx.unknown.to_string()),
        generated_by: ctx.file_field(file, |f| f.generated_by.clone()),
    }
}
