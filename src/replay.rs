//! Replay recorded printer reports through the status panel
//!
//! Input is one JSON snapshot per line. Each applied snapshot produces one
//! JSON frame on the output with the display model and control states.
//! Lines that fail to decode are logged and skipped.

use panelpi_core::{Error, FileInfo, PrinterSnapshot, PrinterStatus, Result};
use panelpi_core::{EventBus, EventBusConfig, EventFilter};
use panelpi_settings::Config;
use panelpi_status::{Clock, ControlPanel, DisplayModel, PrinterController, StatusView};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Controller that only logs requests
///
/// Replays have no printer attached, so requests go to the log.
#[derive(Debug, Default)]
pub struct LoggingController;

impl PrinterController for LoggingController {
    fn pause_print(&mut self) {
        tracing::info!("Pause print");
    }

    fn resume_print(&mut self) {
        tracing::info!("Resume print");
    }

    fn stop_print(&mut self) {
        tracing::info!("Stop print");
    }

    fn select_file_and_print(&mut self, file_name: &str) {
        tracing::info!("Print {}", file_name);
    }

    fn set_speed_factor_override(&mut self, percent: i32) {
        tracing::info!("Speed factor override {}%", percent);
    }

    fn baby_stepping(&mut self, up: bool) {
        tracing::info!("Babystep {}", if up { "up" } else { "down" });
    }
}

#[derive(Serialize)]
struct Frame<'a> {
    status: PrinterStatus,
    display: &'a DisplayModel,
    controls: &'a ControlPanel,
}

/// Outcome of a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    /// Snapshots applied
    pub applied: usize,
    /// Lines that could not be decoded
    pub skipped: usize,
}

fn event_bus_for(config: &Config) -> Arc<EventBus> {
    let bus = EventBus::with_config(EventBusConfig {
        channel_capacity: config.event_bus.channel_capacity,
        enable_history: config.event_bus.enable_history,
        ..Default::default()
    });
    bus.subscribe(EventFilter::All, |event| {
        tracing::debug!("{}", event.description());
    });
    Arc::new(bus)
}

/// Replay every snapshot in `input`, writing one frame per snapshot to `out`
pub fn replay_snapshots<R, W>(
    input: R,
    file: Option<FileInfo>,
    config: &Config,
    clock: Box<dyn Clock>,
    mut out: W,
) -> Result<ReplaySummary>
where
    R: BufRead,
    W: Write,
{
    let mut view = StatusView::with_clock(LoggingController, config, clock)
        .with_event_bus(event_bus_for(config));
    view.on_file(file);

    let mut summary = ReplaySummary::default();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let snapshot = match PrinterSnapshot::from_json(&line) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("Skipping line {}: {}", index + 1, err);
                summary.skipped += 1;
                continue;
            }
        };

        view.on_snapshot(snapshot);
        let frame = Frame {
            status: view.snapshot().status,
            display: view.display(),
            controls: view.controls(),
        };
        let encoded = serde_json::to_string(&frame)
            .map_err(|e| Error::other(format!("Failed to encode frame: {}", e)))?;
        writeln!(out, "{}", encoded)?;
        summary.applied += 1;
    }

    out.flush()?;
    Ok(summary)
}
