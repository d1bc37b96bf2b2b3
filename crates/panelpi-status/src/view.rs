//! Status view
//!
//! Owns the state behind the status panel: the latest snapshot and file,
//! the layer memory, the slider and popup models. Printer reports come in
//! through [`StatusView::on_snapshot`] and [`StatusView::on_file`]; user
//! input goes out to the [`PrinterController`].

use crate::actions::{dispatch, PrinterController};
use crate::clock::{Clock, SystemClock};
use crate::controls::{resolve, Control, ControlPanel};
use crate::display::DisplayModel;
use crate::mapper::{present, LayerMemory, RenderContext};
use crate::popups::{PlaceholderSlider, PopupModels};
use crate::speed_factor::SpeedFactorSlider;
use panelpi_core::{
    AppEvent, EventBus, FileInfo, PrinterAction, PrinterEvent, PrinterSnapshot, Reading, UiEvent,
};
use panelpi_settings::{ClockRefresh, Config};
use std::sync::Arc;

/// The printer status panel
pub struct StatusView<C: PrinterController> {
    controller: C,
    clock: Box<dyn Clock>,
    event_bus: Option<Arc<EventBus>>,
    unknown_text: String,
    clock_refresh: ClockRefresh,
    snapshot: PrinterSnapshot,
    file: Option<FileInfo>,
    memory: LayerMemory,
    display: DisplayModel,
    controls: ControlPanel,
    speed_factor: SpeedFactorSlider,
    popups: PopupModels,
}

impl<C: PrinterController> StatusView<C> {
    /// Create a view using the system clock
    pub fn new(controller: C, config: &Config) -> Self {
        Self::with_clock(controller, config, Box::new(SystemClock))
    }

    /// Create a view with a custom clock
    pub fn with_clock(controller: C, config: &Config, clock: Box<dyn Clock>) -> Self {
        let snapshot = PrinterSnapshot::default();
        let memory = LayerMemory::new();
        let ctx = RenderContext {
            now: clock.now(),
            unknown: &config.display.unknown_text,
        };
        let (memory, display) = present(memory, &snapshot, None, &ctx);
        let speed_factor =
            SpeedFactorSlider::new(&config.speed_factor, snapshot.params.speed_factor);

        Self {
            controller,
            clock,
            event_bus: None,
            unknown_text: config.display.unknown_text.clone(),
            clock_refresh: config.clock.refresh,
            controls: ControlPanel::for_status(snapshot.status, false),
            snapshot,
            file: None,
            memory,
            display,
            speed_factor,
            popups: PopupModels::default(),
        }
    }

    /// Publish view events on `bus`
    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    /// Apply a new printer snapshot
    pub fn on_snapshot(&mut self, snapshot: PrinterSnapshot) {
        tracing::debug!(
            "Snapshot: status={} progress={}",
            snapshot.status,
            snapshot.fraction_printed
        );
        self.speed_factor.sync(snapshot.params.speed_factor);
        self.popups.sync_tool_fan(snapshot.tool_fan_percent());
        self.publish(AppEvent::Printer(PrinterEvent::SnapshotReceived {
            status: snapshot.status,
            fraction_printed: snapshot.fraction_printed,
        }));
        self.snapshot = snapshot;
        self.recompute();
    }

    /// Apply a change of the selected file
    pub fn on_file(&mut self, file: Option<FileInfo>) {
        if file == self.file {
            return;
        }
        self.publish(AppEvent::Printer(PrinterEvent::FileChanged {
            file_name: file.as_ref().map(|f| f.file_name.clone()),
        }));
        self.file = file;
        self.recompute();
    }

    /// Recompute finish-time estimates against the current time
    pub fn refresh_clock(&mut self) {
        self.recompute();
    }

    /// The configured clock refresh policy
    pub fn clock_refresh(&self) -> ClockRefresh {
        self.clock_refresh
    }

    /// Handle a button press
    ///
    /// Returns the request sent to the controller, or `None` when the control
    /// is disabled in the current state.
    pub fn activate(&mut self, control: Control) -> Option<PrinterAction> {
        match resolve(control, self.snapshot.status, self.file.as_ref()) {
            Some(action) => {
                self.send(&action);
                Some(action)
            }
            None => {
                tracing::warn!(
                    "Ignoring {} while printer is {}",
                    control,
                    self.snapshot.status
                );
                self.publish(AppEvent::Ui(UiEvent::ControlRejected {
                    control: control.to_string(),
                    status: self.snapshot.status,
                }));
                None
            }
        }
    }

    /// Handle the user moving the speed factor slider
    pub fn user_set_speed_factor(&mut self, value: f64) -> Option<PrinterAction> {
        let percent = self
            .speed_factor
            .user_changed(value, self.snapshot.params.speed_factor)?;
        let action = PrinterAction::SetSpeedFactorOverride { percent };
        self.send(&action);
        Some(action)
    }

    /// Handle the user moving a placeholder popup slider
    pub fn move_popup_slider(&mut self, slider: PlaceholderSlider, value: f64) {
        tracing::debug!("{:?} moved to {} (not wired)", slider, value);
        self.popups.move_placeholder(slider, value);
    }

    pub fn display(&self) -> &DisplayModel {
        &self.display
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    pub fn popups(&self) -> &PopupModels {
        &self.popups
    }

    pub fn speed_factor(&self) -> &SpeedFactorSlider {
        &self.speed_factor
    }

    pub fn snapshot(&self) -> &PrinterSnapshot {
        &self.snapshot
    }

    pub fn file(&self) -> Option<&FileInfo> {
        self.file.as_ref()
    }

    pub fn last_layer_time(&self) -> Reading {
        self.memory.last_layer_time()
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    fn recompute(&mut self) {
        let ctx = RenderContext {
            now: self.clock.now(),
            unknown: &self.unknown_text,
        };
        let (memory, display) = present(self.memory, &self.snapshot, self.file.as_ref(), &ctx);
        self.memory = memory;
        self.display = display;
        self.controls = ControlPanel::for_status(self.snapshot.status, self.file.is_some());
    }

    fn send(&mut self, action: &PrinterAction) {
        tracing::info!("Requesting {}", action);
        dispatch(&mut self.controller, action);
        self.publish(AppEvent::Ui(UiEvent::ActionDispatched(action.clone())));
    }

    fn publish(&self, event: AppEvent) {
        if let Some(bus) = &self.event_bus {
            bus.publish(event);
        }
    }
}

impl<C: PrinterController + std::fmt::Debug> std::fmt::Debug for StatusView<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusView")
            .field("controller", &self.controller)
            .field("status", &self.snapshot.status)
            .field("file", &self.file.as_ref().map(|f| &f.file_name))
            .field("last_layer_time", &self.memory.last_layer_time())
            .finish()
    }
}
