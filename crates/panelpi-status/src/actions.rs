//! Printer controller action sink
//!
//! Requests are fire-and-forget: the status panel neither waits for an
//! acknowledgement nor retries.

use panelpi_core::PrinterAction;
use tokio::sync::mpsc;

/// Trait for the controller that talks to the printer firmware
pub trait PrinterController {
    /// Pause the running print
    fn pause_print(&mut self);

    /// Resume a paused print
    fn resume_print(&mut self);

    /// Cancel the current print
    fn stop_print(&mut self);

    /// Select a file and start printing it
    fn select_file_and_print(&mut self, file_name: &str);

    /// Set the speed factor override percentage
    fn set_speed_factor_override(&mut self, percent: i32);

    /// Move the nozzle one babystep up or down
    fn baby_stepping(&mut self, up: bool);

    /// Set a fan speed. Not yet wired to any panel control.
    fn set_fan_percent(&mut self, _fan: usize, _percent: f64) {}

    /// Set an extrusion factor. Not yet wired to any panel control.
    fn set_extrusion_factor(&mut self, _extruder: usize, _percent: f64) {}
}

/// Forward an action to the matching controller operation
pub fn dispatch<C: PrinterController + ?Sized>(controller: &mut C, action: &PrinterAction) {
    match action {
        PrinterAction::Pause => controller.pause_print(),
        PrinterAction::Resume => controller.resume_print(),
        PrinterAction::Stop => controller.stop_print(),
        PrinterAction::SelectFileAndPrint { file_name } => {
            controller.select_file_and_print(file_name)
        }
        PrinterAction::SetSpeedFactorOverride { percent } => {
            controller.set_speed_factor_override(*percent)
        }
        PrinterAction::BabyStep { up } => controller.baby_stepping(*up),
    }
}

impl<C: PrinterController + ?Sized> PrinterController for Box<C> {
    fn pause_print(&mut self) {
        (**self).pause_print()
    }

    fn resume_print(&mut self) {
        (**self).resume_print()
    }

    fn stop_print(&mut self) {
        (**self).stop_print()
    }

    fn select_file_and_print(&mut self, file_name: &str) {
        (**self).select_file_and_print(file_name)
    }

    fn set_speed_factor_override(&mut self, percent: i32) {
        (**self).set_speed_factor_override(percent)
    }

    fn baby_stepping(&mut self, up: bool) {
        (**self).baby_stepping(up)
    }

    fn set_fan_percent(&mut self, fan: usize, percent: f64) {
        (**self).set_fan_percent(fan, percent)
    }

    fn set_extrusion_factor(&mut self, extruder: usize, percent: f64) {
        (**self).set_extrusion_factor(extruder, percent)
    }
}

/// Controller that forwards every request over a channel
///
/// The receiving end is typically the task that owns the firmware
/// connection. Requests sent after it has gone away are dropped.
#[derive(Debug, Clone)]
pub struct ChannelController {
    sender: mpsc::UnboundedSender<PrinterAction>,
}

impl ChannelController {
    pub fn new(sender: mpsc::UnboundedSender<PrinterAction>) -> Self {
        Self { sender }
    }

    /// Create a controller together with the receiving end of its channel
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<PrinterAction>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }

    fn send(&self, action: PrinterAction) {
        if let Err(err) = self.sender.send(action) {
            tracing::warn!("Dropped {}: controller channel closed", err.0);
        }
    }
}

impl PrinterController for ChannelController {
    fn pause_print(&mut self) {
        self.send(PrinterAction::Pause);
    }

    fn resume_print(&mut self) {
        self.send(PrinterAction::Resume);
    }

    fn stop_print(&mut self) {
        self.send(PrinterAction::Stop);
    }

    fn select_file_and_print(&mut self, file_name: &str) {
        self.send(PrinterAction::SelectFileAndPrint {
            file_name: file_name.to_string(),
        });
    }

    fn set_speed_factor_override(&mut self, percent: i32) {
        self.send(PrinterAction::SetSpeedFactorOverride { percent });
    }

    fn baby_stepping(&mut self, up: bool) {
        self.send(PrinterAction::BabyStep { up });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_through_channel() {
        let (mut controller, mut rx) = ChannelController::channel();
        let actions = [
            PrinterAction::Pause,
            PrinterAction::Resume,
            PrinterAction::Stop,
            PrinterAction::SelectFileAndPrint {
                file_name: "cube.gcode".to_string(),
            },
            PrinterAction::SetSpeedFactorOverride { percent: 90 },
            PrinterAction::BabyStep { up: true },
        ];
        for action in &actions {
            dispatch(&mut controller, action);
        }

        for expected in actions {
            assert_eq!(rx.try_recv().unwrap(), expected);
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_closed_channel_drops_requests() {
        let (mut controller, rx) = ChannelController::channel();
        drop(rx);
        controller.stop_print();
    }

    #[test]
    fn test_placeholder_setters_send_nothing() {
        let (mut controller, mut rx) = ChannelController::channel();
        controller.set_fan_percent(0, 50.0);
        controller.set_extrusion_factor(0, 95.0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_boxed_controller() {
        let (controller, mut rx) = ChannelController::channel();
        let mut boxed: Box<dyn PrinterController> = Box::new(controller);
        dispatch(&mut boxed, &PrinterAction::BabyStep { up: false });
        assert_eq!(rx.try_recv().unwrap(), PrinterAction::BabyStep { up: false });
    }
}
