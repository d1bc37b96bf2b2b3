//! Fan control and extrusion factor popups
//!
//! The tool fan slider mirrors the reported tool fan speed. The "Fan 0" and
//! "Extruder 0" sliders are placeholders: they move with the user but are
//! not wired to any controller request.

use serde::Serialize;

/// Slider shown in a popup
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderModel {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub value: f64,
    /// Whether user changes reach the controller
    pub wired: bool,
}

impl SliderModel {
    const fn new(label: &'static str, max: f64, value: f64) -> Self {
        Self {
            label,
            min: 0.0,
            max,
            value,
            wired: false,
        }
    }

    fn set(&mut self, value: f64) {
        if !value.is_nan() {
            self.value = value.clamp(self.min, self.max);
        }
    }
}

/// User-movable placeholder sliders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderSlider {
    Fan0,
    Extruder0,
}

/// "Fan Control" popup
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FanPopup {
    pub tool_fan: SliderModel,
    pub fan0: SliderModel,
}

/// "Extrusion Factor" popup
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtrusionPopup {
    pub extruder0: SliderModel,
}

/// Both popups
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopupModels {
    pub fan: FanPopup,
    pub extrusion: ExtrusionPopup,
}

impl Default for PopupModels {
    fn default() -> Self {
        Self {
            fan: FanPopup {
                tool_fan: SliderModel::new("Tool Fan", 100.0, 0.0),
                fan0: SliderModel::new("Fan 0", 200.0, 100.0),
            },
            extrusion: ExtrusionPopup {
                extruder0: SliderModel::new("Extruder 0", 200.0, 100.0),
            },
        }
    }
}

impl PopupModels {
    /// Follow the reported tool fan percentage
    pub fn sync_tool_fan(&mut self, percent: f64) {
        self.fan.tool_fan.set(percent);
    }

    /// Move a placeholder slider; nothing is sent to the controller
    pub fn move_placeholder(&mut self, slider: PlaceholderSlider, value: f64) {
        match slider {
            PlaceholderSlider::Fan0 => self.fan.fan0.set(value),
            PlaceholderSlider::Extruder0 => self.extrusion.extruder0.set(value),
        }
    }
}
