//! Speed factor override slider
//!
//! The slider follows the controller's reported speed factor and also lets
//! the user change it. The two update paths are kept apart so that syncing
//! from a snapshot never sends the value back to the printer.

use panelpi_settings::SpeedFactorSettings;
use serde::Serialize;

/// Speed factor slider model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeedFactorSlider {
    value: f64,
    min: f64,
    max: f64,
}

impl SpeedFactorSlider {
    pub fn new(settings: &SpeedFactorSettings, initial: f64) -> Self {
        let mut slider = Self {
            value: initial,
            min: settings.min,
            max: settings.max,
        };
        slider.sync(initial);
        slider
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Follow a value reported by the controller. Never dispatches.
    pub fn sync(&mut self, reported: f64) {
        self.value = self.clamp(reported);
    }

    /// Apply a user drag and decide whether to request an override
    ///
    /// Returns the rounded percentage to send when it differs from the
    /// rounded `reported` speed factor.
    pub fn user_changed(&mut self, value: f64, reported: f64) -> Option<i32> {
        if value.is_nan() {
            return None;
        }
        self.value = self.clamp(value);
        let requested = self.value.round() as i32;
        (requested != reported.round() as i32).then_some(requested)
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.value;
        }
        value.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider(initial: f64) -> SpeedFactorSlider {
        SpeedFactorSlider::new(&SpeedFactorSettings::default(), initial)
    }

    #[test]
    fn test_user_change_dispatches_when_rounded_value_differs() {
        let mut s = slider(100.0);
        assert_eq!(s.user_changed(120.4, 100.0), Some(120));
        assert_eq!(s.value(), 120.4);
    }

    #[test]
    fn test_user_change_suppressed_when_rounded_value_matches() {
        let mut s = slider(100.0);
        assert_eq!(s.user_changed(100.3, 100.0), None);
        assert_eq!(s.user_changed(99.6, 100.2), None);
    }

    #[test]
    fn test_sync_never_dispatches() {
        let mut s = slider(100.0);
        s.sync(150.0);
        assert_eq!(s.value(), 150.0);
        // The user releasing the slider where the sync left it sends nothing
        assert_eq!(s.user_changed(150.0, 150.0), None);
    }

    #[test]
    fn test_values_are_clamped() {
        let mut s = slider(100.0);
        assert_eq!(s.user_changed(500.0, 100.0), Some(200));
        s.sync(-20.0);
        assert_eq!(s.value(), 0.0);
        assert_eq!(s.range(), (0.0, 200.0));
    }

    #[test]
    fn test_nan_is_ignored() {
        let mut s = slider(110.0);
        assert_eq!(s.user_changed(f64::NAN, 100.0), None);
        s.sync(f64::NAN);
        assert_eq!(s.value(), 110.0);
    }
}
