//! Optional measured values
//!
//! The controller reports "unknown" as either zero or a missing field. A
//! [`Reading`] makes that explicit so that zero never reaches the display.

use serde::{Deserialize, Serialize};

/// A reported quantity that may be unknown
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Reading {
    /// A usable, non-zero value
    Known(f64),
    /// Zero, missing or not applicable
    #[default]
    Unknown,
}

impl Reading {
    /// Interpret a raw report value, treating zero, NaN and absence as unknown
    pub fn from_raw(raw: Option<f64>) -> Self {
        match raw {
            Some(value) if value != 0.0 && !value.is_nan() => Self::Known(value),
            _ => Self::Unknown,
        }
    }

    /// The value, if known
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Keep `self` when known, otherwise fall back to `previous`
    pub fn or(self, previous: Reading) -> Reading {
        match self {
            Self::Known(_) => self,
            Self::Unknown => previous,
        }
    }
}

impl From<Option<f64>> for Reading {
    fn from(raw: Option<f64>) -> Self {
        Self::from_raw(raw)
    }
}

impl From<f64> for Reading {
    fn from(raw: f64) -> Self {
        Self::from_raw(Some(raw))
    }
}

impl From<Reading> for Option<f64> {
    fn from(reading: Reading) -> Self {
        reading.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_missing_are_unknown() {
        assert_eq!(Reading::from_raw(None), Reading::Unknown);
        assert_eq!(Reading::from_raw(Some(0.0)), Reading::Unknown);
        assert_eq!(Reading::from_raw(Some(-0.0)), Reading::Unknown);
        assert_eq!(Reading::from_raw(Some(f64::NAN)), Reading::Unknown);
        assert_eq!(Reading::from_raw(Some(12.5)), Reading::Known(12.5));
    }

    #[test]
    fn test_or_prefers_known() {
        assert_eq!(Reading::Known(3.0).or(Reading::Known(1.0)), Reading::Known(3.0));
        assert_eq!(Reading::Unknown.or(Reading::Known(1.0)), Reading::Known(1.0));
        assert_eq!(Reading::Unknown.or(Reading::Unknown), Reading::Unknown);
    }

    #[test]
    fn test_serde_uses_raw_numbers() {
        let reading: Reading = serde_json::from_str("0").unwrap();
        assert_eq!(reading, Reading::Unknown);
        let reading: Reading = serde_json::from_str("null").unwrap();
        assert_eq!(reading, Reading::Unknown);
        let reading: Reading = serde_json::from_str("42.0").unwrap();
        assert_eq!(reading, Reading::Known(42.0));
        assert_eq!(serde_json::to_string(&Reading::Unknown).unwrap(), "null");
    }
}
