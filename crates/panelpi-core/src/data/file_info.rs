//! Metadata for the selected print file

use serde::{Deserialize, Serialize};

/// G-code file metadata as reported by the controller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileInfo {
    /// File name on the printer's storage
    pub file_name: String,
    /// File size in bytes
    pub size: u64,
    /// Object height (mm)
    pub height: f64,
    /// First layer height (mm)
    pub first_layer_height: f64,
    /// Layer height (mm)
    pub layer_height: f64,
    /// Filament required per extruder (mm)
    pub filament: Vec<f64>,
    /// Slicer that generated the file
    pub generated_by: String,
}

impl FileInfo {
    /// Create file info with only a name set
    pub fn named(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    /// Decode file info from its JSON report
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Filament required by the first extruder
    pub fn first_extruder_filament(&self) -> Option<f64> {
        self.filament.first().copied()
    }
}
