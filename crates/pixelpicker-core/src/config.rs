use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MIN_WINDOW_SIZE, DEFAULT_WINDOW_SIZE, DEFAULT_ZOOM_STEP};

/// Viewer settings. Every field has a default, so partial files are valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Factor applied per zoom-in / zoom-out step.
    pub zoom_step: f64,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Filters offered by the open-file dialog, in display order.
    pub file_filters: Vec<FileFilter>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
            window_size: DEFAULT_WINDOW_SIZE,
            min_window_size: DEFAULT_MIN_WINDOW_SIZE,
            file_filters: FileFilter::defaults(),
        }
    }
}

impl ViewerConfig {
    /// Zoom step to actually use. Steps that would not change the zoom, or
    /// would flip it, fall back to the default.
    pub fn effective_zoom_step(&self) -> f64 {
        if self.zoom_step.is_finite() && self.zoom_step > 1.0 {
            self.zoom_step
        } else {
            DEFAULT_ZOOM_STEP
        }
    }
}

/// Named group of file extensions for the open dialog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileFilter {
    pub name: String,
    /// Extensions without the leading dot. `"*"` matches everything.
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: &str, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("All Files", &["*"]),
            Self::new("JPG Files", &["jpg"]),
            Self::new("JPEG Files", &["jpeg"]),
            Self::new("PNG Files", &["png"]),
            Self::new("BMP Files", &["bmp"]),
            Self::new("GIF Files", &["gif"]),
        ]
    }
}
