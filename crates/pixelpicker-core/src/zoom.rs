use std::fmt;

use crate::consts::DEFAULT_ZOOM;

/// Display scale applied to the image's native size.
///
/// Zooming multiplies or divides by a fixed step. No bounds are enforced,
/// so zoom-in followed by the same number of zoom-outs lands back on the
/// starting value up to floating-point rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomFactor(f64);

impl ZoomFactor {
    /// Build a zoom factor. Returns `None` unless `value` is finite and positive.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn zoom_in(&mut self, step: f64) {
        self.0 *= step;
    }

    pub fn zoom_out(&mut self, step: f64) {
        self.0 /= step;
    }

    pub fn reset(&mut self) {
        self.0 = DEFAULT_ZOOM;
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

impl fmt::Display for ZoomFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}
