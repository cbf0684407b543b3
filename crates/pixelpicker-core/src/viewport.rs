/// Top-left corner of the visible viewport inside the scaled image.
///
/// Owned by the scrollable canvas; the core only mirrors what the canvas
/// reports. Both components stay non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset {
    x: f64,
    y: f64,
}

impl ScrollOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Negative and NaN components are stored as zero.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: non_negative(x),
            y: non_negative(y),
        }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }
}

fn non_negative(v: f64) -> f64 {
    if v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Pointer position relative to the viewport's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickPosition {
    pub x: f64,
    pub y: f64,
}

impl ClickPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
