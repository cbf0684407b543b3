//! Maps viewport clicks back to pixels of the original, unscaled image.
//!
//! The transform is `orig = (click + scroll) / zoom` on each axis. The result
//! stays fractional until it has been bounds-checked; only then is it
//! truncated to a pixel index.

use crate::error::{PickerError, Result};
use crate::store::{Image, PixelColor};
use crate::viewport::{ClickPosition, ScrollOffset};
use crate::zoom::ZoomFactor;

/// Exact position in original-image coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImagePoint {
    pub x: f64,
    pub y: f64,
}

/// Result of a successful pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelInfo {
    pub x: u32,
    pub y: u32,
    pub color: PixelColor,
}

impl PixelInfo {
    /// Position rendered as `"(x, y)"`.
    pub fn position_text(&self) -> String {
        format!("({}, {})", self.x, self.y)
    }

    /// Color rendered as `"(r, g, b)"`.
    pub fn color_text(&self) -> String {
        self.color.to_string()
    }
}

pub fn viewport_to_image(
    click: ClickPosition,
    scroll: ScrollOffset,
    zoom: ZoomFactor,
) -> ImagePoint {
    ImagePoint {
        x: (click.x + scroll.x()) / zoom.value(),
        y: (click.y + scroll.y()) / zoom.value(),
    }
}

/// Truncate `point` to a pixel index if it lies in `[0, width) x [0, height)`.
pub fn pixel_index(point: ImagePoint, width: u32, height: u32) -> Option<(u32, u32)> {
    let in_x = point.x >= 0.0 && point.x < f64::from(width);
    let in_y = point.y >= 0.0 && point.y < f64::from(height);
    if in_x && in_y {
        Some((point.x as u32, point.y as u32))
    } else {
        None
    }
}

/// Resolve a click to the pixel under it.
pub fn pick(
    image: Option<&Image>,
    click: ClickPosition,
    scroll: ScrollOffset,
    zoom: ZoomFactor,
) -> Result<PixelInfo> {
    let image = image.ok_or(PickerError::NoImageLoaded)?;
    let point = viewport_to_image(click, scroll, zoom);

    let (x, y) = pixel_index(point, image.width(), image.height())
        .ok_or(PickerError::PickOutsideImage { x: point.x, y: point.y })?;
    let color = image
        .pixel_at(x, y)
        .ok_or(PickerError::PickOutsideImage { x: point.x, y: point.y })?;

    Ok(PixelInfo { x, y, color })
}
