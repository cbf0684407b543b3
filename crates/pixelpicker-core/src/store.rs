use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageReader, RgbImage};
use tracing::debug;

use crate::consts::MIN_DISPLAY_EDGE;
use crate::error::{PickerError, Result};
use crate::zoom::ZoomFactor;

/// RGB triple of a single pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<image::Rgb<u8>> for PixelColor {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self { r, g, b }
    }
}

impl fmt::Display for PixelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A decoded image, stored as 8-bit RGB.
///
/// Immutable once built. Loading another file replaces the whole value.
#[derive(Clone, Debug)]
pub struct Image {
    pixels: RgbImage,
}

impl Image {
    /// Decode an image file. The format is sniffed from the file contents,
    /// falling back to the extension. Any alpha channel is dropped.
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        debug!(
            path = %path.display(),
            color = ?decoded.color(),
            "decoded image"
        );
        Self::from_rgb(decoded.to_rgb8())
    }

    /// Wrap an in-memory RGB buffer. Empty buffers are rejected.
    pub fn from_rgb(pixels: RgbImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(PickerError::InvalidDimensions { width, height });
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Color at `(x, y)`, or `None` outside the image.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<PixelColor> {
        self.pixels.get_pixel_checked(x, y).map(|px| PixelColor::from(*px))
    }

    /// Size of the image as displayed at `zoom`, truncated to whole pixels.
    pub fn scaled_size(&self, zoom: ZoomFactor) -> [u32; 2] {
        [
            scale_edge(self.width(), zoom.value()),
            scale_edge(self.height(), zoom.value()),
        ]
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.pixels
    }

    /// Pixel buffer whose longest edge is at most `max_side`, keeping the
    /// aspect ratio. Borrows the stored buffer when it already fits.
    ///
    /// Only for display; picks always read the full-resolution pixels.
    pub fn fit_within(&self, max_side: u32) -> Cow<'_, RgbImage> {
        let (width, height) = self.pixels.dimensions();
        let longest = width.max(height);
        let max_side = max_side.max(MIN_DISPLAY_EDGE);
        if longest <= max_side {
            return Cow::Borrowed(&self.pixels);
        }

        let new_width = shrink_edge(width, max_side, longest);
        let new_height = shrink_edge(height, max_side, longest);
        debug!(width, height, new_width, new_height, "downscaling for display");
        Cow::Owned(imageops::resize(
            &self.pixels,
            new_width,
            new_height,
            FilterType::Triangle,
        ))
    }
}

fn scale_edge(edge: u32, zoom: f64) -> u32 {
    let scaled = (f64::from(edge) * zoom) as u32;
    scaled.max(MIN_DISPLAY_EDGE)
}

/// `edge * max_side / longest` in integers, so the longest edge lands on
/// `max_side` exactly.
fn shrink_edge(edge: u32, max_side: u32, longest: u32) -> u32 {
    let shrunk = u64::from(edge) * u64::from(max_side) / u64::from(longest);
    (shrunk as u32).max(MIN_DISPLAY_EDGE)
}
