/// Application name used for window titles and the About dialog.
pub const APP_NAME: &str = "PixelPicker";

/// Multiplier applied on zoom-in and divisor applied on zoom-out.
pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

/// Zoom factor of a freshly loaded image.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Initial inner size of the main window in logical points.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1024.0, 576.0];

/// Smallest inner size the main window can be resized to.
pub const DEFAULT_MIN_WINDOW_SIZE: [f32; 2] = [320.0, 240.0];

/// Smallest edge, in pixels, of the displayed image. Keeps repeated
/// zoom-out from producing an empty texture.
pub const MIN_DISPLAY_EDGE: u32 = 1;
