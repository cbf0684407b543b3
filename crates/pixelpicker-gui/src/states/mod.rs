mod ui;
mod viewport;

pub use ui::{Dialog, PixelInfoWindow, UIState};
pub use viewport::ViewportState;
