use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::ViewerConfig;
use crate::error::PickerError;
use crate::event::{Command, Event};
use crate::mapper::{self, PixelInfo};
use crate::picking::PickingMode;
use crate::store::Image;
use crate::viewport::{ClickPosition, ScrollOffset};
use crate::zoom::ZoomFactor;

/// Everything the viewer knows about what is on screen.
#[derive(Debug, Default)]
pub struct ViewerState {
    pub image: Option<Image>,
    pub path: Option<PathBuf>,
    pub zoom: ZoomFactor,
    pub scroll: ScrollOffset,
    pub picking: PickingMode,
}

impl ViewerState {
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Current display size of the image, if one is loaded.
    pub fn scaled_size(&self) -> Option<[u32; 2]> {
        self.image.as_ref().map(|img| img.scaled_size(self.zoom))
    }
}

/// Observable outcome of handling one event.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ImageLoaded {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    LoadFailed {
        path: PathBuf,
        message: String,
    },
    ZoomChanged(ZoomFactor),
    PickingArmed,
    PixelPicked(PixelInfo),
    PickOutsideImage {
        x: f64,
        y: f64,
    },
    QuitRequested,
}

/// Single dispatch point for viewer input.
///
/// Owns [`ViewerState`]; every event is applied synchronously and in order.
#[derive(Debug)]
pub struct Viewer {
    state: ViewerState,
    zoom_step: f64,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl Viewer {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            state: ViewerState::default(),
            zoom_step: config.effective_zoom_step(),
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn image(&self) -> Option<&Image> {
        self.state.image.as_ref()
    }

    pub fn handle(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::Click { x, y } => self.on_click(ClickPosition::new(x, y)),
            Event::Scroll { x, y } => {
                self.state.scroll = ScrollOffset::new(x, y);
                None
            }
            Event::Command(cmd) => self.on_command(cmd),
        }
    }

    fn on_command(&mut self, cmd: Command) -> Option<Effect> {
        match cmd {
            Command::Open(path) => Some(self.open(&path)),
            Command::ZoomIn => self.zoom_with(ZoomFactor::zoom_in),
            Command::ZoomOut => self.zoom_with(ZoomFactor::zoom_out),
            Command::PickPixel => self.arm_picking(),
            Command::Quit => Some(Effect::QuitRequested),
        }
    }

    /// Decode `path` and make it the current image. On failure the
    /// previously loaded image, if any, stays in place.
    ///
    /// The picking mode is left alone: an armed pick carries over to the
    /// new image.
    fn open(&mut self, path: &Path) -> Effect {
        match Image::open(path) {
            Ok(image) => {
                let (width, height) = (image.width(), image.height());
                info!(path = %path.display(), width, height, "image loaded");
                self.state.image = Some(image);
                self.state.path = Some(path.to_path_buf());
                self.state.zoom.reset();
                self.state.scroll = ScrollOffset::ZERO;
                Effect::ImageLoaded {
                    path: path.to_path_buf(),
                    width,
                    height,
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "image load failed");
                Effect::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        }
    }

    fn zoom_with(&mut self, apply: fn(&mut ZoomFactor, f64)) -> Option<Effect> {
        apply(&mut self.state.zoom, self.zoom_step);
        debug!(zoom = self.state.zoom.value(), "zoom changed");
        Some(Effect::ZoomChanged(self.state.zoom))
    }

    fn arm_picking(&mut self) -> Option<Effect> {
        if !self.state.has_image() {
            debug!("pick requested with no image loaded");
            return None;
        }
        self.state.picking.arm();
        Some(Effect::PickingArmed)
    }

    fn on_click(&mut self, click: ClickPosition) -> Option<Effect> {
        if !self.state.picking.take() {
            return None;
        }

        let result = mapper::pick(
            self.state.image.as_ref(),
            click,
            self.state.scroll,
            self.state.zoom,
        );
        match result {
            Ok(info) => {
                info!(x = info.x, y = info.y, color = %info.color, "pixel picked");
                Some(Effect::PixelPicked(info))
            }
            Err(PickerError::PickOutsideImage { x, y }) => {
                debug!(x, y, "pick outside image");
                Some(Effect::PickOutsideImage { x, y })
            }
            Err(e) => {
                debug!(error = %e, "pick ignored");
                None
            }
        }
    }
}
