use std::path::PathBuf;

/// Menu and keyboard actions understood by the viewer.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Load the image at the given path, replacing the current one.
    Open(PathBuf),
    ZoomIn,
    ZoomOut,
    /// Arm picking mode for a single click.
    PickPixel,
    Quit,
}

/// Input delivered to [`crate::viewer::Viewer::handle`], in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Primary click at a viewport-local position.
    Click { x: f64, y: f64 },
    /// The canvas scrolled; carries the new absolute offset.
    Scroll { x: f64, y: f64 },
    Command(Command),
}

impl From<Command> for Event {
    fn from(cmd: Command) -> Self {
        Self::Command(cmd)
    }
}
