use pixelpicker_core::mapper::PixelInfo;

/// Blocking dialog. While one is open the canvas ignores clicks and
/// shortcuts are not consumed.
#[derive(Clone, Debug, PartialEq)]
pub enum Dialog {
    Error(String),
    Warning(String),
    Help,
    About,
}

/// One "Pixel Information" window. Each pick opens its own.
pub struct PixelInfoWindow {
    pub id: u64,
    pub position: String,
    pub color: String,
    /// Set on the frame the window opens so it comes to the front.
    pub focus: bool,
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub dialog: Option<Dialog>,
    pub pixel_windows: Vec<PixelInfoWindow>,
    next_window_id: u64,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_modal_open(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn open_pixel_info(&mut self, info: &PixelInfo) {
        self.next_window_id += 1;
        self.pixel_windows.push(PixelInfoWindow {
            id: self.next_window_id,
            position: info.position_text(),
            color: info.color_text(),
            focus: true,
        });
    }
}
