/// Canvas display state.
pub struct ViewportState {
    /// Current image, downscaled only if it exceeds the GPU texture limit.
    /// Always drawn at the viewer's scaled size.
    pub texture: Option<egui::TextureHandle>,
    /// Scale factor applied for display (1.0 if no downscaling).
    pub display_scale: f32,
    /// Offset to force onto the scroll area on the next frame.
    pub scroll_to: Option<egui::Vec2>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            display_scale: 1.0,
            scroll_to: None,
        }
    }
}
