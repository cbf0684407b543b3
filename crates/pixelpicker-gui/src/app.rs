use std::path::Path;

use pixelpicker_core::config::ViewerConfig;
use pixelpicker_core::consts::APP_NAME;
use pixelpicker_core::event::{Command, Event};
use pixelpicker_core::viewer::{Effect, Viewer};

use crate::actions::{self, Action};
use crate::convert::image_to_color_image;
use crate::panels;
use crate::states::{Dialog, UIState, ViewportState};

pub struct PixelPickerApp {
    pub viewer: Viewer,
    pub config: ViewerConfig,
    pub ui_state: UIState,
    pub viewport: ViewportState,
}

impl PixelPickerApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            viewer: Viewer::new(&config),
            config,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
        }
    }

    /// Run a menu or shortcut action.
    pub fn perform(&mut self, ctx: &egui::Context, action: Action) {
        match action {
            Action::Open => {
                if let Some(path) = self.pick_file() {
                    self.dispatch(ctx, Command::Open(path).into());
                }
            }
            Action::Quit => self.dispatch(ctx, Command::Quit.into()),
            Action::ZoomIn => self.dispatch(ctx, Command::ZoomIn.into()),
            Action::ZoomOut => self.dispatch(ctx, Command::ZoomOut.into()),
            Action::PickPixel => self.dispatch(ctx, Command::PickPixel.into()),
            Action::ViewHelp => self.ui_state.dialog = Some(Dialog::Help),
            Action::About => self.ui_state.dialog = Some(Dialog::About),
        }
    }

    /// Feed one event to the viewer and render whatever it produced.
    pub fn dispatch(&mut self, ctx: &egui::Context, event: Event) {
        if let Some(effect) = self.viewer.handle(event) {
            self.apply_effect(ctx, effect);
        }
    }

    fn pick_file(&self) -> Option<std::path::PathBuf> {
        self.config
            .file_filters
            .iter()
            .fold(rfd::FileDialog::new(), |dialog, filter| {
                dialog.add_filter(filter.name.as_str(), filter.extensions.as_slice())
            })
            .pick_file()
    }

    fn apply_effect(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::ImageLoaded {
                path,
                width,
                height,
            } => {
                self.update_viewport_texture(ctx);
                self.viewport.scroll_to = Some(egui::Vec2::ZERO);
                self.ui_state
                    .add_log(format!("Opened: {} ({width}x{height})", path.display()));
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(window_title(&path)));
            }
            Effect::LoadFailed { path, message } => {
                self.ui_state
                    .add_log(format!("ERROR: {}: {message}", path.display()));
                self.ui_state.dialog =
                    Some(Dialog::Error(format!("Unable to load image: {message}")));
            }
            Effect::ZoomChanged(_) => {}
            Effect::PickingArmed => {
                self.ui_state
                    .add_log("Click a pixel to read its position and color".into());
            }
            Effect::PixelPicked(info) => {
                self.ui_state.add_log(format!(
                    "Picked {} = {}",
                    info.position_text(),
                    info.color_text()
                ));
                self.ui_state.open_pixel_info(&info);
            }
            Effect::PickOutsideImage { .. } => {
                self.ui_state.dialog =
                    Some(Dialog::Warning("Clicked outside the image area!".into()));
            }
            Effect::QuitRequested => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn update_viewport_texture(&mut self, ctx: &egui::Context) {
        let Some(image) = self.viewer.image() else {
            return;
        };
        let max_side = ctx.input(|i| i.max_texture_side);
        let (color_image, display_scale) = image_to_color_image(image, max_side);
        if display_scale < 1.0 {
            tracing::info!(max_side, display_scale, "image exceeds texture limit");
            self.ui_state.add_log(format!(
                "Display downscaled to {:.0}% to fit the GPU texture limit",
                display_scale * 100.0
            ));
        }
        let texture = ctx.load_texture("viewport", color_image, egui::TextureOptions::NEAREST);
        self.viewport.texture = Some(texture);
        self.viewport.display_scale = display_scale;
    }
}

impl eframe::App for PixelPickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.ui_state.is_modal_open() {
            if let Some(action) = actions::consume_shortcut(ctx) {
                self.perform(ctx, action);
            }
        }

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::pixel_info::show(ctx, &mut self.ui_state);
        panels::dialogs::show(ctx, &mut self.ui_state);
    }
}

fn window_title(path: &Path) -> String {
    match path.file_name() {
        Some(name) => format!("{APP_NAME} - {}", name.to_string_lossy()),
        None => APP_NAME.to_string(),
    }
}
