use pixelpicker_core::consts::APP_NAME;

use crate::states::{Dialog, UIState};

const HELP_TEXT: &str = "Open an image file.\n\n\
    Plenty of useful shortcuts.\n\n\
    Ctrl+P activates pixel picking mode.\n\n\
    Clicking on a pixel in this mode gives you the co-ordinates and RGB values.\n\n\
    Happy picking.";

const ERROR_ICON: (&str, egui::Color32) = ("\u{26d4}", egui::Color32::from_rgb(220, 60, 60));
const WARNING_ICON: (&str, egui::Color32) = ("\u{26a0}", egui::Color32::from_rgb(230, 180, 40));

/// Show the open dialog, if any. Closing it clears `ui_state.dialog`.
pub fn show(ctx: &egui::Context, ui_state: &mut UIState) {
    let Some(dialog) = ui_state.dialog.as_ref() else {
        return;
    };

    let (title, icon, body) = match dialog {
        Dialog::Error(msg) => ("Error", Some(ERROR_ICON), msg.clone()),
        Dialog::Warning(msg) => ("Warning", Some(WARNING_ICON), msg.clone()),
        Dialog::Help => ("Help", None, HELP_TEXT.to_string()),
        Dialog::About => ("About", None, String::new()),
    };
    let is_about = matches!(dialog, Dialog::About);

    let mut close = false;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if is_about {
                    about_body(ui);
                } else {
                    ui.horizontal(|ui| {
                        if let Some((glyph, color)) = icon {
                            ui.label(egui::RichText::new(glyph).size(24.0).color(color));
                        }
                        ui.label(&body);
                    });
                }
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        });

    let dismissed = ctx.input_mut(|i| {
        i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)
            || i.consume_key(egui::Modifiers::NONE, egui::Key::Enter)
    });
    if close || dismissed {
        ui_state.dialog = None;
    }
}

fn about_body(ui: &mut egui::Ui) {
    ui.heading(APP_NAME);
    ui.label("A Simple Image Viewer");
    ui.add_space(8.0);
    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
}
