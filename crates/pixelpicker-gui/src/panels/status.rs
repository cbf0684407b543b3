use crate::app::PixelPickerApp;

pub fn show(ctx: &egui::Context, app: &mut PixelPickerApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space so the layout does not jump on the first message.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        let state = app.viewer.state();
        ui.horizontal(|ui| {
            if let Some(ref image) = state.image {
                ui.label(format!("{}x{}", image.width(), image.height()));
                ui.separator();
            }
            ui.label(format!("Zoom: {}", state.zoom));
            if app.viewport.display_scale < 1.0 {
                ui.label(format!("(display {:.0}%)", app.viewport.display_scale * 100.0));
            }
            ui.separator();
            ui.label(format!("Mode: {}", state.picking));
            if let Some(ref path) = state.path {
                ui.separator();
                ui.label(path.display().to_string());
            }
        });

        ui.add_space(2.0);
    });
}
