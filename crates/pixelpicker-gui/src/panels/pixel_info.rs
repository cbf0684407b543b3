use crate::states::UIState;

const FIELD_WIDTH: f32 = 240.0;

/// Draw every open "Pixel Information" window and drop the ones closed
/// this frame.
pub fn show(ctx: &egui::Context, ui_state: &mut UIState) {
    ui_state.pixel_windows.retain_mut(|window| {
        let mut keep = true;
        let response = egui::Window::new("Pixel Information")
            .id(egui::Id::new(("pixel_info", window.id)))
            .collapsible(false)
            .resizable(false)
            .default_pos(ctx.screen_rect().center())
            .show(ctx, |ui| {
                egui::Grid::new(("pixel_info_grid", window.id))
                    .num_columns(2)
                    .spacing([10.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("Position:");
                        read_only_field(ui, &window.position);
                        ui.end_row();

                        ui.label("Color:");
                        read_only_field(ui, &window.color);
                        ui.end_row();
                    });
                ui.vertical_centered(|ui| {
                    if ui.button("Close").clicked() {
                        keep = false;
                    }
                });
            });

        if window.focus {
            if let Some(resp) = response {
                ctx.move_to_top(resp.response.layer_id);
            }
            window.focus = false;
        }
        keep
    });
}

/// Selectable but not editable single-line text.
fn read_only_field(ui: &mut egui::Ui, text: &str) {
    let mut text = text;
    ui.add(egui::TextEdit::singleline(&mut text).desired_width(FIELD_WIDTH));
}
