use pixelpicker_core::event::Event;

use crate::app::PixelPickerApp;

pub fn show(ctx: &egui::Context, app: &mut PixelPickerApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
        .show(ctx, |ui| {
            let texture_id = app.viewport.texture.as_ref().map(|t| t.id());
            let display = app.viewer.state().scaled_size();

            match (texture_id, display) {
                (Some(texture_id), Some([w, h])) => {
                    show_canvas(ctx, ui, app, texture_id, egui::vec2(w as f32, h as f32));
                }
                _ => show_placeholder(ui),
            }
        });
}

/// Scrollable canvas with the image anchored at its top-left corner.
///
/// The whole visible area senses clicks, so a click beside a small image
/// still reaches the viewer and is reported as outside the image.
fn show_canvas(
    ctx: &egui::Context,
    ui: &mut egui::Ui,
    app: &mut PixelPickerApp,
    texture_id: egui::TextureId,
    display: egui::Vec2,
) {
    let viewport_size = ui.available_size();
    let armed = app.viewer.state().picking.is_armed();

    let mut area = egui::ScrollArea::both()
        .id_salt("canvas")
        .auto_shrink([false, false]);
    if let Some(offset) = app.viewport.scroll_to.take() {
        area = area.scroll_offset(offset);
    }

    let output = area.show(ui, |ui| {
        let (rect, response) =
            ui.allocate_exact_size(display.max(viewport_size), egui::Sense::click());
        draw_image(ui, texture_id, egui::Rect::from_min_size(rect.min, display));

        if armed && response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
        if response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        }
    });

    report_scroll(ctx, app, output.state.offset);

    if let Some(pos) = output.inner {
        if !app.ui_state.is_modal_open() {
            let local = pos - output.inner_rect.min;
            app.dispatch(
                ctx,
                Event::Click {
                    x: f64::from(local.x),
                    y: f64::from(local.y),
                },
            );
        }
    }
}

/// Mirror the scroll area's offset into the viewer when it moves.
fn report_scroll(ctx: &egui::Context, app: &mut PixelPickerApp, offset: egui::Vec2) {
    let current = app.viewer.state().scroll;
    let (x, y) = (f64::from(offset.x), f64::from(offset.y));
    if current.x() != x || current.y() != y {
        app.dispatch(ctx, Event::Scroll { x, y });
    }
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin (Ctrl+O)")
                .size(18.0)
                .color(egui::Color32::from_gray(120)),
        );
    });
}
