use crate::actions::Action;
use crate::app::PixelPickerApp;

pub fn show(ctx: &egui::Context, app: &mut PixelPickerApp) {
    let mut chosen = None;
    let has_image = app.viewer.state().has_image();
    let modal = app.ui_state.is_modal_open();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        ui.add_enabled_ui(!modal, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    menu_item(ui, ctx, Action::Open, true, &mut chosen);
                    ui.separator();
                    menu_item(ui, ctx, Action::Quit, true, &mut chosen);
                });

                ui.menu_button("View", |ui| {
                    menu_item(ui, ctx, Action::ZoomIn, true, &mut chosen);
                    menu_item(ui, ctx, Action::ZoomOut, true, &mut chosen);
                });

                ui.menu_button("Details", |ui| {
                    menu_item(ui, ctx, Action::PickPixel, has_image, &mut chosen);
                });

                ui.menu_button("Help", |ui| {
                    menu_item(ui, ctx, Action::ViewHelp, true, &mut chosen);
                    ui.separator();
                    menu_item(ui, ctx, Action::About, true, &mut chosen);
                });
            });
        });
    });

    if let Some(action) = chosen {
        app.perform(ctx, action);
    }
}

fn menu_item(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    action: Action,
    enabled: bool,
    chosen: &mut Option<Action>,
) {
    let mut button = egui::Button::new(action.label());
    if let Some(shortcut) = action.shortcut() {
        button = button.shortcut_text(ctx.format_shortcut(&shortcut));
    }
    if ui.add_enabled(enabled, button).clicked() {
        ui.close();
        *chosen = Some(action);
    }
}
