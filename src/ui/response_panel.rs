use eframe::egui;

use super::app::UiState;

pub fn draw_response_panel(ctx: &egui::Context, ui_state: &UiState) {
    let strings = ui_state.strings();

    egui::TopBottomPanel::bottom("response")
        .resizable(true)
        .default_height(200.0)
        .min_height(80.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(strings.response_heading);

            egui::ScrollArea::vertical()
                .id_salt("response_view")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    // Selectable but read-only.
                    let mut text = ui_state.response_text.as_str();
                    ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY),
                    );
                });
        });
}

pub fn draw_status_bar(ctx: &egui::Context, ui_state: &UiState) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui_state.busy {
                ui.spinner();
            }
            ui.label(&ui_state.status);
        });
    });
}
