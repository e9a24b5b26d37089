use eframe::egui;

use super::app::{UiAction, UiState};

pub fn draw_editor_panel(ctx: &egui::Context, ui_state: &mut UiState, actions: &mut Vec<UiAction>) {
    let strings = ui_state.strings();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(strings.editor_heading);

        ui.horizontal(|ui| {
            let buttons = [
                (strings.insert_template_button, UiAction::InsertTemplate),
                (strings.load_file_button, UiAction::LoadFile),
                (strings.format_button, UiAction::FormatJson),
                (strings.clear_button, UiAction::ClearEditor),
            ];
            for (label, action) in buttons {
                if ui.button(label).clicked() {
                    actions.push(action);
                }
            }
        });

        ui.separator();

        // Leave room for the send button under the editor.
        let editor_height = (ui.available_height() - 40.0).max(120.0);
        egui::ScrollArea::both()
            .id_salt("json_editor")
            .max_height(editor_height)
            .show(ui, |ui| {
                ui.add_sized(
                    [ui.available_width(), editor_height],
                    egui::TextEdit::multiline(&mut ui_state.editor_text)
                        .code_editor()
                        .desired_rows(15),
                );
            });

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            let send = egui::Button::new(egui::RichText::new(strings.send_button).strong());
            if ui.add_enabled(!ui_state.busy, send).clicked() {
                actions.push(UiAction::Send);
            }
            if ui_state.busy {
                ui.spinner();
            }
        });
    });
}
