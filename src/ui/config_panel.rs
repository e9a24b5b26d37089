use eframe::egui;

use super::app::{UiAction, UiState};
use crate::i18n::Language;

pub fn draw_config_panel(ctx: &egui::Context, ui_state: &mut UiState, actions: &mut Vec<UiAction>) {
    let strings = ui_state.strings();

    egui::TopBottomPanel::top("config").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.heading(strings.config_heading);

        egui::Grid::new("config_grid")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(strings.web_app_url_label);
                ui.add(
                    egui::TextEdit::singleline(&mut ui_state.settings.web_app_url)
                        .desired_width(f32::INFINITY),
                );
                ui.end_row();

                // Kept for reference only; events always go to the script's default calendar.
                ui.label(strings.calendar_id_label);
                ui.add(
                    egui::TextEdit::singleline(&mut ui_state.settings.calendar_id)
                        .desired_width(f32::INFINITY),
                );
                ui.end_row();

                ui.label(strings.language_label);
                egui::ComboBox::from_id_salt("language")
                    .selected_text(ui_state.settings.language.display_name())
                    .show_ui(ui, |ui| {
                        for lang in Language::ALL {
                            ui.selectable_value(&mut ui_state.settings.language, lang, lang.display_name());
                        }
                    });
                ui.end_row();
            });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(strings.save_button).clicked() {
                actions.push(UiAction::SaveSettings);
            }
            if ui.button(strings.debug_button).clicked() {
                actions.push(UiAction::ShowDebug);
            }
            if ui
                .add_enabled(!ui_state.busy, egui::Button::new(strings.test_url_button))
                .clicked()
            {
                actions.push(UiAction::ProbeUrl);
            }
            if ui.button(strings.open_log_button).clicked() {
                actions.push(UiAction::OpenLog);
            }
        });

        ui.add_space(4.0);
    });
}
