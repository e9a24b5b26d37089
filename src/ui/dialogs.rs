use eframe::egui;

use super::app::{UiAction, UiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A blocking message for the user, dismissed with OK.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    /// Overrides the level's default title.
    pub title: Option<&'static str>,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            title: None,
            message: message.into(),
        }
    }

    pub fn titled(level: NoticeLevel, title: &'static str, message: impl Into<String>) -> Self {
        Self {
            level,
            title: Some(title),
            message: message.into(),
        }
    }
}

pub fn draw_notice(ctx: &egui::Context, ui_state: &mut UiState) {
    let strings = ui_state.strings();
    let Some(notice) = ui_state.notice.as_ref() else {
        return;
    };

    let (default_title, color) = match notice.level {
        NoticeLevel::Info => (strings.notice_info, egui::Color32::LIGHT_BLUE),
        NoticeLevel::Success => (strings.notice_success, egui::Color32::LIGHT_GREEN),
        NoticeLevel::Warning => (strings.notice_warning, egui::Color32::YELLOW),
        NoticeLevel::Error => (strings.notice_error, egui::Color32::LIGHT_RED),
    };
    let title = notice.title.unwrap_or(default_title);

    let mut dismissed = false;

    egui::Window::new(egui::RichText::new(title).color(color))
        .id(egui::Id::new("notice"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add(egui::Label::new(notice.message.as_str()).wrap());
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                if ui.button(strings.ok_button).clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        ui_state.notice = None;
    }
}

pub fn draw_debug_window(ctx: &egui::Context, ui_state: &mut UiState, actions: &mut Vec<UiAction>) {
    let strings = ui_state.strings();
    let Some(text) = ui_state.debug_text.as_ref() else {
        return;
    };

    let mut open = true;
    let mut close_clicked = false;

    egui::Window::new(strings.debug_title)
        .id(egui::Id::new("debug_info"))
        .open(&mut open)
        .default_size([500.0, 400.0])
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                ui.label(egui::RichText::new(text.as_str()).monospace());
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button(strings.copy_button).clicked() {
                    actions.push(UiAction::CopyDebug);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(strings.close_button).clicked() {
                        close_clicked = true;
                    }
                });
            });
        });

    if !open || close_clicked {
        ui_state.debug_text = None;
    }
}
