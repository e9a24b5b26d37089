use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use eframe::egui;
use tracing::{error, info, warn};

use crate::engine::diagnostics::{debug_info, DebugSnapshot};
use crate::engine::editor::{format_json, load_json_file, prepare_batch, test_template};
use crate::engine::engine::Engine;
use crate::engine::probe::{render_probe, ProbeReport, ProbeVerdict};
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::reporter::render_report;
use crate::engine::send_guard::BusyFlag;
use crate::engine::transport::{ReqwestTransport, Transport};
use crate::error::{InputError, TransportError};
use crate::i18n::{Language, Strings};
use crate::ui::config_panel::draw_config_panel;
use crate::ui::dialogs::{draw_debug_window, draw_notice, Notice, NoticeLevel};
use crate::ui::editor_panel::draw_editor_panel;
use crate::ui::response_panel::{draw_response_panel, draw_status_bar};
use crate::ui::settings::AppSettings;
use crate::ui::settings_io::{AppPaths, SettingsStore};

/* =========================
   UI State
   ========================= */

/// Button presses collected while drawing, handled after the frame's panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    SaveSettings,
    ShowDebug,
    ProbeUrl,
    OpenLog,
    InsertTemplate,
    LoadFile,
    FormatJson,
    ClearEditor,
    Send,
    CopyDebug,
}

pub struct UiState {
    pub settings: AppSettings,
    pub editor_text: String,
    pub response_text: String,
    pub status: String,
    pub busy: bool,

    pub notice: Option<Notice>,
    pub debug_text: Option<String>,
}

impl UiState {
    pub fn strings(&self) -> &'static Strings {
        self.settings.language.strings()
    }
}

/* =========================
   App
   ========================= */

pub struct SenderApp {
    ui: UiState,
    paths: AppPaths,
    store: SettingsStore,
    busy: BusyFlag,
    /// Language the window title was last set for.
    titled_for: Option<Language>,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl SenderApp {
    pub fn new(paths: AppPaths) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(paths, Box::new(transport)))
    }

    pub fn with_transport(paths: AppPaths, transport: Box<dyn Transport + Send>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::spawn(move || {
            let mut engine = Engine::new(cmd_rx, resp_tx, transport);
            engine.run();
        });

        let (store, settings, status) = match SettingsStore::open(&paths.settings_file) {
            Ok(store) => {
                let settings = store.load_settings();
                let strings = settings.language.strings();
                let status = if store.exists() {
                    strings.status_config_loaded
                } else {
                    strings.status_ready
                };
                (store, settings, status)
            }
            Err(err) => {
                error!("failed to load settings: {err}");
                let settings = AppSettings::default();
                let status = settings.language.strings().status_config_error;
                (SettingsStore::empty(&paths.settings_file), settings, status)
            }
        };

        Self {
            ui: UiState {
                settings,
                editor_text: String::new(),
                response_text: String::new(),
                status: status.to_string(),
                busy: false,
                notice: None,
                debug_text: None,
            },
            paths,
            store,
            busy: BusyFlag::new(),
            titled_for: None,
            cmd_tx,
            resp_rx,
        }
    }

    fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.ui.notice = Some(Notice::new(level, message));
    }

    fn handle_action(&mut self, action: UiAction, ctx: &egui::Context) {
        let strings = self.ui.strings();

        match action {
            UiAction::SaveSettings => match self.store.save_settings(&self.ui.settings) {
                Ok(()) => {
                    self.ui.status = strings.status_config_saved.into();
                    self.notify(NoticeLevel::Success, strings.msg_config_saved);
                }
                Err(err) => {
                    error!("failed to save settings: {err}");
                    self.notify(NoticeLevel::Error, format!("{}: {err}", strings.msg_config_save_failed));
                }
            },

            UiAction::ShowDebug => {
                let snapshot = DebugSnapshot {
                    web_app_url: &self.ui.settings.web_app_url,
                    calendar_id: &self.ui.settings.calendar_id,
                    settings_file_exists: self.store.exists(),
                    log_file_exists: self.paths.log_file.exists(),
                    editor_text: &self.ui.editor_text,
                };
                self.ui.debug_text = Some(debug_info(&snapshot, strings));
            }

            UiAction::CopyDebug => {
                if let Some(text) = self.ui.debug_text.clone() {
                    ctx.copy_text(text);
                    self.notify(NoticeLevel::Success, strings.msg_copied);
                }
            }

            UiAction::ProbeUrl => self.probe_url(),

            UiAction::OpenLog => {
                let path = &self.paths.log_file;
                if !path.exists() {
                    self.notify(NoticeLevel::Info, strings.msg_log_missing);
                } else if let Err(err) = open::that(path) {
                    warn!("failed to open log file: {err}");
                    self.notify(NoticeLevel::Error, format!("{}: {err}", strings.msg_log_open_failed));
                }
            }

            UiAction::InsertTemplate => {
                self.ui.editor_text = test_template();
            }

            UiAction::LoadFile => {
                if let Some(path) = pick_json_file(strings) {
                    self.load_file(path);
                }
            }

            UiAction::FormatJson => match format_json(&self.ui.editor_text) {
                Ok(formatted) => {
                    self.ui.editor_text = formatted;
                    self.ui.status = strings.status_formatted.into();
                }
                Err(err) => {
                    let level = match err {
                        InputError::EmptyEditor => NoticeLevel::Warning,
                        _ => NoticeLevel::Error,
                    };
                    self.notify(level, strings.describe_input_error(&err));
                }
            },

            UiAction::ClearEditor => {
                self.ui.editor_text.clear();
                self.ui.status = strings.status_cleared.into();
            }

            UiAction::Send => self.send_batch(),
        }
    }

    fn load_file(&mut self, path: PathBuf) {
        let strings = self.ui.strings();

        match load_json_file(&path) {
            Ok(content) => {
                self.ui.editor_text = content;
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.ui.status = format!("{}: {name}", strings.status_file_loaded);
            }
            Err(err) => {
                error!("failed to load {}: {err:#}", path.display());
                self.notify(NoticeLevel::Error, format!("{}: {err:#}", strings.msg_file_load_failed));
            }
        }
    }

    fn send_batch(&mut self) {
        let strings = self.ui.strings();

        let batch = match prepare_batch(&self.ui.settings.web_app_url, &self.ui.editor_text) {
            Ok(batch) => batch,
            Err(err) => {
                self.notify(NoticeLevel::Error, strings.describe_input_error(&err));
                return;
            }
        };

        self.ui.response_text.clear();
        self.ui.status = strings.status_sending.into();

        let cmd = EngineCommand::SendBatch {
            url: self.ui.settings.web_app_url.trim().to_string(),
            batch,
            guard: self.busy.acquire(),
        };
        if self.cmd_tx.send(cmd).is_err() {
            error!("engine thread is gone, batch not sent");
            self.notify(NoticeLevel::Error, strings.msg_worker_gone);
        }
    }

    fn probe_url(&mut self) {
        let strings = self.ui.strings();

        let url = self.ui.settings.web_app_url.trim().to_string();
        if url.is_empty() {
            self.notify(NoticeLevel::Error, strings.msg_url_required);
            return;
        }

        self.ui.status = strings.status_probing.into();

        let cmd = EngineCommand::Probe {
            url,
            guard: self.busy.acquire(),
        };
        if self.cmd_tx.send(cmd).is_err() {
            error!("engine thread is gone, probe not sent");
            self.notify(NoticeLevel::Error, strings.msg_worker_gone);
        }
    }

    /// The guard carried by the response is dropped only after the result is
    /// on screen, so the UI never sees an idle flag without the result.
    fn apply_response(&mut self, resp: EngineResponse) {
        let strings = self.ui.strings();

        match resp {
            EngineResponse::BatchFinished { report, guard } => {
                self.ui.response_text = render_report(&report, strings);
                self.ui.status = strings.status_send_done.into();
                drop(guard);
            }

            EngineResponse::ProbeFinished { outcome, guard } => {
                self.apply_url_check(outcome);
                drop(guard);
            }
        }
    }

    fn apply_url_check(&mut self, outcome: Result<ProbeReport, TransportError>) {
        let strings = self.ui.strings();

        match outcome {
            Ok(report) => {
                self.ui.response_text = render_probe(&report, strings);

                match report.verdict() {
                    ProbeVerdict::Reachable => {
                        self.ui.status = strings.status_probe_ok.into();
                        self.notify(NoticeLevel::Success, strings.msg_probe_reachable);
                    }
                    ProbeVerdict::ReachableWithoutGetHandler => {
                        self.ui.status = strings.status_probe_ok.into();
                        self.notify(NoticeLevel::Warning, strings.msg_probe_no_get);
                    }
                    ProbeVerdict::Failed(status) => {
                        self.ui.status = strings.status_probe_failed.into();
                        self.notify(NoticeLevel::Error, format!("{} {status}", strings.msg_probe_http_error));
                    }
                }
            }

            Err(TransportError::Connection) => {
                self.ui.status = strings.status_connection_error.into();
                self.ui.notice = Some(Notice::titled(
                    NoticeLevel::Error,
                    strings.notice_connection_error,
                    strings.msg_connection_failed,
                ));
            }

            Err(err) => {
                self.ui.status = strings.status_probe_error.into();
                self.notify(NoticeLevel::Error, format!("{}: {err}", strings.msg_probe_error));
            }
        }
    }
}

fn pick_json_file(strings: &Strings) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title(strings.file_dialog_title)
        .add_filter(strings.file_filter_json, &["json"])
        .pick_file()
}

/* =========================
   egui App
   ========================= */

impl eframe::App for SenderApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            self.apply_response(resp);
        }

        self.ui.busy = self.busy.is_busy();
        if self.ui.busy {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let language = self.ui.settings.language;
        if self.titled_for != Some(language) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(
                language.strings().window_title.to_string(),
            ));
            self.titled_for = Some(language);
        }

        let mut actions = Vec::new();

        draw_config_panel(ctx, &mut self.ui, &mut actions);
        draw_status_bar(ctx, &self.ui);
        draw_response_panel(ctx, &self.ui);
        draw_editor_panel(ctx, &mut self.ui, &mut actions);

        draw_debug_window(ctx, &mut self.ui, &mut actions);
        draw_notice(ctx, &mut self.ui);

        for action in actions {
            info!(?action, "ui action");
            self.handle_action(action, ctx);
        }
    }
}
