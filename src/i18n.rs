use serde::{Deserialize, Serialize};

use crate::error::{InputError, NormalizeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Portuguese,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Portuguese];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Portuguese => "pt",
        }
    }

    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "pt" | "pt-pt" | "pt_pt" => Language::Portuguese,
            _ => Language::English,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Portuguese => "Português",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::English => &ENGLISH,
            Language::Portuguese => &PORTUGUESE,
        }
    }
}

/// Every user-facing label. One table per language.
pub struct Strings {
    pub window_title: &'static str,

    // Configuration section
    pub config_heading: &'static str,
    pub web_app_url_label: &'static str,
    pub calendar_id_label: &'static str,
    pub language_label: &'static str,
    pub save_button: &'static str,
    pub debug_button: &'static str,
    pub test_url_button: &'static str,
    pub open_log_button: &'static str,

    // Editor section
    pub editor_heading: &'static str,
    pub insert_template_button: &'static str,
    pub load_file_button: &'static str,
    pub format_button: &'static str,
    pub clear_button: &'static str,
    pub send_button: &'static str,
    pub file_dialog_title: &'static str,
    pub file_filter_json: &'static str,

    pub response_heading: &'static str,

    // Status bar
    pub status_ready: &'static str,
    pub status_config_loaded: &'static str,
    pub status_config_saved: &'static str,
    pub status_config_error: &'static str,
    pub status_sending: &'static str,
    pub status_send_done: &'static str,
    pub status_formatted: &'static str,
    pub status_cleared: &'static str,
    pub status_file_loaded: &'static str,
    pub status_probing: &'static str,
    pub status_probe_ok: &'static str,
    pub status_probe_failed: &'static str,
    pub status_connection_error: &'static str,
    pub status_probe_error: &'static str,

    // Notices
    pub notice_info: &'static str,
    pub notice_success: &'static str,
    pub notice_warning: &'static str,
    pub notice_error: &'static str,
    pub notice_connection_error: &'static str,
    pub ok_button: &'static str,

    pub msg_config_saved: &'static str,
    pub msg_config_save_failed: &'static str,
    pub msg_url_required: &'static str,
    pub msg_editor_empty: &'static str,
    pub msg_invalid_json: &'static str,
    pub msg_prepare_failed: &'static str,
    pub msg_empty_batch: &'static str,
    pub msg_invalid_events_field: &'static str,
    pub msg_unsupported_shape: &'static str,
    pub msg_probe_reachable: &'static str,
    pub msg_probe_no_get: &'static str,
    pub msg_probe_http_error: &'static str,
    pub msg_connection_failed: &'static str,
    pub msg_probe_error: &'static str,
    pub msg_file_load_failed: &'static str,
    pub msg_log_missing: &'static str,
    pub msg_log_open_failed: &'static str,
    pub msg_copied: &'static str,
    pub msg_worker_gone: &'static str,

    // Batch report
    pub report_total: &'static str,
    pub report_success: &'static str,
    pub report_failures: &'static str,
    pub report_details: &'static str,
    pub report_event: &'static str,
    pub report_ok: &'static str,
    pub report_failed: &'static str,

    // Probe output
    pub probe_title: &'static str,
    pub probe_headers: &'static str,
    pub probe_body: &'static str,

    // Debug window
    pub debug_title: &'static str,
    pub debug_heading: &'static str,
    pub debug_current_config: &'static str,
    pub debug_not_configured: &'static str,
    pub debug_files: &'static str,
    pub debug_settings_exists: &'static str,
    pub debug_log_exists: &'static str,
    pub debug_yes: &'static str,
    pub debug_no: &'static str,
    pub debug_editor: &'static str,
    pub debug_content: &'static str,
    pub debug_empty: &'static str,
    pub debug_present: &'static str,
    pub debug_size: &'static str,
    pub debug_characters: &'static str,
    pub debug_tips_heading: &'static str,
    pub debug_tips: &'static [&'static str],
    pub copy_button: &'static str,
    pub close_button: &'static str,
}

impl Strings {
    pub fn describe_input_error(&self, err: &InputError) -> String {
        match err {
            InputError::MissingUrl => self.msg_url_required.to_string(),
            InputError::EmptyEditor => self.msg_editor_empty.to_string(),
            InputError::InvalidJson(detail) => format!("{}: {detail}", self.msg_invalid_json),
            InputError::Normalize(inner) => {
                let reason = match inner {
                    NormalizeError::EmptyBatch => self.msg_empty_batch,
                    NormalizeError::InvalidEventsField => self.msg_invalid_events_field,
                    NormalizeError::UnsupportedShape => self.msg_unsupported_shape,
                };
                format!("{}: {reason}", self.msg_prepare_failed)
            }
        }
    }
}

pub static ENGLISH: Strings = Strings {
    window_title: "Calendar - Send Events",

    config_heading: "Configuration",
    web_app_url_label: "Web App URL:",
    calendar_id_label: "Calendar ID (optional):",
    language_label: "Language:",
    save_button: "Save settings",
    debug_button: "🔧 Debug",
    test_url_button: "🌐 Test URL",
    open_log_button: "📄 Open log",

    editor_heading: "JSON Editor",
    insert_template_button: "Insert test template",
    load_file_button: "Load JSON from file…",
    format_button: "Format JSON",
    clear_button: "Clear",
    send_button: "Send to Web App",
    file_dialog_title: "Select JSON file",
    file_filter_json: "JSON files",

    response_heading: "Response",

    status_ready: "Ready",
    status_config_loaded: "Settings loaded",
    status_config_saved: "Settings saved",
    status_config_error: "Error loading settings",
    status_sending: "Sending events...",
    status_send_done: "Send complete",
    status_formatted: "JSON formatted successfully",
    status_cleared: "Editor cleared",
    status_file_loaded: "File loaded",
    status_probing: "Testing Web App...",
    status_probe_ok: "✅ Web App reachable",
    status_probe_failed: "❌ Web App has problems",
    status_connection_error: "❌ Connection error",
    status_probe_error: "❌ Test error",

    notice_info: "Info",
    notice_success: "Success",
    notice_warning: "Warning",
    notice_error: "Error",
    notice_connection_error: "Connection error",
    ok_button: "OK",

    msg_config_saved: "Settings saved successfully!",
    msg_config_save_failed: "Error saving settings",
    msg_url_required: "Web App URL is required",
    msg_editor_empty: "JSON editor is empty",
    msg_invalid_json: "Invalid JSON",
    msg_prepare_failed: "Error preparing events",
    msg_empty_batch: "the event list is empty",
    msg_invalid_events_field: "'events' must be a list with at least one event",
    msg_unsupported_shape: "JSON must be an object or a list of events",
    msg_probe_reachable: "Web App is reachable!",
    msg_probe_no_get: "Web App responds, but has no doGet() function.\n\
                       This is normal - the Web App only accepts POST requests.",
    msg_probe_http_error: "Web App returned HTTP",
    msg_connection_failed: "Could not connect to the Web App. Check the URL.",
    msg_probe_error: "Test error",
    msg_file_load_failed: "Error loading file",
    msg_log_missing: "Log file not found.",
    msg_log_open_failed: "Could not open the log file",
    msg_copied: "Debug info copied to clipboard!",
    msg_worker_gone: "The background worker stopped; restart the application.",

    report_total: "Total events",
    report_success: "Success",
    report_failures: "Failures",
    report_details: "Details per event:",
    report_event: "Event",
    report_ok: "OK",
    report_failed: "FAILED",

    probe_title: "GET Request Result:",
    probe_headers: "Headers:",
    probe_body: "Body:",

    debug_title: "Debug information",
    debug_heading: "🔧 DEBUG INFORMATION",
    debug_current_config: "Current configuration:",
    debug_not_configured: "[NOT CONFIGURED]",
    debug_files: "Files:",
    debug_settings_exists: "settings file exists",
    debug_log_exists: "log file exists",
    debug_yes: "YES",
    debug_no: "NO",
    debug_editor: "JSON in editor:",
    debug_content: "Content",
    debug_empty: "[EMPTY]",
    debug_present: "[PRESENT]",
    debug_size: "Size",
    debug_characters: "characters",
    debug_tips_heading: "Tips:",
    debug_tips: &[
        "Make sure the Web App is deployed with access \"Anyone\"",
        "Open the URL directly in a browser",
        "Check the log file for details",
        "The script needs no authentication - it only receives JSON",
    ],
    copy_button: "Copy info",
    close_button: "Close",
};

pub static PORTUGUESE: Strings = Strings {
    window_title: "Google Calendar - Enviar Eventos",

    config_heading: "Configuração",
    web_app_url_label: "Web App URL:",
    calendar_id_label: "Calendar ID (opcional):",
    language_label: "Idioma:",
    save_button: "Guardar configuração",
    debug_button: "🔧 Debug",
    test_url_button: "🌐 Test URL",
    open_log_button: "📄 Abrir log",

    editor_heading: "Editor de JSON",
    insert_template_button: "Inserir Template teste",
    load_file_button: "Carregar JSON de ficheiro…",
    format_button: "Formatar JSON",
    clear_button: "Limpar",
    send_button: "Enviar para Web App",
    file_dialog_title: "Selecionar ficheiro JSON",
    file_filter_json: "Ficheiros JSON",

    response_heading: "Resposta",

    status_ready: "Pronto",
    status_config_loaded: "Configuração carregada",
    status_config_saved: "Configuração guardada",
    status_config_error: "Erro ao carregar configuração",
    status_sending: "A enviar eventos...",
    status_send_done: "Envio concluído",
    status_formatted: "JSON formatado com sucesso",
    status_cleared: "Editor limpo",
    status_file_loaded: "Ficheiro carregado",
    status_probing: "A testar Web App...",
    status_probe_ok: "✅ Web App acessível",
    status_probe_failed: "❌ Web App com problemas",
    status_connection_error: "❌ Erro de ligação",
    status_probe_error: "❌ Erro no teste",

    notice_info: "Info",
    notice_success: "Sucesso",
    notice_warning: "Aviso",
    notice_error: "Erro",
    notice_connection_error: "Erro de Ligação",
    ok_button: "OK",

    msg_config_saved: "Configuração guardada com sucesso!",
    msg_config_save_failed: "Erro ao guardar configuração",
    msg_url_required: "Web App URL é obrigatório",
    msg_editor_empty: "Editor de JSON está vazio",
    msg_invalid_json: "JSON inválido",
    msg_prepare_failed: "Erro ao preparar eventos",
    msg_empty_batch: "a lista de eventos está vazia",
    msg_invalid_events_field: "'events' deve ser uma lista com pelo menos um evento",
    msg_unsupported_shape: "JSON deve ser um objeto ou uma lista de eventos",
    msg_probe_reachable: "Web App está acessível!",
    msg_probe_no_get: "Web App responde, mas não tem função doGet().\n\
                       Isto é normal - o Web App só aceita POST requests.",
    msg_probe_http_error: "Web App retornou HTTP",
    msg_connection_failed: "Não foi possível conectar ao Web App. Verifique o URL.",
    msg_probe_error: "Erro no teste",
    msg_file_load_failed: "Erro ao carregar ficheiro",
    msg_log_missing: "Ficheiro de log não encontrado.",
    msg_log_open_failed: "Não foi possível abrir o ficheiro de log",
    msg_copied: "Informações de debug copiadas para a área de transferência!",
    msg_worker_gone: "O processo de envio parou; reinicie a aplicação.",

    report_total: "Total de eventos",
    report_success: "Sucesso",
    report_failures: "Falhas",
    report_details: "Detalhes por evento:",
    report_event: "Evento",
    report_ok: "OK",
    report_failed: "FALHA",

    probe_title: "GET Request Result:",
    probe_headers: "Headers:",
    probe_body: "Body:",

    debug_title: "Informações de Debug",
    debug_heading: "🔧 INFORMAÇÕES DE DEBUG",
    debug_current_config: "Configuração Atual:",
    debug_not_configured: "[NÃO CONFIGURADO]",
    debug_files: "Ficheiros:",
    debug_settings_exists: "ficheiro de configuração existe",
    debug_log_exists: "ficheiro de log existe",
    debug_yes: "SIM",
    debug_no: "NÃO",
    debug_editor: "JSON no Editor:",
    debug_content: "Conteúdo",
    debug_empty: "[VAZIO]",
    debug_present: "[PRESENTE]",
    debug_size: "Tamanho",
    debug_characters: "caracteres",
    debug_tips_heading: "Dicas:",
    debug_tips: &[
        "Confirme que o Web App está publicado como \"Anyone\"",
        "Teste o URL diretamente no browser",
        "Verifique os logs para mais detalhes",
        "O script não precisa de autenticação - só envia JSON",
    ],
    copy_button: "Copiar Info",
    close_button: "Fechar",
};
