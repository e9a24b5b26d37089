use serde::{Deserialize, Serialize};

use crate::i18n::Language;

pub const DEFAULT_CALENDAR_ID: &str = "primary";

/// Keys understood by the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    WebAppUrl,
    /// Saved and shown, but never sent with the events.
    CalendarId,
    Language,
}

impl SettingKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::WebAppUrl => "WEB_APP_URL",
            SettingKey::CalendarId => "CALENDAR_ID",
            SettingKey::Language => "LANGUAGE",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub web_app_url: String,
    pub calendar_id: String,
    pub language: Language,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            web_app_url: String::new(),
            calendar_id: DEFAULT_CALENDAR_ID.into(),
            language: Language::default(),
        }
    }
}
