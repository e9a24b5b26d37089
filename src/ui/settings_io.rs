use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use crate::i18n::Language;
use crate::ui::settings::{AppSettings, SettingKey, DEFAULT_CALENDAR_ID};

const APP_DIR_NAME: &str = "calendar_event_sender";

/// Where the settings file and the diagnostic log live.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub settings_file: PathBuf,
    pub log_file: PathBuf,
}

impl AppPaths {
    pub fn default_location() -> Self {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR_NAME);
        fs::create_dir_all(&path).ok();
        Self::in_dir(&path)
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self {
            settings_file: dir.join("settings.json"),
            log_file: dir.join("calendar_event_sender.log"),
        }
    }
}

/// String key/value store persisted as a flat JSON object. Every `set`
/// writes through to disk.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    /// A missing file is an empty store; an unreadable or malformed one is an
    /// error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();

        let values = match fs::read_to_string(&path) {
            Ok(s) => serde_json::from_str(&s)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(SettingsError::Io { path, source }),
        };

        Ok(Self { path, values })
    }

    /// Store with nothing loaded, used when the file on disk is unusable.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn get(&self, key: SettingKey) -> Option<&str> {
        self.values.get(key.as_str()).map(String::as_str)
    }

    pub fn set(&mut self, key: SettingKey, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.as_str().to_string(), value.to_string());
        self.flush()
    }

    pub fn load_settings(&self) -> AppSettings {
        AppSettings {
            web_app_url: self.get(SettingKey::WebAppUrl).unwrap_or_default().to_string(),
            calendar_id: self
                .get(SettingKey::CalendarId)
                .unwrap_or(DEFAULT_CALENDAR_ID)
                .to_string(),
            language: self
                .get(SettingKey::Language)
                .map(Language::from_code)
                .unwrap_or_default(),
        }
    }

    pub fn save_settings(&mut self, settings: &AppSettings) -> Result<(), SettingsError> {
        self.values
            .insert(SettingKey::WebAppUrl.as_str().into(), settings.web_app_url.clone());
        self.values
            .insert(SettingKey::CalendarId.as_str().into(), settings.calendar_id.clone());
        self.values
            .insert(SettingKey::Language.as_str().into(), settings.language.code().into());
        self.flush()
    }

    fn flush(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, json).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path().join("settings.json")).unwrap();

        assert!(!store.exists());
        assert_eq!(store.get(SettingKey::WebAppUrl), None);
        assert_eq!(store.load_settings(), AppSettings::default());
        assert_eq!(store.load_settings().calendar_id, "primary");
    }

    #[test]
    fn set_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut store = SettingsStore::open(&path).unwrap();
        store.set(SettingKey::WebAppUrl, "https://hook.test/exec").unwrap();

        let reopened = SettingsStore::open(&path).unwrap();
        assert_eq!(reopened.get(SettingKey::WebAppUrl), Some("https://hook.test/exec"));
        assert_eq!(reopened.get(SettingKey::CalendarId), None);
    }

    #[test]
    fn settings_survive_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let saved = AppSettings {
            web_app_url: "https://script.google.com/macros/s/abc/exec".into(),
            calendar_id: "team@group.calendar.google.com".into(),
            language: Language::Portuguese,
        };
        SettingsStore::open(&path).unwrap().save_settings(&saved).unwrap();

        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("\"LANGUAGE\": \"pt\""));

        assert_eq!(SettingsStore::open(&path).unwrap().load_settings(), saved);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "WEB_APP_URL=https://old.env/format").unwrap();

        assert!(matches!(SettingsStore::open(&path), Err(SettingsError::Format(_))));
    }

    #[test]
    fn paths_share_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths::in_dir(dir.path());

        assert_eq!(paths.settings_file.parent(), Some(dir.path()));
        assert_eq!(paths.log_file.parent(), Some(dir.path()));
    }
}
