use std::path::PathBuf;

use thiserror::Error;

/// Why a parsed JSON value could not be turned into a batch of events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("the event list is empty")]
    EmptyBatch,

    #[error("'events' must be a list with at least one event")]
    InvalidEventsField,

    #[error("JSON must be an object or a list of events")]
    UnsupportedShape,
}

/// Everything that stops a send before the first request goes out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Web App URL is required")]
    MissingUrl,

    #[error("JSON editor is empty")]
    EmptyEditor,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Failure to complete a single HTTP exchange.
///
/// The `Display` text is what ends up in the body of a failed
/// `SubmissionResult`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Timeout")]
    Timeout,

    #[error("Connection error")]
    Connection,

    #[error("Request error: {0}")]
    Request(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to access settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file is not a JSON object of strings: {0}")]
    Format(#[from] serde_json::Error),
}
