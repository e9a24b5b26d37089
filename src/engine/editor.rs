use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::engine::normalizer::normalize;
use crate::error::InputError;
use crate::model::event_payload::SubmissionBatch;

/// Sample event dropped into the editor by "Insert test template".
pub fn test_template() -> String {
    let template = json!({
        "title": "Test event",
        "start": "2025-09-22T09:30:00+01:00",
        "end": "2025-09-22T10:00:00+01:00",
        "description": "Test event created via the Web App.",
        "location": "Test location"
    });

    serde_json::to_string_pretty(&template).unwrap_or_default()
}

fn parse_editor(text: &str) -> Result<Value, InputError> {
    let content = text.trim();
    if content.is_empty() {
        return Err(InputError::EmptyEditor);
    }

    serde_json::from_str(content).map_err(|e| InputError::InvalidJson(e.to_string()))
}

/// Re-indent the editor content with two spaces.
pub fn format_json(text: &str) -> Result<String, InputError> {
    let parsed = parse_editor(text)?;
    serde_json::to_string_pretty(&parsed).map_err(|e| InputError::InvalidJson(e.to_string()))
}

/// Everything that has to pass before a single request is made.
pub fn prepare_batch(url: &str, text: &str) -> Result<SubmissionBatch, InputError> {
    if url.trim().is_empty() {
        return Err(InputError::MissingUrl);
    }

    let parsed = parse_editor(text)?;
    Ok(normalize(parsed)?)
}

/// Read a JSON file for the editor. The content is returned untouched once it
/// parses.
pub fn load_json_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str::<Value>(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    Ok(content)
}
