use serde_json::Value;

use crate::error::TransportError;

/// What came back for one event: a parsed JSON document or plain text.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Parse as JSON, keep the raw text if that fails.
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text),
        }
    }

    /// Objects and arrays are pretty-printed, everything else is shown as text.
    pub fn display_text(&self) -> String {
        match self {
            ResponseBody::Json(value @ (Value::Object(_) | Value::Array(_))) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ResponseBody::Json(Value::String(s)) => s.clone(),
            ResponseBody::Json(other) => other.to_string(),
            ResponseBody::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    /// 1-based position in the batch.
    pub index: usize,
    /// 0 when no HTTP exchange took place.
    pub status_code: u16,
    pub ok: bool,
    pub body: ResponseBody,
}

impl SubmissionResult {
    pub fn completed(index: usize, status_code: u16, body: ResponseBody) -> Self {
        Self {
            index,
            status_code,
            ok: (200..300).contains(&status_code),
            body,
        }
    }

    pub fn failed(index: usize, error: &TransportError) -> Self {
        Self {
            index,
            status_code: 0,
            ok: false,
            body: ResponseBody::Text(error.to_string()),
        }
    }
}

/// Counts plus the ordered results of one send action.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub results: Vec<SubmissionResult>,
}

impl BatchReport {
    pub fn from_results(results: Vec<SubmissionResult>) -> Self {
        let total = results.len();
        let succeeded = results.iter().filter(|r| r.ok).count();

        Self {
            total,
            succeeded,
            failed: total - succeeded,
            results,
        }
    }
}
