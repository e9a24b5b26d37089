use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One calendar event. Opaque: forwarded verbatim as the POST body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventPayload(Value);

impl EventPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn to_json_text(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }
}

/// Ordered, non-empty list of events built for one send action.
///
/// Only the normalizer can build one, so an empty batch never reaches
/// the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionBatch {
    events: Vec<EventPayload>,
}

#[allow(clippy::len_without_is_empty)]
impl SubmissionBatch {
    pub(crate) fn from_events(events: Vec<EventPayload>) -> Option<Self> {
        if events.is_empty() {
            None
        } else {
            Some(Self { events })
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn events(&self) -> &[EventPayload] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventPayload> {
        self.events.iter()
    }

    pub fn to_values(&self) -> Vec<Value> {
        self.events.iter().map(|e| e.as_value().clone()).collect()
    }
}
