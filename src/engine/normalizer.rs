use serde_json::Value;

use crate::error::NormalizeError;
use crate::model::event_payload::{EventPayload, SubmissionBatch};

/// Turn parsed editor JSON into the list of events to send.
///
/// Accepted shapes:
/// - `[ {..}, {..} ]`: every element is one event
/// - `{ "events": [ {..}, .. ] }`: the elements of `events`
/// - `{ .. }` without an `events` key: a single event
///
/// Elements are not inspected.
pub fn normalize(value: Value) -> Result<SubmissionBatch, NormalizeError> {
    let items = match value {
        Value::Array(items) => {
            if items.is_empty() {
                return Err(NormalizeError::EmptyBatch);
            }
            items
        }

        Value::Object(mut map) => match map.remove("events") {
            Some(Value::Array(items)) if !items.is_empty() => items,
            Some(_) => return Err(NormalizeError::InvalidEventsField),
            None => vec![Value::Object(map)],
        },

        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            return Err(NormalizeError::UnsupportedShape);
        }
    };

    let events = items.into_iter().map(EventPayload::new).collect();
    SubmissionBatch::from_events(events).ok_or(NormalizeError::EmptyBatch)
}
