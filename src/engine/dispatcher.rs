use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{error, info};

use crate::engine::transport::Transport;
use crate::error::TransportError;
use crate::model::event_payload::{EventPayload, SubmissionBatch};
use crate::model::submission_result::{ResponseBody, SubmissionResult};

/// POST every event in order, one request each.
///
/// Always returns exactly `batch.len()` results, indexed from 1. A failing
/// item is recorded and the next one is still attempted.
pub fn dispatch(transport: &dyn Transport, url: &str, batch: &SubmissionBatch) -> Vec<SubmissionResult> {
    info!(count = batch.len(), url, "sending events");
    info!("headers: Content-Type=application/json");

    batch
        .iter()
        .enumerate()
        .map(|(i, payload)| submit_one(transport, url, i + 1, payload))
        .collect()
}

fn submit_one(transport: &dyn Transport, url: &str, index: usize, payload: &EventPayload) -> SubmissionResult {
    let attempt = panic::catch_unwind(AssertUnwindSafe(|| post_event(transport, url, index, payload)));

    let outcome = match attempt {
        Ok(outcome) => outcome,
        Err(cause) => Err(TransportError::Unexpected(panic_message(cause.as_ref()))),
    };

    match outcome {
        Ok(result) => result,
        Err(err) => {
            error!(event = index, "{err}");
            SubmissionResult::failed(index, &err)
        }
    }
}

fn post_event(
    transport: &dyn Transport,
    url: &str,
    index: usize,
    payload: &EventPayload,
) -> Result<SubmissionResult, TransportError> {
    let body = payload
        .to_json_text()
        .map_err(|e| TransportError::Unexpected(e.to_string()))?;

    info!(event = index, payload = %body, "posting event");

    let reply = transport.post_json(url, body)?;
    info!(event = index, status = reply.status_code, "event response");

    Ok(SubmissionResult::completed(
        index,
        reply.status_code,
        ResponseBody::from_text(reply.body),
    ))
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(s) = cause.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = cause.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic while sending event".to_string()
    }
}
