use crate::engine::probe::ProbeReport;
use crate::engine::send_guard::SendGuard;
use crate::error::TransportError;
use crate::model::event_payload::SubmissionBatch;
use crate::model::submission_result::BatchReport;

pub enum EngineCommand {
    SendBatch {
        url: String,
        batch: SubmissionBatch,
        guard: SendGuard,
    },

    Probe {
        url: String,
        guard: SendGuard,
    },
}

/// Replies hand the command's guard back, so the busy flag stays raised
/// until the UI has applied the result.
pub enum EngineResponse {
    BatchFinished {
        report: BatchReport,
        guard: SendGuard,
    },

    ProbeFinished {
        outcome: Result<ProbeReport, TransportError>,
        guard: SendGuard,
    },
}
