use std::sync::mpsc::{Receiver, Sender};

use tracing::{info, warn};

use crate::engine::dispatcher::dispatch;
use crate::engine::probe::probe;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::transport::Transport;
use crate::model::submission_result::BatchReport;

/// Worker that owns the HTTP transport. Commands run one at a time, in the
/// order they arrive.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    tx: Sender<EngineResponse>,
    transport: Box<dyn Transport + Send>,
}

impl Engine {
    pub fn new(
        rx: Receiver<EngineCommand>,
        tx: Sender<EngineResponse>,
        transport: Box<dyn Transport + Send>,
    ) -> Self {
        Self { rx, tx, transport }
    }

    pub fn run(&mut self) {
        while let Ok(cmd) = self.rx.recv() {
            let response = self.handle(cmd);

            if self.tx.send(response).is_err() {
                warn!("ui dropped the response channel, stopping engine");
                break;
            }
        }

        info!("engine stopped");
    }

    fn handle(&self, cmd: EngineCommand) -> EngineResponse {
        match cmd {
            EngineCommand::SendBatch { url, batch, guard } => {
                let results = dispatch(self.transport.as_ref(), &url, &batch);
                let report = BatchReport::from_results(results);
                info!(
                    total = report.total,
                    succeeded = report.succeeded,
                    failed = report.failed,
                    "batch finished"
                );

                EngineResponse::BatchFinished { report, guard }
            }

            EngineCommand::Probe { url, guard } => {
                let outcome = probe(self.transport.as_ref(), &url);

                EngineResponse::ProbeFinished { outcome, guard }
            }
        }
    }
}
