// src/state/analysis_state.rs
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

use crate::analysis::{AnalysisError, AnalysisReport, EnergyAdvisor};
use crate::input::ConsumptionInput;

type Outcome = Result<AnalysisReport, AnalysisError>;

/// One outstanding model call. Dropping it aborts the call.
#[derive(Debug)]
pub struct PendingAnalysis {
    receiver: oneshot::Receiver<Outcome>,
    task: JoinHandle<()>,
}

impl PendingAnalysis {
    pub fn spawn(
        runtime: &Handle,
        advisor: Arc<dyn EnergyAdvisor>,
        input: ConsumptionInput,
        location: String,
    ) -> Self {
        let (sender, receiver) = oneshot::channel();
        let task = runtime.spawn(async move {
            let outcome = advisor
                .analyze(&input, &location)
                .await
                .map(|result| AnalysisReport::new(result, location.trim()));
            // The receiver is gone if the session was dropped meanwhile
            let _ = sender.send(outcome);
        });
        Self { receiver, task }
    }

    /// `None` while the call is still running.
    pub fn try_finish(&mut self) -> Option<Outcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(AnalysisError::Interrupted)),
        }
    }
}

impl Drop for PendingAnalysis {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[derive(Debug, Default)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Submitting(PendingAnalysis),
    Complete,
    Failed,
}

impl AnalysisPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, AnalysisPhase::Submitting(_))
    }
}
