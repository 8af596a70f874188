use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use thiserror::Error;

use crate::lifecycle::{run_detection, run_summary, run_translation};
use crate::progress::ChannelProgressSink;
use crate::{CapabilityKind, CapabilityProvider, EngineEvent, Job};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
}

struct EngineCommand {
    message_id: String,
    job: Job,
}

/// Runs capability jobs on a background tokio runtime.
///
/// Jobs are independent: several may be in flight at once, for the same or
/// different messages, and complete in any order. There is no cancellation.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(provider: Arc<dyn CapabilityProvider>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("lingua-engine-worker")
            .build()?;

        thread::Builder::new()
            .name("lingua-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let provider = provider.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(provider.as_ref(), command, event_tx).await;
                    });
                }
                engine_info!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, message_id: impl Into<String>, job: Job) {
        let _ = self.cmd_tx.send(EngineCommand {
            message_id: message_id.into(),
            job,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    provider: &dyn CapabilityProvider,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let EngineCommand { message_id, job } = command;
    engine_debug!("Running job for message {}", message_id);
    let event = match job {
        Job::Detect { text } => {
            let sink = ChannelProgressSink::new(event_tx.clone(), CapabilityKind::Detection);
            let result = run_detection(provider, &text, &sink).await;
            EngineEvent::DetectionCompleted { message_id, result }
        }
        Job::Translate { text, options } => {
            let sink = ChannelProgressSink::new(event_tx.clone(), CapabilityKind::Translation);
            let result = run_translation(provider, &text, &options, &sink).await;
            EngineEvent::TranslationCompleted {
                message_id,
                target: options.target_language_code,
                result,
            }
        }
        Job::Summarize { text, options } => {
            let sink = ChannelProgressSink::new(event_tx.clone(), CapabilityKind::Summarization);
            let result = run_summary(provider, &text, &options, &sink).await;
            EngineEvent::SummaryCompleted { message_id, result }
        }
    };
    let _ = event_tx.send(event);
}
