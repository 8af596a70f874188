use std::sync::Arc;

use engine_logging::{engine_info, engine_warn};
use lingua_core::{AppState, Capability, CapabilityError, Effect, MessageId, Msg, SummaryOptions};
use lingua_engine::{
    CapabilityKind, CapabilityProvider, EngineError, EngineEvent, EngineHandle, FailureKind, Job,
    KeyValueStore, SummarizerOptions, TranslatorOptions,
};

use super::persistence;

pub struct EffectRunner {
    engine: EngineHandle,
    store: Arc<dyn KeyValueStore>,
}

impl EffectRunner {
    pub fn new(
        provider: Arc<dyn CapabilityProvider>,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(provider)?,
            store,
        })
    }

    /// Runs effects produced by one update. `state` is the post-update state.
    pub fn enqueue(&self, effects: Vec<Effect>, state: &AppState) {
        let mut persist = false;
        for effect in effects {
            match effect {
                Effect::Detect { id, text } => {
                    engine_info!("Detect message={} text_len={}", id, text.len());
                    self.engine.submit(id.to_string(), Job::Detect { text });
                }
                Effect::Translate {
                    id,
                    text,
                    source,
                    target,
                } => {
                    engine_info!("Translate message={} {}->{}", id, source, target);
                    self.engine.submit(
                        id.to_string(),
                        Job::Translate {
                            text,
                            options: TranslatorOptions {
                                source_language_code: source,
                                target_language_code: target,
                            },
                        },
                    );
                }
                Effect::Summarize { id, text, options } => {
                    engine_info!(
                        "Summarize message={} type={}",
                        id,
                        options.kind.token()
                    );
                    self.engine.submit(
                        id.to_string(),
                        Job::Summarize {
                            text,
                            options: summarizer_options(options),
                        },
                    );
                }
                Effect::PersistSnapshot => persist = true,
            }
        }
        // One write per update, however many changes it made.
        if persist {
            persistence::save_snapshot(self.store.as_ref(), &state.snapshot());
        }
    }

    /// Engine events that arrived since the last call, as core messages.
    pub fn drain_events(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(map_event(event));
        }
        msgs
    }
}

fn summarizer_options(options: SummaryOptions) -> SummarizerOptions {
    SummarizerOptions {
        summary_type: options.kind.token().to_string(),
        format: options.format.token().to_string(),
        length: options.length.token().to_string(),
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Progress {
            capability,
            percent,
        } => Msg::DownloadProgress {
            capability: map_capability(capability),
            percent,
        },
        EngineEvent::DetectionCompleted { message_id, result } => Msg::DetectionFinished {
            id: MessageId::new(message_id),
            result: map_result(result),
        },
        EngineEvent::TranslationCompleted {
            message_id,
            target,
            result,
        } => Msg::TranslationFinished {
            id: MessageId::new(message_id),
            target,
            result: map_result(result),
        },
        EngineEvent::SummaryCompleted { message_id, result } => Msg::SummaryFinished {
            id: MessageId::new(message_id),
            result: map_result(result),
        },
    }
}

fn map_result(result: Result<String, FailureKind>) -> Result<String, CapabilityError> {
    result.map_err(|failure| {
        engine_warn!("Capability job failed: {}", failure);
        map_failure(failure)
    })
}

fn map_failure(failure: FailureKind) -> CapabilityError {
    match failure {
        FailureKind::Unavailable(kind) => CapabilityError::Unavailable(map_capability(kind)),
        FailureKind::Unready(kind) => CapabilityError::Unready(map_capability(kind)),
        FailureKind::LanguageNotDetectable { code } => {
            CapabilityError::LanguageNotDetectable { code }
        }
        FailureKind::Invocation(kind) => CapabilityError::InvocationFailed(map_capability(kind)),
    }
}

fn map_capability(kind: CapabilityKind) -> Capability {
    match kind {
        CapabilityKind::Detection => Capability::Detection,
        CapabilityKind::Translation => Capability::Translation,
        CapabilityKind::Summarization => Capability::Summarization,
    }
}
