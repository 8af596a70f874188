mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{MockDetectorFactory, MockPlatform, MockSummarizerFactory, MockTranslatorFactory};
use lingua_engine::{
    Availability, CapabilityKind, EngineEvent, EngineHandle, FailureKind, Job,
    NoPlatformCapabilities, SummarizerOptions, TranslatorOptions,
};

fn collect(engine: &EngineHandle, count: usize) -> Vec<EngineEvent> {
    let mut events = Vec::new();
    while events.len() < count {
        match engine.recv_timeout(Duration::from_secs(5)) {
            Some(event) => events.push(event),
            None => break,
        }
    }
    events
}

fn completions(events: Vec<EngineEvent>) -> Vec<EngineEvent> {
    events
        .into_iter()
        .filter(|event| !matches!(event, EngineEvent::Progress { .. }))
        .collect()
}

#[test]
fn engine_reports_unavailable_platform() {
    let engine = EngineHandle::new(Arc::new(NoPlatformCapabilities)).expect("engine");
    engine.submit(
        "1",
        Job::Detect {
            text: "Bonjour, comment allez-vous aujourd'hui?".to_string(),
        },
    );

    let events = collect(&engine, 1);
    assert_eq!(
        events,
        vec![EngineEvent::DetectionCompleted {
            message_id: "1".to_string(),
            result: Err(FailureKind::Unavailable(CapabilityKind::Detection)),
        }]
    );
}

#[test]
fn engine_runs_all_three_job_kinds() {
    let provider = MockPlatform {
        detector: Some(Arc::new(MockDetectorFactory::ready_with("fr"))),
        translator: Some(Arc::new(MockTranslatorFactory::ready())),
        summarizer: Some(Arc::new(MockSummarizerFactory::ready())),
    };
    let engine = EngineHandle::new(Arc::new(provider)).expect("engine");

    engine.submit(
        "a",
        Job::Detect {
            text: "Bonjour".to_string(),
        },
    );
    engine.submit(
        "b",
        Job::Translate {
            text: "Bonjour".to_string(),
            options: TranslatorOptions {
                source_language_code: "fr".to_string(),
                target_language_code: "es".to_string(),
            },
        },
    );
    engine.submit(
        "c",
        Job::Summarize {
            text: "Summaries are short".to_string(),
            options: SummarizerOptions {
                summary_type: "tl;dr".to_string(),
                format: "plain-text".to_string(),
                length: "short".to_string(),
            },
        },
    );

    let events = completions(collect(&engine, 3));
    assert_eq!(events.len(), 3);
    assert!(events.contains(&EngineEvent::DetectionCompleted {
        message_id: "a".to_string(),
        result: Ok("fr".to_string()),
    }));
    assert!(events.contains(&EngineEvent::TranslationCompleted {
        message_id: "b".to_string(),
        target: "es".to_string(),
        result: Ok("[es] Bonjour".to_string()),
    }));
    assert!(events.contains(&EngineEvent::SummaryCompleted {
        message_id: "c".to_string(),
        result: Ok("- Summaries".to_string()),
    }));
}

#[test]
fn engine_forwards_download_progress() {
    let provider = MockPlatform {
        detector: Some(Arc::new(MockDetectorFactory {
            availability: Availability::NeedsDownload,
            download_steps: vec![10, 40],
            ..MockDetectorFactory::ready_with("en")
        })),
        ..MockPlatform::default()
    };
    let engine = EngineHandle::new(Arc::new(provider)).expect("engine");
    engine.submit(
        "7",
        Job::Detect {
            text: "Good morning everyone".to_string(),
        },
    );

    let events = collect(&engine, 4);
    let progress: Vec<u8> = events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::Progress {
                capability: CapabilityKind::Detection,
                percent,
            } => Some(*percent),
            _ => None,
        })
        .collect();
    assert_eq!(progress, vec![10, 40, 100]);
    assert!(matches!(
        events.last(),
        Some(EngineEvent::DetectionCompleted { result: Ok(code), .. }) if code == "en"
    ));
}
