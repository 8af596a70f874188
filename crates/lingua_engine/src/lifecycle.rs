//! The four-phase contract shared by every capability: availability check,
//! readiness query, instantiation (with optional model download), invocation.

use engine_logging::{engine_debug, engine_warn};

use crate::{
    Availability, CapabilityKind, CapabilityProvider, FailureKind, MonotonicProgress,
    PlatformError, ProgressSink, SummarizerOptions, TranslatorOptions,
};

pub async fn run_detection(
    provider: &dyn CapabilityProvider,
    text: &str,
    sink: &dyn ProgressSink,
) -> Result<String, FailureKind> {
    let kind = CapabilityKind::Detection;
    let factory = provider
        .language_detector()
        .ok_or(FailureKind::Unavailable(kind))?;

    let availability = factory
        .availability()
        .await
        .map_err(|err| platform_failure(kind, "availability", err))?;
    let detector = if needs_download(kind, availability)? {
        let monitor = MonotonicProgress::new(sink);
        let detector = factory
            .create(Some(&monitor))
            .await
            .map_err(|err| platform_failure(kind, "create", err))?;
        detector
            .ready()
            .await
            .map_err(|err| platform_failure(kind, "ready", err))?;
        monitor.finish();
        detector
    } else {
        factory
            .create(None)
            .await
            .map_err(|err| platform_failure(kind, "create", err))?
    };

    let candidates = detector
        .detect(text)
        .await
        .map_err(|err| platform_failure(kind, "detect", err))?;
    let Some(best) = candidates.into_iter().next() else {
        engine_warn!("Language detection returned no candidates");
        return Err(FailureKind::Invocation(kind));
    };
    let code = best.language_code;
    engine_debug!("Detected {} (confidence {:?})", code, best.confidence);

    let language_availability = factory
        .language_availability(&code)
        .await
        .map_err(|err| platform_failure(kind, "language availability", err))?;
    if language_availability == Availability::Ready {
        Ok(code)
    } else {
        Err(FailureKind::LanguageNotDetectable { code })
    }
}

pub async fn run_translation(
    provider: &dyn CapabilityProvider,
    text: &str,
    options: &TranslatorOptions,
    sink: &dyn ProgressSink,
) -> Result<String, FailureKind> {
    let kind = CapabilityKind::Translation;
    let factory = provider.translator().ok_or(FailureKind::Unavailable(kind))?;

    let availability = factory
        .availability(options)
        .await
        .map_err(|err| platform_failure(kind, "availability", err))?;
    let translator = if needs_download(kind, availability)? {
        let monitor = MonotonicProgress::new(sink);
        let translator = factory
            .create(options, Some(&monitor))
            .await
            .map_err(|err| platform_failure(kind, "create", err))?;
        translator
            .ready()
            .await
            .map_err(|err| platform_failure(kind, "ready", err))?;
        monitor.finish();
        translator
    } else {
        factory
            .create(options, None)
            .await
            .map_err(|err| platform_failure(kind, "create", err))?
    };

    translator
        .translate(text)
        .await
        .map_err(|err| platform_failure(kind, "translate", err))
}

pub async fn run_summary(
    provider: &dyn CapabilityProvider,
    text: &str,
    options: &SummarizerOptions,
    sink: &dyn ProgressSink,
) -> Result<String, FailureKind> {
    let kind = CapabilityKind::Summarization;
    let factory = provider.summarizer().ok_or(FailureKind::Unavailable(kind))?;

    let availability = factory
        .availability()
        .await
        .map_err(|err| platform_failure(kind, "availability", err))?;
    let summarizer = if needs_download(kind, availability)? {
        let monitor = MonotonicProgress::new(sink);
        let summarizer = factory
            .create(options, Some(&monitor))
            .await
            .map_err(|err| platform_failure(kind, "create", err))?;
        summarizer
            .ready()
            .await
            .map_err(|err| platform_failure(kind, "ready", err))?;
        monitor.finish();
        summarizer
    } else {
        factory
            .create(options, None)
            .await
            .map_err(|err| platform_failure(kind, "create", err))?
    };

    summarizer
        .summarize(text)
        .await
        .map_err(|err| platform_failure(kind, "summarize", err))
}

fn needs_download(kind: CapabilityKind, availability: Availability) -> Result<bool, FailureKind> {
    match availability {
        Availability::Ready => Ok(false),
        Availability::NeedsDownload => {
            engine_debug!("{} model needs a download", kind);
            Ok(true)
        }
        Availability::Unavailable => Err(FailureKind::Unready(kind)),
    }
}

fn platform_failure(kind: CapabilityKind, phase: &str, err: PlatformError) -> FailureKind {
    engine_warn!("{} failed during {}: {}", kind, phase, err);
    FailureKind::Invocation(kind)
}
