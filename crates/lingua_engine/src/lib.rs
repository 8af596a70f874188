//! Lingua engine: capability adapters, invocation lifecycle and durable storage.
mod capability;
mod engine;
mod lifecycle;
mod persist;
mod progress;
mod types;

pub use capability::{
    Availability, CapabilityProvider, DetectionCandidate, LanguageDetector,
    LanguageDetectorFactory, NoPlatformCapabilities, PlatformError, Summarizer,
    SummarizerFactory, SummarizerOptions, Translator, TranslatorFactory, TranslatorOptions,
};
pub use engine::{EngineError, EngineHandle};
pub use lifecycle::{run_detection, run_summary, run_translation};
pub use persist::{
    ensure_state_dir, AtomicFileWriter, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore,
    PersistError,
};
pub use progress::{percent_from_bytes, ChannelProgressSink, MonotonicProgress, ProgressSink};
pub use types::{CapabilityKind, EngineEvent, FailureKind, Job};
