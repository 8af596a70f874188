#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lingua_engine::{
    Availability, CapabilityProvider, DetectionCandidate, LanguageDetector,
    LanguageDetectorFactory, PlatformError, ProgressSink, Summarizer, SummarizerFactory,
    SummarizerOptions, Translator, TranslatorFactory, TranslatorOptions,
};

#[derive(Default)]
pub struct RecordingSink {
    values: Mutex<Vec<u8>>,
}

impl RecordingSink {
    pub fn values(&self) -> Vec<u8> {
        self.values.lock().unwrap().clone()
    }
}

impl ProgressSink for RecordingSink {
    fn report(&self, percent: u8) {
        self.values.lock().unwrap().push(percent);
    }
}

#[derive(Default)]
pub struct Calls {
    pub create: AtomicUsize,
    pub invoke: AtomicUsize,
}

impl Calls {
    pub fn created(&self) -> usize {
        self.create.load(Ordering::SeqCst)
    }

    pub fn invoked(&self) -> usize {
        self.invoke.load(Ordering::SeqCst)
    }
}

pub struct MockDetectorFactory {
    pub availability: Availability,
    pub language_availability: Availability,
    pub candidates: Result<Vec<&'static str>, &'static str>,
    pub download_steps: Vec<u8>,
    pub calls: Arc<Calls>,
}

impl MockDetectorFactory {
    pub fn ready_with(code: &'static str) -> Self {
        Self {
            availability: Availability::Ready,
            language_availability: Availability::Ready,
            candidates: Ok(vec![code]),
            download_steps: Vec::new(),
            calls: Arc::new(Calls::default()),
        }
    }
}

struct MockDetector {
    candidates: Result<Vec<&'static str>, &'static str>,
    calls: Arc<Calls>,
}

#[async_trait]
impl LanguageDetector for MockDetector {
    async fn detect(&self, _text: &str) -> Result<Vec<DetectionCandidate>, PlatformError> {
        self.calls.invoke.fetch_add(1, Ordering::SeqCst);
        match &self.candidates {
            Ok(codes) => Ok(codes
                .iter()
                .map(|code| DetectionCandidate {
                    language_code: (*code).to_string(),
                    confidence: Some(0.9),
                })
                .collect()),
            Err(message) => Err(PlatformError::new(*message)),
        }
    }
}

#[async_trait]
impl LanguageDetectorFactory for MockDetectorFactory {
    async fn availability(&self) -> Result<Availability, PlatformError> {
        Ok(self.availability)
    }

    async fn language_availability(&self, _code: &str) -> Result<Availability, PlatformError> {
        Ok(self.language_availability)
    }

    async fn create(
        &self,
        monitor: Option<&dyn ProgressSink>,
    ) -> Result<Box<dyn LanguageDetector>, PlatformError> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        if let Some(monitor) = monitor {
            for step in &self.download_steps {
                monitor.report(*step);
            }
        }
        Ok(Box::new(MockDetector {
            candidates: self.candidates.clone(),
            calls: self.calls.clone(),
        }))
    }
}

pub struct MockTranslatorFactory {
    pub availability: Availability,
    pub fail_with: Option<&'static str>,
    pub seen: Mutex<Vec<TranslatorOptions>>,
    pub calls: Arc<Calls>,
}

impl MockTranslatorFactory {
    pub fn ready() -> Self {
        Self {
            availability: Availability::Ready,
            fail_with: None,
            seen: Mutex::new(Vec::new()),
            calls: Arc::new(Calls::default()),
        }
    }
}

struct MockTranslator {
    target: String,
    fail_with: Option<&'static str>,
    calls: Arc<Calls>,
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str) -> Result<String, PlatformError> {
        self.calls.invoke.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(message) => Err(PlatformError::new(message)),
            None => Ok(format!("[{}] {}", self.target, text)),
        }
    }
}

#[async_trait]
impl TranslatorFactory for MockTranslatorFactory {
    async fn availability(
        &self,
        _options: &TranslatorOptions,
    ) -> Result<Availability, PlatformError> {
        Ok(self.availability)
    }

    async fn create(
        &self,
        options: &TranslatorOptions,
        monitor: Option<&dyn ProgressSink>,
    ) -> Result<Box<dyn Translator>, PlatformError> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(options.clone());
        if let Some(monitor) = monitor {
            monitor.report(50);
        }
        Ok(Box::new(MockTranslator {
            target: options.target_language_code.clone(),
            fail_with: self.fail_with,
            calls: self.calls.clone(),
        }))
    }
}

pub struct MockSummarizerFactory {
    pub availability: Availability,
    pub seen: Mutex<Vec<SummarizerOptions>>,
    pub calls: Arc<Calls>,
}

impl MockSummarizerFactory {
    pub fn ready() -> Self {
        Self {
            availability: Availability::Ready,
            seen: Mutex::new(Vec::new()),
            calls: Arc::new(Calls::default()),
        }
    }
}

struct MockSummarizer {
    calls: Arc<Calls>,
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, PlatformError> {
        self.calls.invoke.fetch_add(1, Ordering::SeqCst);
        let first_word = text.split_whitespace().next().unwrap_or_default();
        Ok(format!("- {first_word}"))
    }
}

#[async_trait]
impl SummarizerFactory for MockSummarizerFactory {
    async fn availability(&self) -> Result<Availability, PlatformError> {
        Ok(self.availability)
    }

    async fn create(
        &self,
        options: &SummarizerOptions,
        _monitor: Option<&dyn ProgressSink>,
    ) -> Result<Box<dyn Summarizer>, PlatformError> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(options.clone());
        Ok(Box::new(MockSummarizer {
            calls: self.calls.clone(),
        }))
    }
}

#[derive(Default)]
pub struct MockPlatform {
    pub detector: Option<Arc<MockDetectorFactory>>,
    pub translator: Option<Arc<MockTranslatorFactory>>,
    pub summarizer: Option<Arc<MockSummarizerFactory>>,
}

impl CapabilityProvider for MockPlatform {
    fn language_detector(&self) -> Option<Arc<dyn LanguageDetectorFactory>> {
        self.detector
            .clone()
            .map(|factory| factory as Arc<dyn LanguageDetectorFactory>)
    }

    fn translator(&self) -> Option<Arc<dyn TranslatorFactory>> {
        self.translator
            .clone()
            .map(|factory| factory as Arc<dyn TranslatorFactory>)
    }

    fn summarizer(&self) -> Option<Arc<dyn SummarizerFactory>> {
        self.summarizer
            .clone()
            .map(|factory| factory as Arc<dyn SummarizerFactory>)
    }
}
