//! Seams to the host's AI platform.
//!
//! Each capability follows the same shape: a factory reports whether it can
//! produce an instance, creates one (optionally downloading a model and
//! reporting progress), and the instance performs the actual call.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::ProgressSink;

/// Readiness reported by a capability factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Unavailable,
    NeedsDownload,
    Ready,
}

/// Raw error raised by the platform. Logged, never shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PlatformError {
    pub message: String,
}

impl PlatformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectionCandidate {
    pub language_code: String,
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorOptions {
    pub source_language_code: String,
    pub target_language_code: String,
}

/// Summarizer creation options, as the platform's string tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizerOptions {
    pub summary_type: String,
    pub format: String,
    pub length: String,
}

#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// Resolves once a downloaded model can be used.
    async fn ready(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    /// Candidates ordered by descending confidence.
    async fn detect(&self, text: &str) -> Result<Vec<DetectionCandidate>, PlatformError>;
}

#[async_trait]
pub trait LanguageDetectorFactory: Send + Sync {
    async fn availability(&self) -> Result<Availability, PlatformError>;

    /// Whether the detector can report `code` reliably.
    async fn language_availability(&self, code: &str) -> Result<Availability, PlatformError>;

    async fn create(
        &self,
        monitor: Option<&dyn ProgressSink>,
    ) -> Result<Box<dyn LanguageDetector>, PlatformError>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn ready(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn translate(&self, text: &str) -> Result<String, PlatformError>;
}

#[async_trait]
pub trait TranslatorFactory: Send + Sync {
    /// Readiness of one source/target pair.
    async fn availability(&self, options: &TranslatorOptions)
        -> Result<Availability, PlatformError>;

    async fn create(
        &self,
        options: &TranslatorOptions,
        monitor: Option<&dyn ProgressSink>,
    ) -> Result<Box<dyn Translator>, PlatformError>;
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn ready(&self) -> Result<(), PlatformError> {
        Ok(())
    }

    async fn summarize(&self, text: &str) -> Result<String, PlatformError>;
}

#[async_trait]
pub trait SummarizerFactory: Send + Sync {
    async fn availability(&self) -> Result<Availability, PlatformError>;

    async fn create(
        &self,
        options: &SummarizerOptions,
        monitor: Option<&dyn ProgressSink>,
    ) -> Result<Box<dyn Summarizer>, PlatformError>;
}

/// Entry point to the platform. `None` means the capability is not exposed at all.
pub trait CapabilityProvider: Send + Sync {
    fn language_detector(&self) -> Option<Arc<dyn LanguageDetectorFactory>>;
    fn translator(&self) -> Option<Arc<dyn TranslatorFactory>>;
    fn summarizer(&self) -> Option<Arc<dyn SummarizerFactory>>;
}

/// Provider for hosts without an AI platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPlatformCapabilities;

impl CapabilityProvider for NoPlatformCapabilities {
    fn language_detector(&self) -> Option<Arc<dyn LanguageDetectorFactory>> {
        None
    }

    fn translator(&self) -> Option<Arc<dyn TranslatorFactory>> {
        None
    }

    fn summarizer(&self) -> Option<Arc<dyn SummarizerFactory>> {
        None
    }
}
