use std::fmt;

use crate::error::{CapabilityError, UNSUPPORTED_FOR_TRANSLATION};
use crate::languages;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A submitted message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    /// Submission time, milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Lifecycle of one capability on one message, as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityPhase {
    Idle,
    Busy,
    Done(String),
    Failed(String),
}

/// Per-message record of the three capability flows plus selector state.
///
/// Field names mirror the persisted snapshot layout. Mutate through the
/// `begin_*`/`finish_*` methods so a capability is never busy and failed at
/// the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageState {
    pub is_detecting: bool,
    pub is_translating: bool,
    pub is_summarizing: bool,
    pub detected_language: String,
    pub detected_language_label: String,
    pub is_supported: bool,
    pub detection_error: Option<String>,
    pub selected_language: String,
    pub translated_text: String,
    pub translated_to_language: String,
    pub translation_error: Option<String>,
    pub summary: String,
    pub summary_error: Option<String>,
    pub is_open: bool,
}

impl MessageState {
    /// State of a freshly submitted message: detection already running.
    pub fn new_detecting(default_target: &str) -> Self {
        Self {
            is_detecting: true,
            is_translating: false,
            is_summarizing: false,
            detected_language: String::new(),
            detected_language_label: String::new(),
            is_supported: false,
            detection_error: None,
            selected_language: default_target.to_string(),
            translated_text: String::new(),
            translated_to_language: String::new(),
            translation_error: None,
            summary: String::new(),
            summary_error: None,
            is_open: false,
        }
    }

    pub fn detection_phase(&self) -> CapabilityPhase {
        phase(
            self.is_detecting,
            &self.detected_language_label,
            self.detection_error.as_deref(),
        )
    }

    pub fn translation_phase(&self) -> CapabilityPhase {
        phase(
            self.is_translating,
            &self.translated_text,
            self.translation_error.as_deref(),
        )
    }

    pub fn summary_phase(&self) -> CapabilityPhase {
        phase(
            self.is_summarizing,
            &self.summary,
            self.summary_error.as_deref(),
        )
    }

    pub(crate) fn finish_detection(&mut self, result: Result<String, CapabilityError>) {
        self.is_detecting = false;
        match result {
            Ok(code) => {
                let supported = languages::is_supported(&code);
                self.detected_language_label = languages::label_for(&code);
                self.detected_language = code;
                self.is_supported = supported;
                self.detection_error = if supported {
                    None
                } else {
                    Some(UNSUPPORTED_FOR_TRANSLATION.to_string())
                };
            }
            Err(CapabilityError::LanguageNotDetectable { code }) => {
                self.detected_language_label = languages::label_for(&code);
                self.detected_language = code.clone();
                self.is_supported = false;
                self.detection_error =
                    Some(CapabilityError::LanguageNotDetectable { code }.user_message());
            }
            Err(err) => {
                self.detected_language.clear();
                self.detected_language_label.clear();
                self.is_supported = false;
                self.detection_error = Some(err.user_message());
            }
        }
    }

    pub(crate) fn begin_translation(&mut self) {
        self.is_translating = true;
        self.translation_error = None;
        self.translated_text.clear();
        self.translated_to_language.clear();
    }

    pub(crate) fn reject_translation(&mut self, err: &CapabilityError) {
        self.is_translating = false;
        self.translated_text.clear();
        self.translated_to_language.clear();
        self.translation_error = Some(err.user_message());
    }

    pub(crate) fn finish_translation(
        &mut self,
        target: String,
        result: Result<String, CapabilityError>,
    ) {
        match result {
            Ok(text) => {
                self.is_translating = false;
                self.translated_text = text;
                self.translated_to_language = target;
                self.translation_error = None;
                self.is_open = false;
            }
            Err(err) => self.reject_translation(&err),
        }
    }

    pub(crate) fn begin_summary(&mut self) {
        self.is_summarizing = true;
        self.summary_error = None;
        self.summary.clear();
    }

    pub(crate) fn finish_summary(&mut self, result: Result<String, CapabilityError>) {
        self.is_summarizing = false;
        match result {
            Ok(summary) => {
                self.summary = summary;
                self.summary_error = None;
            }
            Err(err) => {
                self.summary.clear();
                self.summary_error = Some(err.user_message());
            }
        }
    }

    /// Busy flags cannot survive a reload; settle them as failures.
    pub(crate) fn settle_after_restore(&mut self) {
        use crate::error::Capability;

        if self.is_detecting {
            self.finish_detection(Err(CapabilityError::InvocationFailed(
                Capability::Detection,
            )));
        }
        if self.is_translating {
            self.reject_translation(&CapabilityError::InvocationFailed(Capability::Translation));
        }
        if self.is_summarizing {
            self.finish_summary(Err(CapabilityError::InvocationFailed(
                Capability::Summarization,
            )));
        }
    }
}

fn phase(busy: bool, result: &str, error: Option<&str>) -> CapabilityPhase {
    if busy {
        CapabilityPhase::Busy
    } else if let Some(error) = error {
        CapabilityPhase::Failed(error.to_string())
    } else if !result.is_empty() {
        CapabilityPhase::Done(result.to_string())
    } else {
        CapabilityPhase::Idle
    }
}
