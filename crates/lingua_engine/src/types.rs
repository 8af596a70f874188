use std::fmt;

use crate::{SummarizerOptions, TranslatorOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    Detection,
    Translation,
    Summarization,
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityKind::Detection => write!(f, "language detection"),
            CapabilityKind::Translation => write!(f, "translation"),
            CapabilityKind::Summarization => write!(f, "summarization"),
        }
    }
}

/// Work item for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Detect {
        text: String,
    },
    Translate {
        text: String,
        options: TranslatorOptions,
    },
    Summarize {
        text: String,
        options: SummarizerOptions,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress {
        capability: CapabilityKind,
        percent: u8,
    },
    DetectionCompleted {
        message_id: String,
        result: Result<String, FailureKind>,
    },
    TranslationCompleted {
        message_id: String,
        target: String,
        result: Result<String, FailureKind>,
    },
    SummaryCompleted {
        message_id: String,
        result: Result<String, FailureKind>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The platform does not expose the capability at all.
    Unavailable(CapabilityKind),
    /// The capability exists but cannot be readied now.
    Unready(CapabilityKind),
    /// Detection produced a language the detector cannot report reliably.
    LanguageNotDetectable { code: String },
    /// The platform call itself failed; details are only logged.
    Invocation(CapabilityKind),
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Unavailable(kind) => write!(f, "{kind} unavailable"),
            FailureKind::Unready(kind) => write!(f, "{kind} not ready"),
            FailureKind::LanguageNotDetectable { code } => {
                write!(f, "language {code} not detectable")
            }
            FailureKind::Invocation(kind) => write!(f, "{kind} invocation failed"),
        }
    }
}
