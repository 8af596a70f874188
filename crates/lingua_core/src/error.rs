use std::fmt;

use thiserror::Error;

/// One of the three platform capabilities a message can be run through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Detection,
    Translation,
    Summarization,
}

impl Capability {
    fn display_name(self) -> &'static str {
        match self {
            Capability::Detection => "Language detection",
            Capability::Translation => "Translation",
            Capability::Summarization => "Summarization",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Rejection of the input box content on submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter some text.")]
    Empty,
    #[error("Message must be at least {min} characters long.")]
    TooShort { min: usize },
}

/// Failure of a capability flow, stored on the message it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("{0} is not available on this platform")]
    Unavailable(Capability),
    #[error("{0} model is not ready")]
    Unready(Capability),
    #[error("language is not in the supported set")]
    UnsupportedLanguage,
    #[error("language {code} cannot be detected")]
    LanguageNotDetectable { code: String },
    #[error("source and target language are the same")]
    SameLanguage,
    #[error("{0} call failed")]
    InvocationFailed(Capability),
}

impl CapabilityError {
    /// Text shown to the user. Never contains raw platform error details.
    pub fn user_message(&self) -> String {
        match self {
            CapabilityError::Unavailable(capability) => {
                format!("{capability} is not available on this platform.")
            }
            CapabilityError::Unready(Capability::Translation) => {
                "This language pair is not currently supported for translation.".to_string()
            }
            CapabilityError::Unready(capability) => {
                format!("{capability} is not available at the moment. Please try again later.")
            }
            CapabilityError::UnsupportedLanguage => {
                "Translation is not available for unsupported languages.".to_string()
            }
            CapabilityError::LanguageNotDetectable { .. } => {
                "This language is not supported for detection.".to_string()
            }
            CapabilityError::SameLanguage => {
                "Source and target languages cannot be the same.".to_string()
            }
            CapabilityError::InvocationFailed(Capability::Detection) => {
                "Failed to detect language. Please try again.".to_string()
            }
            CapabilityError::InvocationFailed(Capability::Translation) => {
                "Something went wrong translating your message. Please try again.".to_string()
            }
            CapabilityError::InvocationFailed(Capability::Summarization) => {
                "Something went wrong summarizing your message. Please try again.".to_string()
            }
        }
    }
}

/// Shown when detection finished but the language is outside the supported table.
pub const UNSUPPORTED_FOR_TRANSLATION: &str = "This language is not supported for translation.";
