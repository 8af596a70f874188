use crate::{Capability, CapabilityError, MessageId, Snapshot, SummaryOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the message input box.
    InputChanged(String),
    /// User submitted the current input. `now_ms` seeds the message id and timestamp.
    SubmitClicked { now_ms: i64 },
    /// Restore messages and their states from a persisted snapshot.
    Restore(Snapshot),
    /// User clicked the target-language toggle of a message.
    DropdownToggled(MessageId),
    /// User picked a target language from an open dropdown.
    LanguageSelected { id: MessageId, language: String },
    /// A click landed outside every dropdown.
    ClickedOutside,
    /// User clicked Translate on a message.
    TranslateClicked(MessageId),
    /// User clicked Summarize; opens the summary options dialog.
    SummarizeClicked(MessageId),
    /// User edited the options in the open summary dialog.
    SummaryOptionsChanged(SummaryOptions),
    /// User confirmed the summary dialog.
    SummaryConfirmed,
    /// User closed the summary dialog without summarizing.
    SummaryDialogDismissed,
    /// Model download progress reported while a capability instance is created.
    DownloadProgress { capability: Capability, percent: u8 },
    /// Engine finished language detection for a message.
    DetectionFinished {
        id: MessageId,
        result: Result<String, CapabilityError>,
    },
    /// Engine finished a translation for a message.
    TranslationFinished {
        id: MessageId,
        target: String,
        result: Result<String, CapabilityError>,
    },
    /// Engine finished a summary for a message.
    SummaryFinished {
        id: MessageId,
        result: Result<String, CapabilityError>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
