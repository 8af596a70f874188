use crate::languages;
use crate::{
    CapabilityPhase, DownloadProgress, Message, MessageId, MessageState, SummaryDialog,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub input_error: Option<String>,
    pub messages: Vec<MessageView>,
    /// Only present while a model download is between 0 and 100 percent.
    pub download: Option<DownloadProgress>,
    pub summary_dialog: Option<SummaryDialog>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub id: MessageId,
    pub text: String,
    pub timestamp: i64,
    pub detection: CapabilityPhase,
    pub selected_language: String,
    pub selected_label: String,
    pub dropdown_open: bool,
    pub translation: CapabilityPhase,
    pub translated_to_label: Option<String>,
    pub summary: CapabilityPhase,
    pub can_translate: bool,
    pub can_summarize: bool,
}

impl MessageView {
    pub(crate) fn new(message: &Message, state: &MessageState) -> Self {
        let translated_to_label = if state.translated_to_language.is_empty() {
            None
        } else {
            Some(languages::label_for(&state.translated_to_language))
        };
        Self {
            id: message.id.clone(),
            text: message.text.clone(),
            timestamp: message.timestamp,
            detection: state.detection_phase(),
            selected_language: state.selected_language.clone(),
            selected_label: languages::label_for(&state.selected_language),
            dropdown_open: state.is_open,
            translation: state.translation_phase(),
            translated_to_label,
            summary: state.summary_phase(),
            can_translate: state.is_supported && !state.is_translating,
            can_summarize: state.is_supported && !state.is_summarizing,
        }
    }
}
