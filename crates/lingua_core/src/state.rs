use std::collections::BTreeMap;

use crate::languages::DEFAULT_TARGET_LANGUAGE;
use crate::view_model::{AppViewModel, MessageView};
use crate::{Capability, InputError, Message, MessageId, MessageState, SummaryDialog};

pub const MIN_MESSAGE_CHARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_target_language: String,
    pub min_message_chars: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            min_message_chars: MIN_MESSAGE_CHARS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadProgress {
    pub capability: Capability,
    pub percent: u8,
}

/// Message store plus state map, as written to and read from persistence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub messages: Vec<Message>,
    pub states: BTreeMap<MessageId, MessageState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    settings: Settings,
    input: String,
    input_error: Option<InputError>,
    messages: Vec<Message>,
    states: BTreeMap<MessageId, MessageState>,
    download: Option<DownloadProgress>,
    summary_dialog: Option<SummaryDialog>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> AppViewModel {
        let messages = self
            .messages
            .iter()
            .filter_map(|message| {
                self.states
                    .get(&message.id)
                    .map(|state| MessageView::new(message, state))
            })
            .collect();
        AppViewModel {
            input: self.input.clone(),
            input_error: self.input_error.as_ref().map(ToString::to_string),
            messages,
            download: self
                .download
                .filter(|progress| progress.percent > 0 && progress.percent < 100),
            summary_dialog: self.summary_dialog.clone(),
            dirty: self.dirty,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            messages: self.messages.clone(),
            states: self.states.clone(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|message| &message.id == id)
    }

    pub fn message_state(&self, id: &MessageId) -> Option<&MessageState> {
        self.states.get(id)
    }

    pub fn input_error(&self) -> Option<&InputError> {
        self.input_error.as_ref()
    }

    pub fn summary_dialog(&self) -> Option<&SummaryDialog> {
        self.summary_dialog.as_ref()
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
        self.input_error = None;
        self.mark_dirty();
    }

    pub(crate) fn reject_input(&mut self, err: InputError) {
        self.input_error = Some(err);
        self.mark_dirty();
    }

    /// Trimmed input, or the reason it cannot be submitted.
    pub(crate) fn validated_input(&self) -> Result<String, InputError> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty);
        }
        let min = self.settings.min_message_chars;
        if trimmed.chars().count() < min {
            return Err(InputError::TooShort { min });
        }
        Ok(trimmed.to_string())
    }

    /// Appends a message with a detecting state and clears the input box.
    pub(crate) fn push_message(&mut self, text: String, now_ms: i64) -> MessageId {
        let id = self.next_message_id(now_ms);
        self.states.insert(
            id.clone(),
            MessageState::new_detecting(&self.settings.default_target_language),
        );
        self.messages.push(Message {
            id: id.clone(),
            text,
            timestamp: now_ms,
        });
        self.input.clear();
        self.input_error = None;
        self.mark_dirty();
        id
    }

    fn next_message_id(&self, now_ms: i64) -> MessageId {
        let mut candidate = now_ms;
        loop {
            let id = MessageId::new(candidate.to_string());
            if !self.states.contains_key(&id) {
                return id;
            }
            candidate += 1;
        }
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        let Snapshot { messages, mut states } = snapshot;
        for state in states.values_mut() {
            state.settle_after_restore();
        }
        // A message without a state record cannot be rendered or acted on.
        self.messages = messages
            .into_iter()
            .filter(|message| states.contains_key(&message.id))
            .collect();
        self.states = states;
        self.mark_dirty();
    }

    pub(crate) fn state_mut(&mut self, id: &MessageId) -> Option<&mut MessageState> {
        let state = self.states.get_mut(id)?;
        self.dirty = true;
        Some(state)
    }

    /// Opens `id`'s dropdown and closes all others, or closes it if it was open.
    pub(crate) fn toggle_dropdown(&mut self, id: &MessageId) -> bool {
        let Some(was_open) = self.states.get(id).map(|state| state.is_open) else {
            return false;
        };
        for state in self.states.values_mut() {
            state.is_open = false;
        }
        if let Some(state) = self.states.get_mut(id) {
            state.is_open = !was_open;
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn close_all_dropdowns(&mut self) -> bool {
        let mut changed = false;
        for state in self.states.values_mut().filter(|state| state.is_open) {
            state.is_open = false;
            changed = true;
        }
        if changed {
            self.mark_dirty();
        }
        changed
    }

    pub(crate) fn set_download(&mut self, progress: DownloadProgress) {
        self.download = if progress.percent >= 100 {
            None
        } else {
            Some(progress)
        };
        self.mark_dirty();
    }

    pub(crate) fn clear_download(&mut self, capability: Capability) {
        if self
            .download
            .is_some_and(|progress| progress.capability == capability)
        {
            self.download = None;
            self.mark_dirty();
        }
    }

    pub(crate) fn open_summary_dialog(&mut self, dialog: SummaryDialog) {
        self.summary_dialog = Some(dialog);
        self.mark_dirty();
    }

    pub(crate) fn summary_dialog_mut(&mut self) -> Option<&mut SummaryDialog> {
        let dialog = self.summary_dialog.as_mut()?;
        self.dirty = true;
        Some(dialog)
    }

    pub(crate) fn take_summary_dialog(&mut self) -> Option<SummaryDialog> {
        let dialog = self.summary_dialog.take()?;
        self.mark_dirty();
        Some(dialog)
    }
}
