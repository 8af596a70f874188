//! Snapshot of the message store and state map in two JSON slots.

use std::collections::BTreeMap;

use engine_logging::{engine_error, engine_info, engine_warn};
use lingua_core::{languages, Message, MessageId, MessageState, Snapshot};
use lingua_engine::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const MESSAGES_SLOT: &str = "messages";
pub const MESSAGE_STATES_SLOT: &str = "messageStates";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedMessage {
    id: String,
    text: String,
    #[serde(default)]
    timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PersistedMessageState {
    is_detecting: bool,
    is_translating: bool,
    is_summarizing: bool,
    detected_language: String,
    detected_language_label: String,
    is_supported: bool,
    detection_error: Option<String>,
    selected_language: String,
    translated_text: String,
    translated_to_language: String,
    translation_error: Option<String>,
    summary: String,
    summary_error: Option<String>,
    is_open: bool,
}

impl Default for PersistedMessageState {
    fn default() -> Self {
        Self::from(&MessageState::new_detecting(
            languages::DEFAULT_TARGET_LANGUAGE,
        ))
    }
}

impl From<&MessageState> for PersistedMessageState {
    fn from(state: &MessageState) -> Self {
        Self {
            is_detecting: state.is_detecting,
            is_translating: state.is_translating,
            is_summarizing: state.is_summarizing,
            detected_language: state.detected_language.clone(),
            detected_language_label: state.detected_language_label.clone(),
            is_supported: state.is_supported,
            detection_error: state.detection_error.clone(),
            selected_language: state.selected_language.clone(),
            translated_text: state.translated_text.clone(),
            translated_to_language: state.translated_to_language.clone(),
            translation_error: state.translation_error.clone(),
            summary: state.summary.clone(),
            summary_error: state.summary_error.clone(),
            is_open: state.is_open,
        }
    }
}

impl From<PersistedMessageState> for MessageState {
    fn from(state: PersistedMessageState) -> Self {
        Self {
            is_detecting: state.is_detecting,
            is_translating: state.is_translating,
            is_summarizing: state.is_summarizing,
            detected_language: state.detected_language,
            detected_language_label: state.detected_language_label,
            is_supported: state.is_supported,
            detection_error: state.detection_error,
            selected_language: state.selected_language,
            translated_text: state.translated_text,
            translated_to_language: state.translated_to_language,
            translation_error: state.translation_error,
            summary: state.summary,
            summary_error: state.summary_error,
            is_open: state.is_open,
        }
    }
}

/// Reads both slots. Missing or unreadable slots restore as empty.
pub(crate) fn load_snapshot(store: &dyn KeyValueStore) -> Snapshot {
    let messages: Vec<PersistedMessage> = read_slot(store, MESSAGES_SLOT).unwrap_or_default();
    let states: BTreeMap<String, PersistedMessageState> =
        read_slot(store, MESSAGE_STATES_SLOT).unwrap_or_default();

    let snapshot = Snapshot {
        messages: messages
            .into_iter()
            .map(|message| Message {
                id: MessageId::new(message.id),
                text: message.text,
                timestamp: message.timestamp,
            })
            .collect(),
        states: states
            .into_iter()
            .map(|(id, state)| (MessageId::new(id), MessageState::from(state)))
            .collect(),
    };
    engine_info!(
        "Loaded {} persisted messages, {} states",
        snapshot.messages.len(),
        snapshot.states.len()
    );
    snapshot
}

/// Overwrites both slots. Failures are logged and otherwise ignored.
pub(crate) fn save_snapshot(store: &dyn KeyValueStore, snapshot: &Snapshot) {
    let messages: Vec<PersistedMessage> = snapshot
        .messages
        .iter()
        .map(|message| PersistedMessage {
            id: message.id.to_string(),
            text: message.text.clone(),
            timestamp: message.timestamp,
        })
        .collect();
    let states: BTreeMap<&str, PersistedMessageState> = snapshot
        .states
        .iter()
        .map(|(id, state)| (id.as_str(), PersistedMessageState::from(state)))
        .collect();

    write_slot(store, MESSAGES_SLOT, &messages);
    write_slot(store, MESSAGE_STATES_SLOT, &states);
}

fn read_slot<T: DeserializeOwned>(store: &dyn KeyValueStore, slot: &str) -> Option<T> {
    let text = match store.get(slot) {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(err) => {
            engine_warn!("Failed to read slot {}: {}", slot, err);
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(err) => {
            engine_warn!("Failed to parse slot {}: {}", slot, err);
            None
        }
    }
}

fn write_slot<T: Serialize>(store: &dyn KeyValueStore, slot: &str, value: &T) {
    let content = match serde_json::to_string(value) {
        Ok(text) => text,
        Err(err) => {
            engine_error!("Failed to serialize slot {}: {}", slot, err);
            return;
        }
    };
    if let Err(err) = store.set(slot, &content) {
        engine_error!("Failed to write slot {}: {}", slot, err);
    }
}
