use engine_logging::{engine_debug, engine_info};

use crate::languages;
use crate::{
    AppState, Capability, CapabilityError, DownloadProgress, Effect, MessageId, Msg,
    SummaryDialog, SummaryOptions,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked { now_ms } => match state.validated_input() {
            Ok(text) => {
                let id = state.push_message(text.clone(), now_ms);
                engine_info!("Message {} submitted ({} chars)", id, text.chars().count());
                vec![Effect::Detect { id, text }, Effect::PersistSnapshot]
            }
            Err(err) => {
                engine_debug!("Input rejected: {}", err);
                state.reject_input(err);
                Vec::new()
            }
        },
        Msg::Restore(snapshot) => {
            engine_info!("Restoring {} messages", snapshot.messages.len());
            state.restore(snapshot);
            Vec::new()
        }
        Msg::DropdownToggled(id) => persist_if(state.toggle_dropdown(&id)),
        Msg::LanguageSelected { id, language } => select_language(&mut state, &id, language),
        Msg::ClickedOutside => persist_if(state.close_all_dropdowns()),
        Msg::TranslateClicked(id) => start_translation(&mut state, &id),
        Msg::SummarizeClicked(id) => {
            open_summary_dialog(&mut state, id);
            Vec::new()
        }
        Msg::SummaryOptionsChanged(options) => {
            if let Some(dialog) = state.summary_dialog_mut() {
                dialog.options = options;
            }
            Vec::new()
        }
        Msg::SummaryConfirmed => match state.take_summary_dialog() {
            Some(SummaryDialog {
                message_id,
                options,
            }) => start_summary(&mut state, &message_id, options),
            None => Vec::new(),
        },
        Msg::SummaryDialogDismissed => {
            state.take_summary_dialog();
            Vec::new()
        }
        Msg::DownloadProgress {
            capability,
            percent,
        } => {
            state.set_download(DownloadProgress {
                capability,
                percent,
            });
            Vec::new()
        }
        Msg::DetectionFinished { id, result } => {
            state.clear_download(Capability::Detection);
            match state.state_mut(&id) {
                Some(message_state) => {
                    message_state.finish_detection(result);
                    vec![Effect::PersistSnapshot]
                }
                None => Vec::new(),
            }
        }
        Msg::TranslationFinished { id, target, result } => {
            state.clear_download(Capability::Translation);
            match state.state_mut(&id) {
                Some(message_state) => {
                    message_state.finish_translation(target, result);
                    vec![Effect::PersistSnapshot]
                }
                None => Vec::new(),
            }
        }
        Msg::SummaryFinished { id, result } => {
            state.clear_download(Capability::Summarization);
            match state.state_mut(&id) {
                Some(message_state) => {
                    message_state.finish_summary(result);
                    vec![Effect::PersistSnapshot]
                }
                None => Vec::new(),
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn persist_if(changed: bool) -> Vec<Effect> {
    if changed {
        vec![Effect::PersistSnapshot]
    } else {
        Vec::new()
    }
}

fn select_language(state: &mut AppState, id: &MessageId, language: String) -> Vec<Effect> {
    if !languages::is_supported(&language) {
        engine_debug!("Ignoring selection of unsupported target {}", language);
        return Vec::new();
    }
    match state.state_mut(id) {
        Some(message_state) => {
            message_state.selected_language = language;
            message_state.is_open = false;
            vec![Effect::PersistSnapshot]
        }
        None => Vec::new(),
    }
}

fn start_translation(state: &mut AppState, id: &MessageId) -> Vec<Effect> {
    let Some(text) = state.message(id).map(|message| message.text.clone()) else {
        return Vec::new();
    };
    if state.message_state(id).is_some_and(|s| s.is_translating) {
        engine_debug!("Translation already running for {}", id);
        return Vec::new();
    }
    let Some(message_state) = state.state_mut(id) else {
        return Vec::new();
    };

    let source = message_state.detected_language.clone();
    let target = message_state.selected_language.clone();
    let rejection = if !message_state.is_supported || !languages::is_supported(&source) {
        Some(CapabilityError::UnsupportedLanguage)
    } else if source == target {
        Some(CapabilityError::SameLanguage)
    } else {
        None
    };
    if let Some(err) = rejection {
        engine_debug!("Translation of {} rejected: {}", id, err);
        message_state.reject_translation(&err);
        return vec![Effect::PersistSnapshot];
    }

    message_state.begin_translation();
    vec![
        Effect::Translate {
            id: id.clone(),
            text,
            source,
            target,
        },
        Effect::PersistSnapshot,
    ]
}

fn open_summary_dialog(state: &mut AppState, id: MessageId) {
    let Some(message_state) = state.message_state(&id) else {
        return;
    };
    if !message_state.is_supported || message_state.is_summarizing {
        engine_debug!("Summarize not available for {}", id);
        return;
    }
    state.open_summary_dialog(SummaryDialog {
        message_id: id,
        options: SummaryOptions::default(),
    });
}

fn start_summary(state: &mut AppState, id: &MessageId, options: SummaryOptions) -> Vec<Effect> {
    let Some(text) = state.message(id).map(|message| message.text.clone()) else {
        return Vec::new();
    };
    if state.message_state(id).is_some_and(|s| s.is_summarizing) {
        engine_debug!("Summary already running for {}", id);
        return Vec::new();
    }
    let Some(message_state) = state.state_mut(id) else {
        return Vec::new();
    };
    message_state.begin_summary();
    vec![
        Effect::Summarize {
            id: id.clone(),
            text,
            options,
        },
        Effect::PersistSnapshot,
    ]
}
