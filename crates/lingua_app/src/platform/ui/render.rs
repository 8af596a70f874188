use chrono::{DateTime, Local, Utc};
use lingua_core::{AppViewModel, Capability, CapabilityPhase, MessageView, SUPPORTED_LANGUAGES};

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if view.messages.is_empty() {
        lines.push("The magic happens when you type something below...".to_string());
    }
    for (index, message) in view.messages.iter().enumerate() {
        lines.extend(render_message(index + 1, message));
    }

    if let Some(progress) = view.download {
        lines.push(format!(
            "Downloading {} model: {}%",
            capability_label(progress.capability),
            progress.percent
        ));
    }
    if let Some(dialog) = &view.summary_dialog {
        let number = view
            .messages
            .iter()
            .position(|message| message.id == dialog.message_id)
            .map_or_else(|| "?".to_string(), |i| (i + 1).to_string());
        lines.push(format!(
            "Summary options for #{number}: type={} format={} length={}  (:go / :cancel)",
            dialog.options.kind.token(),
            dialog.options.format.token(),
            dialog.options.length.token()
        ));
    }
    if let Some(error) = &view.input_error {
        lines.push(format!("! {error}"));
    }
    lines
}

fn render_message(number: usize, message: &MessageView) -> Vec<String> {
    let mut lines = vec![format!(
        "[#{number}] {} {}",
        format_time(message.timestamp),
        message.text
    )];

    lines.push(match &message.detection {
        CapabilityPhase::Busy => "    Detecting language...".to_string(),
        CapabilityPhase::Failed(error) => format!("    ! {error}"),
        CapabilityPhase::Done(label) => format!("    Detected language: {label}"),
        CapabilityPhase::Idle => String::new(),
    });

    let translate = if message.can_translate {
        "Translate"
    } else if matches!(message.translation, CapabilityPhase::Busy) {
        "Translating..."
    } else {
        "Translate (disabled)"
    };
    let summarize = if message.can_summarize {
        "Summarize"
    } else if matches!(message.summary, CapabilityPhase::Busy) {
        "Summarizing..."
    } else {
        "Summarize (disabled)"
    };
    lines.push(format!(
        "    Translate to: {} [{}] | {translate} | {summarize}",
        message.selected_label,
        if message.dropdown_open { "^" } else { "v" }
    ));
    if message.dropdown_open {
        for language in SUPPORTED_LANGUAGES {
            let marker = if language.code == message.selected_language {
                "*"
            } else {
                " "
            };
            lines.push(format!("      {marker} {} ({})", language.label, language.code));
        }
    }

    match &message.translation {
        CapabilityPhase::Busy => lines.push("    Translation in progress...".to_string()),
        CapabilityPhase::Failed(error) => lines.push(format!("    ! {error}")),
        CapabilityPhase::Done(text) => lines.push(format!(
            "    [{}] {text}",
            message.translated_to_label.as_deref().unwrap_or("Translation")
        )),
        CapabilityPhase::Idle => {}
    }
    match &message.summary {
        CapabilityPhase::Busy => lines.push("    Summarizing...".to_string()),
        CapabilityPhase::Failed(error) => lines.push(format!("    ! {error}")),
        CapabilityPhase::Done(summary) => {
            lines.push("    [Summary]".to_string());
            lines.extend(summary.lines().map(|line| format!("    {line}")));
        }
        CapabilityPhase::Idle => {}
    }

    lines.retain(|line| !line.is_empty());
    lines
}

fn capability_label(capability: Capability) -> &'static str {
    match capability {
        Capability::Detection => "language detection",
        Capability::Translation => "translation",
        Capability::Summarization => "summarization",
    }
}

fn format_time(timestamp_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms) {
        Some(utc) => utc.with_timezone(&Local).format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use lingua_core::{update, AppState, Effect, Msg};

    use super::*;

    fn submitted() -> AppState {
        let (state, _) = update(
            AppState::new(),
            Msg::InputChanged("Bonjour, comment allez-vous aujourd'hui?".to_string()),
        );
        let (state, _) = update(state, Msg::SubmitClicked { now_ms: 0 });
        state
    }

    #[test]
    fn empty_view_shows_placeholder() {
        let lines = render(&AppViewModel::default());
        assert_eq!(lines, vec!["The magic happens when you type something below..."]);
    }

    #[test]
    fn detecting_message_disables_actions() {
        let lines = render(&submitted().view());
        assert!(lines[0].ends_with("Bonjour, comment allez-vous aujourd'hui?"));
        assert_eq!(lines[1], "    Detecting language...");
        assert!(lines[2].contains("Translate (disabled)"));
        assert!(lines[2].contains("Summarize (disabled)"));
    }

    #[test]
    fn open_dropdown_lists_supported_languages() {
        let state = submitted();
        let id = state.messages()[0].id.clone();
        let (state, _) = update(
            state,
            Msg::DetectionFinished {
                id: id.clone(),
                result: Ok("fr".to_string()),
            },
        );
        let (state, _) = update(state, Msg::DropdownToggled(id));

        let lines = render(&state.view());
        assert_eq!(lines[1], "    Detected language: French");
        assert!(lines[2].contains("Translate to: English [^] | Translate | Summarize"));
        assert!(lines.contains(&"      * English (en)".to_string()));
        assert!(lines.contains(&"        French (fr)".to_string()));
    }

    #[test]
    fn translation_result_is_labelled() {
        let state = submitted();
        let id = state.messages()[0].id.clone();
        let (state, _) = update(
            state,
            Msg::DetectionFinished {
                id: id.clone(),
                result: Ok("fr".to_string()),
            },
        );
        let (state, effects) = update(state, Msg::TranslateClicked(id.clone()));
        assert!(matches!(effects[0], Effect::Translate { .. }));
        assert!(render(&state.view()).contains(&"    Translation in progress...".to_string()));

        let (state, _) = update(
            state,
            Msg::TranslationFinished {
                id,
                target: "en".to_string(),
                result: Ok("Hello, how are you today?".to_string()),
            },
        );
        assert!(render(&state.view()).contains(&"    [English] Hello, how are you today?".to_string()));
    }
}
