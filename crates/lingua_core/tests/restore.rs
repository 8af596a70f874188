use lingua_core::{update, AppState, Effect, MessageId, Msg};
use pretty_assertions::assert_eq;

fn submit(state: AppState, text: &str, now_ms: i64) -> (AppState, MessageId) {
    let (state, _) = update(state, Msg::InputChanged(text.to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked { now_ms });
    let id = effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Detect { id, .. } => Some(id),
            _ => None,
        })
        .expect("detect effect");
    (state, id)
}

#[test]
fn settled_snapshot_restores_deep_equal() {
    let (state, first) = submit(AppState::new(), "Bonjour, comment allez-vous aujourd'hui?", 10);
    let (state, second) = submit(state, "Hello there, this is long enough.", 20);
    let (state, _) = update(
        state,
        Msg::DetectionFinished {
            id: first.clone(),
            result: Ok("fr".to_string()),
        },
    );
    let (state, _) = update(
        state,
        Msg::DetectionFinished {
            id: second.clone(),
            result: Ok("en".to_string()),
        },
    );
    let (state, _) = update(state, Msg::DropdownToggled(second));
    let (state, _) = update(state, Msg::TranslateClicked(first.clone()));
    let (state, _) = update(
        state,
        Msg::TranslationFinished {
            id: first,
            target: "en".to_string(),
            result: Ok("Hello, how are you today?".to_string()),
        },
    );

    let snapshot = state.snapshot();
    let (restored, effects) = update(AppState::new(), Msg::Restore(snapshot.clone()));

    assert!(effects.is_empty());
    assert_eq!(restored.snapshot(), snapshot);
    assert_eq!(restored.view().messages, state.view().messages);
}

#[test]
fn in_flight_operations_are_settled_on_restore() {
    let (state, id) = submit(AppState::new(), "Bonjour, comment allez-vous aujourd'hui?", 10);

    let (restored, _) = update(AppState::new(), Msg::Restore(state.snapshot()));
    let message_state = restored.message_state(&id).unwrap();
    assert!(!message_state.is_detecting);
    assert_eq!(
        message_state.detection_error.as_deref(),
        Some("Failed to detect language. Please try again.")
    );
}

#[test]
fn new_ids_do_not_collide_with_restored_ones() {
    let (state, id) = submit(AppState::new(), "Hello there, this is long enough.", 500);
    let (restored, _) = update(AppState::new(), Msg::Restore(state.snapshot()));

    let (restored, next_id) = submit(restored, "Another message that is long.", 500);
    assert_ne!(next_id, id);
    assert_eq!(restored.messages().len(), 2);
}
