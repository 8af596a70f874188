use crate::{MessageId, SummaryOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Detect {
        id: MessageId,
        text: String,
    },
    Translate {
        id: MessageId,
        text: String,
        source: String,
        target: String,
    },
    Summarize {
        id: MessageId,
        text: String,
        options: SummaryOptions,
    },
    /// The message store or state map changed; write `AppState::snapshot()`.
    PersistSnapshot,
}
