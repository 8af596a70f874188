//! Lingua core: pure message/state machine and view-model helpers.
mod effect;
mod error;
pub mod languages;
mod message;
mod msg;
mod state;
mod summary;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::{Capability, CapabilityError, InputError, UNSUPPORTED_FOR_TRANSLATION};
pub use languages::{Language, SUPPORTED_LANGUAGES};
pub use message::{CapabilityPhase, Message, MessageId, MessageState};
pub use msg::Msg;
pub use state::{AppState, DownloadProgress, Settings, Snapshot, MIN_MESSAGE_CHARS};
pub use summary::{
    SummaryDialog, SummaryFormat, SummaryKind, SummaryLength, SummaryOptions,
    UnknownSummaryOption,
};
pub use update::update;
pub use view_model::{AppViewModel, MessageView};
