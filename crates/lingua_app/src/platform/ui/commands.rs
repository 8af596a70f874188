//! Line commands typed into the terminal, resolved against the current view.

use lingua_core::{
    AppViewModel, Msg, SummaryFormat, SummaryKind, SummaryLength, SummaryOptions,
    UnknownSummaryOption,
};
use thiserror::Error;

pub const HELP: &str = "\
Type a message and press Enter to send it.
  :list               show all messages
  :open N             toggle the target-language list of message N
  :lang N CODE        pick the target language of message N
  :close              close every language list
  :translate N        translate message N
  :summarize N        open summary options for message N
  :type KIND          key-points | tl;dr | teaser | headline
  :format FMT         markdown | plain-text
  :length LEN         short | medium | long
  :go                 summarize with the chosen options
  :cancel             close the summary options
  :help               show this help
  :quit               exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(String),
    List,
    Toggle(usize),
    Select(usize, String),
    CloseAll,
    Translate(usize),
    Summarize(usize),
    Kind(SummaryKind),
    Format(SummaryFormat),
    Length(SummaryLength),
    Confirm,
    Cancel,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`, try :help")]
    Unknown(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a message number")]
    BadNumber(String),
    #[error("there is no message {0}")]
    NoSuchMessage(usize),
    #[error("summary options are not open, use :summarize N first")]
    NoDialog,
    #[error(transparent)]
    BadOption(#[from] UnknownSummaryOption),
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Send(line.to_string()));
    };
    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or_default();
    let command = match name {
        "list" => Command::List,
        "open" => Command::Toggle(number(words.next())?),
        "lang" => {
            let index = number(words.next())?;
            let code = words.next().ok_or(CommandError::MissingArgument("language code"))?;
            Command::Select(index, code.to_string())
        }
        "close" => Command::CloseAll,
        "translate" => Command::Translate(number(words.next())?),
        "summarize" => Command::Summarize(number(words.next())?),
        "type" => Command::Kind(argument(words.next(), "summary type")?.parse()?),
        "format" => Command::Format(argument(words.next(), "summary format")?.parse()?),
        "length" => Command::Length(argument(words.next(), "summary length")?.parse()?),
        "go" => Command::Confirm,
        "cancel" => Command::Cancel,
        "help" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

/// Messages for a command. `List`, `Help` and `Quit` are handled by the caller.
pub fn to_msgs(
    command: Command,
    view: &AppViewModel,
    now_ms: i64,
) -> Result<Vec<Msg>, CommandError> {
    let msgs = match command {
        Command::Send(text) => vec![Msg::InputChanged(text), Msg::SubmitClicked { now_ms }],
        Command::Toggle(index) => vec![Msg::DropdownToggled(message_id(view, index)?)],
        Command::Select(index, language) => vec![Msg::LanguageSelected {
            id: message_id(view, index)?,
            language,
        }],
        Command::CloseAll => vec![Msg::ClickedOutside],
        Command::Translate(index) => vec![Msg::TranslateClicked(message_id(view, index)?)],
        Command::Summarize(index) => vec![Msg::SummarizeClicked(message_id(view, index)?)],
        Command::Kind(kind) => vec![Msg::SummaryOptionsChanged(SummaryOptions {
            kind,
            ..dialog_options(view)?
        })],
        Command::Format(format) => vec![Msg::SummaryOptionsChanged(SummaryOptions {
            format,
            ..dialog_options(view)?
        })],
        Command::Length(length) => vec![Msg::SummaryOptionsChanged(SummaryOptions {
            length,
            ..dialog_options(view)?
        })],
        Command::Confirm => {
            dialog_options(view)?;
            vec![Msg::SummaryConfirmed]
        }
        Command::Cancel => vec![Msg::SummaryDialogDismissed],
        Command::List | Command::Help | Command::Quit => Vec::new(),
    };
    Ok(msgs)
}

fn number(word: Option<&str>) -> Result<usize, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument("message number"))?;
    word.parse()
        .map_err(|_| CommandError::BadNumber(word.to_string()))
}

fn argument<'a>(word: Option<&'a str>, what: &'static str) -> Result<&'a str, CommandError> {
    word.ok_or(CommandError::MissingArgument(what))
}

fn message_id(view: &AppViewModel, index: usize) -> Result<lingua_core::MessageId, CommandError> {
    index
        .checked_sub(1)
        .and_then(|i| view.messages.get(i))
        .map(|message| message.id.clone())
        .ok_or(CommandError::NoSuchMessage(index))
}

fn dialog_options(view: &AppViewModel) -> Result<SummaryOptions, CommandError> {
    view.summary_dialog
        .as_ref()
        .map(|dialog| dialog.options)
        .ok_or(CommandError::NoDialog)
}
