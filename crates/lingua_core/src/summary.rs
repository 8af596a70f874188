use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryKind {
    #[default]
    KeyPoints,
    TlDr,
    Teaser,
    Headline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    Markdown,
    PlainText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

/// Options handed to the summarizer when an instance is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryOptions {
    pub kind: SummaryKind,
    pub format: SummaryFormat,
    pub length: SummaryLength,
}

/// The summary-options dialog, open for exactly one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryDialog {
    pub message_id: crate::MessageId,
    pub options: SummaryOptions,
}

impl SummaryKind {
    pub const ALL: [SummaryKind; 4] = [
        SummaryKind::KeyPoints,
        SummaryKind::TlDr,
        SummaryKind::Teaser,
        SummaryKind::Headline,
    ];

    pub fn token(self) -> &'static str {
        match self {
            SummaryKind::KeyPoints => "key-points",
            SummaryKind::TlDr => "tl;dr",
            SummaryKind::Teaser => "teaser",
            SummaryKind::Headline => "headline",
        }
    }
}

impl SummaryFormat {
    pub const ALL: [SummaryFormat; 2] = [SummaryFormat::Markdown, SummaryFormat::PlainText];

    pub fn token(self) -> &'static str {
        match self {
            SummaryFormat::Markdown => "markdown",
            SummaryFormat::PlainText => "plain-text",
        }
    }
}

impl SummaryLength {
    pub const ALL: [SummaryLength; 3] = [
        SummaryLength::Short,
        SummaryLength::Medium,
        SummaryLength::Long,
    ];

    pub fn token(self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }
}

/// Returned when a token names no known option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown summary option `{0}`")]
pub struct UnknownSummaryOption(pub String);

macro_rules! from_token {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = UnknownSummaryOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|option| option.token().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| UnknownSummaryOption(wanted.to_string()))
            }
        }
    };
}

from_token!(SummaryKind);
from_token!(SummaryFormat);
from_token!(SummaryLength);
