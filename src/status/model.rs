//! Wire model of the meeting-presence endpoint.

use std::fmt;

use serde::Deserialize;

/// Top-level payload returned by the status endpoint.
///
/// `data` is an explicit `Option` rather than a presence check on a dynamic
/// object: a missing `data` field is the upstream contract being broken and
/// is surfaced as a validation failure by the fetcher.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<MeetingData>,
    #[serde(default)]
    pub shortcut_url: Option<String>,
}

/// Per-user meeting status inside `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingData {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub user_icon_url: Option<String>,
    pub in_meeting: bool,
    pub meeting_duration: DurationText,
}

/// Display-ready meeting duration.
///
/// The endpoint formats this server-side (`HH:MM:SS`), but the decoder also
/// accepts a bare number and shows it verbatim; no unit is assumed and no
/// formatting rule is invented here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DurationText {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for DurationText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationText::Text(text) => f.write_str(text),
            DurationText::Number(number) => write!(f, "{number}"),
        }
    }
}
