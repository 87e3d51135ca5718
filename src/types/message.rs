use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sent message, as returned by the client's send operations.
///
/// Only the fields the story layer consumes are modeled here; the full
/// message type lives with the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub date: Option<DateTime<Utc>>,
    pub text: Option<String>,
    pub caption: Option<String>,
    /// Set when the message was sent in reply to a story.
    pub reply_to_story_id: Option<i64>,
}
