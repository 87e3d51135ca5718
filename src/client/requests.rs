//! Optional-parameter blocks for the client's send and edit operations.
//!
//! Required parameters travel as plain arguments; everything a caller may
//! omit lives in one of these structs, so call sites read
//! `client.send_photo(chat_id, photo, Default::default())`.

use chrono::{DateTime, Utc};

use crate::types::{
    InputFile, MessageEntity, ParseMode, ReplyMarkup, StoryPrivacy,
};

#[derive(Clone, Debug, Default)]
pub struct SendMessageOptions {
    pub parse_mode: Option<ParseMode>,
    pub entities: Option<Vec<MessageEntity>>,
    pub disable_web_page_preview: bool,
    pub disable_notification: bool,
    /// Id of the story this message replies to.
    pub reply_to_story_id: Option<i64>,
    pub schedule_date: Option<DateTime<Utc>>,
    pub protect_content: bool,
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Clone, Debug, Default)]
pub struct SendAnimationOptions {
    pub caption: String,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub has_spoiler: bool,
    pub duration: i32,
    pub width: i32,
    pub height: i32,
    pub thumb: Option<InputFile>,
    pub file_name: Option<String>,
    pub disable_notification: bool,
    pub reply_to_story_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Clone, Debug, Default)]
pub struct SendAudioOptions {
    pub caption: String,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub duration: i32,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub thumb: Option<InputFile>,
    pub file_name: Option<String>,
    pub disable_notification: bool,
    pub reply_to_story_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Clone, Debug, Default)]
pub struct SendCachedMediaOptions {
    pub caption: String,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub disable_notification: bool,
    pub reply_to_story_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Clone, Debug, Default)]
pub struct SendMediaGroupOptions {
    pub disable_notification: bool,
    pub reply_to_story_id: Option<i64>,
}

#[derive(Clone, Debug, Default)]
pub struct SendPhotoOptions {
    pub caption: String,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub has_spoiler: bool,
    pub ttl_seconds: Option<i32>,
    pub disable_notification: bool,
    pub reply_to_story_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Clone, Debug, Default)]
pub struct SendStickerOptions {
    pub disable_notification: bool,
    pub reply_to_story_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Clone, Debug)]
pub struct SendVideoOptions {
    pub caption: String,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub has_spoiler: bool,
    pub ttl_seconds: Option<i32>,
    pub duration: i32,
    pub width: i32,
    pub height: i32,
    pub thumb: Option<InputFile>,
    pub file_name: Option<String>,
    pub supports_streaming: bool,
    pub disable_notification: bool,
    pub reply_to_story_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl Default for SendVideoOptions {
    fn default() -> Self {
        Self {
            caption: String::new(),
            parse_mode: None,
            caption_entities: None,
            has_spoiler: false,
            ttl_seconds: None,
            duration: 0,
            width: 0,
            height: 0,
            thumb: None,
            file_name: None,
            // Uploaded videos are assumed streamable unless stated otherwise.
            supports_streaming: true,
            disable_notification: false,
            reply_to_story_id: None,
            reply_markup: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SendVideoNoteOptions {
    pub duration: i32,
    /// Video notes are square; this is their edge length.
    pub length: i32,
    pub thumb: Option<InputFile>,
    pub disable_notification: bool,
    pub reply_to_story_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

impl Default for SendVideoNoteOptions {
    fn default() -> Self {
        Self {
            duration: 0,
            length: 1,
            thumb: None,
            disable_notification: false,
            reply_to_story_id: None,
            reply_markup: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SendVoiceOptions {
    pub caption: String,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub duration: i32,
    pub disable_notification: bool,
    pub reply_to_story_id: Option<i64>,
    pub reply_markup: Option<ReplyMarkup>,
}

/// Everything an edit can change on a story. Unset fields are left as they
/// are.
#[derive(Clone, Debug, Default)]
pub struct EditStoryOptions {
    pub privacy: Option<StoryPrivacy>,
    pub allowed_users: Option<Vec<i64>>,
    pub denied_users: Option<Vec<i64>>,
    pub allowed_chats: Option<Vec<i64>>,
    pub denied_chats: Option<Vec<i64>>,
    pub animation: Option<InputFile>,
    pub photo: Option<InputFile>,
    pub video: Option<InputFile>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
}
