use super::{InputFile, MessageEntity, ParseMode};

/// One element of a media group (album).
#[derive(Clone, Debug, PartialEq)]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputMediaPhoto {
    pub media: InputFile,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub has_spoiler: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputMediaVideo {
    pub media: InputFile,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub has_spoiler: bool,
    pub width: i32,
    pub height: i32,
    pub duration: i32,
    pub supports_streaming: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputMediaAudio {
    pub media: InputFile,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub duration: i32,
    pub performer: Option<String>,
    pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputMediaDocument {
    pub media: InputFile,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
}
