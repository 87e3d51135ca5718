//! Normalized domain objects built from the wire shapes in [`crate::raw`].

mod animation;
mod chat;
mod exported_story_link;
mod input_file;
mod input_media;
mod message;
mod message_entity;
mod parse_mode;
mod photo;
mod reply_markup;
mod story;
mod story_deleted;
mod story_skipped;
mod story_views;
mod user;
mod video;

pub use animation::Animation;
pub use chat::Chat;
pub use exported_story_link::ExportedStoryLink;
pub use input_file::InputFile;
pub use input_media::{
    InputMedia, InputMediaAudio, InputMediaDocument, InputMediaPhoto,
    InputMediaVideo,
};
pub use message::Message;
pub use message_entity::{MessageEntity, MessageEntityKind};
pub use parse_mode::ParseMode;
pub use photo::Photo;
pub use reply_markup::{
    ForceReply, InlineButtonAction, InlineKeyboardButton,
    InlineKeyboardMarkup, ReplyKeyboardMarkup, ReplyKeyboardRemove,
    ReplyMarkup,
};
pub use story::{Story, StoryMedia, StoryPrivacy, StorySender, StoryUpdate};
pub use story_deleted::StoryDeleted;
pub use story_skipped::StorySkipped;
pub use story_views::StoryViews;
pub use user::User;
pub use video::Video;
