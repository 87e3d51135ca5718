//! The client collaborator the story layer forwards to.
//!
//! Transport, session handling and RPC framing live behind
//! [`TelegramClient`]; this crate only consumes the trait. Every method is a
//! suspension point and may fail with [`ServiceError`]; the story layer
//! neither retries nor wraps those failures.

mod error;
mod requests;

pub use error::ServiceError;
pub use requests::*;

use async_trait::async_trait;

use crate::types::{
    Chat, ExportedStoryLink, InputFile, InputMedia, Message, Story, User,
};

#[async_trait]
pub trait TelegramClient {
    /// The current authenticated account. Known from login, no network call.
    fn me(&self) -> &User;

    async fn get_user(&mut self, user_id: i64)
        -> Result<User, ServiceError>;

    async fn get_chat(&mut self, chat_id: i64) -> Result<Chat, ServiceError>;

    async fn send_message(
        &mut self,
        chat_id: i64,
        text: String,
        options: SendMessageOptions,
    ) -> Result<Message, ServiceError>;

    async fn send_animation(
        &mut self,
        chat_id: i64,
        animation: InputFile,
        options: SendAnimationOptions,
    ) -> Result<Message, ServiceError>;

    async fn send_audio(
        &mut self,
        chat_id: i64,
        audio: InputFile,
        options: SendAudioOptions,
    ) -> Result<Message, ServiceError>;

    async fn send_cached_media(
        &mut self,
        chat_id: i64,
        file_id: String,
        options: SendCachedMediaOptions,
    ) -> Result<Message, ServiceError>;

    async fn send_media_group(
        &mut self,
        chat_id: i64,
        media: Vec<InputMedia>,
        options: SendMediaGroupOptions,
    ) -> Result<Vec<Message>, ServiceError>;

    async fn send_photo(
        &mut self,
        chat_id: i64,
        photo: InputFile,
        options: SendPhotoOptions,
    ) -> Result<Message, ServiceError>;

    async fn send_sticker(
        &mut self,
        chat_id: i64,
        sticker: InputFile,
        options: SendStickerOptions,
    ) -> Result<Message, ServiceError>;

    async fn send_video(
        &mut self,
        chat_id: i64,
        video: InputFile,
        options: SendVideoOptions,
    ) -> Result<Message, ServiceError>;

    async fn send_video_note(
        &mut self,
        chat_id: i64,
        video_note: InputFile,
        options: SendVideoNoteOptions,
    ) -> Result<Message, ServiceError>;

    async fn send_voice(
        &mut self,
        chat_id: i64,
        voice: InputFile,
        options: SendVoiceOptions,
    ) -> Result<Message, ServiceError>;

    /// Deletes stories. `channel_id` is set for channel-posted stories and
    /// `None` for the current account's own.
    async fn delete_stories(
        &mut self,
        channel_id: Option<i64>,
        story_ids: Vec<i64>,
    ) -> Result<bool, ServiceError>;

    async fn edit_story(
        &mut self,
        channel_id: Option<i64>,
        story_id: i64,
        options: EditStoryOptions,
    ) -> Result<Story, ServiceError>;

    async fn export_story_link(
        &mut self,
        from_id: i64,
        story_id: i64,
    ) -> Result<ExportedStoryLink, ServiceError>;
}
