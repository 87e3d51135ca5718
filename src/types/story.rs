use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    client::{
        EditStoryOptions, SendAnimationOptions, SendAudioOptions,
        SendCachedMediaOptions, SendMediaGroupOptions, SendMessageOptions,
        SendPhotoOptions, SendStickerOptions, SendVideoNoteOptions,
        SendVideoOptions, SendVoiceOptions, ServiceError, TelegramClient,
    },
    raw,
    types::{
        Animation, Chat, ExportedStoryLink, InputFile, InputMedia, Message,
        MessageEntity, ParseMode, Photo, StoryDeleted, StorySkipped,
        StoryViews, User, Video,
    },
    utils::timestamp_to_datetime,
};

/// Who posted a story: a user or a channel, never both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StorySender {
    User(User),
    Chat(Chat),
}

impl StorySender {
    /// Resolves the owning peer of a story stream. Channel and user peers
    /// require a lookup through the client; the "self" sentinel uses the
    /// account the client already knows.
    pub(crate) async fn resolve<C>(
        client: &mut C,
        peer: raw::Peer,
    ) -> Result<Self, ServiceError>
    where
        C: TelegramClient + Send,
    {
        match peer {
            raw::Peer::Channel { channel_id } => {
                Ok(Self::Chat(client.get_chat(channel_id).await?))
            },
            raw::Peer::Myself => Ok(Self::User(client.me().clone())),
            raw::Peer::User { user_id } => {
                Ok(Self::User(client.get_user(user_id).await?))
            },
        }
    }

    pub fn from_user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            Self::Chat(_) => None,
        }
    }

    pub fn sender_chat(&self) -> Option<&Chat> {
        match self {
            Self::User(_) => None,
            Self::Chat(chat) => Some(chat),
        }
    }

    /// The id messages to this story's author are addressed to.
    pub fn id(&self) -> i64 {
        match self {
            Self::User(user) => user.id,
            Self::Chat(chat) => chat.id,
        }
    }

    /// Channel id for story management calls; `None` for a user-posted
    /// story, meaning "the current account's own stories".
    pub(crate) fn channel_id(&self) -> Option<i64> {
        match self {
            Self::User(_) => None,
            Self::Chat(chat) => Some(chat.id),
        }
    }
}

/// Media carried by a story. Exactly one variant is active; a story with
/// unclassifiable media carries no `StoryMedia` at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StoryMedia {
    Animation(Animation),
    Photo(Photo),
    Video(Video),
}

impl StoryMedia {
    /// Classifies raw story media into a descriptor.
    ///
    /// Documents with the animated attribute are animations even when a
    /// video attribute co-occurs; the video attribute then only supplies
    /// duration and dimensions. Anything unrecognized classifies as `None`,
    /// deliberately without error.
    pub fn from_raw(media: &raw::MessageMedia) -> Option<Self> {
        match media {
            raw::MessageMedia::Photo {
                photo: Some(photo),
                ttl_seconds,
            } => Some(Self::Photo(Photo::from_raw(photo, *ttl_seconds))),
            raw::MessageMedia::Document {
                document: Some(document),
                ttl_seconds,
            } => {
                if document.is_animated() {
                    Some(Self::Animation(Animation::from_raw(
                        document,
                        document.video_attribute(),
                    )))
                } else if let Some(video) = document.video_attribute() {
                    Some(Self::Video(Video::from_raw(
                        document,
                        Some(video),
                        *ttl_seconds,
                    )))
                } else {
                    tracing::debug!(
                        document = document.id,
                        "document is neither video nor animation, \
                         story media left unclassified"
                    );
                    None
                }
            },
            _ => {
                tracing::debug!(
                    "unrecognized story media, left unclassified"
                );
                None
            },
        }
    }

    pub fn animation(&self) -> Option<&Animation> {
        match self {
            Self::Animation(animation) => Some(animation),
            _ => None,
        }
    }

    pub fn photo(&self) -> Option<&Photo> {
        match self {
            Self::Photo(photo) => Some(photo),
            _ => None,
        }
    }

    pub fn video(&self) -> Option<&Video> {
        match self {
            Self::Video(video) => Some(video),
            _ => None,
        }
    }
}

/// Story privacy rules, as set through [`Story::edit_privacy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryPrivacy {
    Public,
    CloseFriends,
    Contacts,
    SelectedUsers,
    NoContacts,
}

/// Result of decoding a wire story record: the full story, or one of the
/// two degenerate markers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StoryUpdate {
    Story(Story),
    Skipped(StorySkipped),
    Deleted(StoryDeleted),
}

impl StoryUpdate {
    pub fn id(&self) -> i64 {
        match self {
            Self::Story(story) => story.id,
            Self::Skipped(skipped) => skipped.id,
            Self::Deleted(deleted) => deleted.id,
        }
    }

    pub fn story(self) -> Option<Story> {
        match self {
            Self::Story(story) => Some(story),
            _ => None,
        }
    }
}

/// A story, decoded and normalized from its wire record.
///
/// Immutable after decoding. The bound methods are shortcuts that forward
/// to the same-named client operations with the story's own id and author
/// pre-filled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Unique within the sender's story stream.
    pub id: i64,
    pub sender: StorySender,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub date: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub expire_date: Option<DateTime<Utc>>,
    pub media: Option<StoryMedia>,
    /// True if the story can't be forwarded.
    pub has_protected_content: bool,
    pub edited: bool,
    pub pinned: bool,
    // Visibility flags come off the wire as independent booleans and are
    // passed through without enforcing mutual exclusion.
    pub public: bool,
    pub close_friends: bool,
    pub contacts: bool,
    pub selected_contacts: bool,
    pub caption: Option<String>,
    /// Absent rather than empty when no entity survived decoding.
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub views: Option<StoryViews>,
}

impl Story {
    /// Decodes a wire story record owned by `peer`.
    ///
    /// Skipped and deleted records dispatch to their marker decoders before
    /// any full-field work. Resolving the author may perform a network
    /// round-trip; failures there propagate unchanged. Malformed caption
    /// entities and unclassifiable media degrade silently instead.
    pub async fn from_raw<C>(
        client: &mut C,
        item: raw::StoryItem,
        peer: raw::Peer,
    ) -> Result<StoryUpdate, ServiceError>
    where
        C: TelegramClient + Send,
    {
        let full = match item {
            raw::StoryItem::Skipped(skipped) => {
                return Ok(StoryUpdate::Skipped(
                    StorySkipped::from_raw(client, &skipped, peer).await?,
                ));
            },
            raw::StoryItem::Deleted(deleted) => {
                return Ok(StoryUpdate::Deleted(
                    StoryDeleted::from_raw(client, &deleted, peer).await?,
                ));
            },
            raw::StoryItem::Full(full) => full,
        };

        let entities: Vec<MessageEntity> = full
            .entities
            .iter()
            .filter_map(MessageEntity::from_raw)
            .collect();
        let media = full.media.as_ref().and_then(StoryMedia::from_raw);
        let sender = StorySender::resolve(client, peer).await?;

        Ok(StoryUpdate::Story(Story {
            id: full.id,
            sender,
            date: timestamp_to_datetime(full.date),
            expire_date: timestamp_to_datetime(full.expire_date),
            media,
            has_protected_content: full.noforwards,
            edited: full.edited,
            pinned: full.pinned,
            public: full.public,
            close_friends: full.close_friends,
            contacts: full.contacts,
            selected_contacts: full.selected_contacts,
            caption: full.caption.clone(),
            caption_entities: if entities.is_empty() {
                None
            } else {
                Some(entities)
            },
            views: full.views.as_ref().map(StoryViews::from_raw),
        }))
    }

    pub fn from_user(&self) -> Option<&User> {
        self.sender.from_user()
    }

    pub fn sender_chat(&self) -> Option<&Chat> {
        self.sender.sender_chat()
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.media.as_ref().and_then(StoryMedia::animation)
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.media.as_ref().and_then(StoryMedia::photo)
    }

    pub fn video(&self) -> Option<&Video> {
        self.media.as_ref().and_then(StoryMedia::video)
    }

    /// Replies to this story with a text message.
    ///
    /// Shortcut for [`TelegramClient::send_message`] addressed to the
    /// story's author, with the reply target defaulted to this story.
    pub async fn reply_text<C>(
        &self,
        client: &mut C,
        text: impl Into<String> + Send,
        mut options: SendMessageOptions,
    ) -> Result<Message, ServiceError>
    where
        C: TelegramClient + Send,
    {
        options.reply_to_story_id.get_or_insert(self.id);
        client
            .send_message(self.sender.id(), text.into(), options)
            .await
    }

    /// Alias for [`Story::reply_text`].
    pub async fn reply<C>(
        &self,
        client: &mut C,
        text: impl Into<String> + Send,
        options: SendMessageOptions,
    ) -> Result<Message, ServiceError>
    where
        C: TelegramClient + Send,
    {
        self.reply_text(client, text, options).await
    }

    /// Replies to this story with an animation.
    pub async fn reply_animation<C>(
        &self,
        client: &mut C,
        animation: InputFile,
        mut options: SendAnimationOptions,
    ) -> Result<Message, ServiceError>
    where
        C: TelegramClient + Send,
    {
        options.reply_to_story_id.get_or_insert(self.id);
        client
            .send_animation(self.sender.id(), animation, options)
            .await
    }

    /// Replies to this story with an audio file.
    pub async fn reply_audio<C>(
        &self,
        client: &mut C,
        audio: InputFile,
        mut options: SendAudioOptions,
    ) -> Result<Message, ServiceError>
    where
        C: TelegramClient + Send,
    {
        options.reply_to_story_id.get_or_insert(self.id);
        client.send_audio(self.sender.id(), audio, options).await
    }

    /// Replies to this story with media that already exists on the Telegram
    /// servers.
    pub async fn reply_cached_media<C>(
        &self,
        client: &mut C,
        file_id: impl Into<String> + Send,
        mut options: SendCachedMediaOptions,
    ) -> Result<Message, ServiceError>
    where
        C: TelegramClient + Send,
    {
        options.reply_to_story_id.get_or_insert(self.id);
        client
            .send_cached_media(self.sender.id(), file_id.into(), options)
            .await
    }

    /// Replies to this story with an album of photos and videos.
    pub async fn reply_media_group<C>(
        &self,
        client: &mut C,
        media: Vec<InputMedia>,
        mut options: SendMediaGroupOptions,
    ) -> Result<Vec<Message>, ServiceError>
    where
        C: TelegramClient + Send,
    {
        options.reply_to_story_id.get_or_insert(self.id);
        client
            .send_media_group(self.sender.id(), media, options)
            .await
    }

    /// Replies to this story with a photo.
    pub async fn reply_photo<C>(
        &self,
        client: &mut C,
        photo: InputFile,
        mut options: SendPhotoOptions,
    ) -> Result<Message, ServiceError>
    where
        C: TelegramClient + Send,
    {
        options.reply_to_story_id.get_or_insert(self.id);
        client.send_photo(self.sender.id(), photo, options).await
    }

    /// Replies to this story with a sticker.
    pub async fn reply_sticker<C>(
        &self,
        client: &mut C,
        sticker: InputFile,
        mut options: SendStickerOptions,
    ) -> Result<Message, ServiceError>
    where
        C: TelegramClient + Send,
    {
        options.reply_to_story_id.get_or_insert(self.id);
        client
            .send_sticker(self.sender.id(), sticker, options)
            .await
    }

    /// Replies to this story with a video.
    pub async fn reply_video<C>(
        &self,
        client: &mut C,
        video: InputFile,
        mut options: SendVideoOptions,
    ) -> Result<Message, ServiceError>
    where
        C: TelegramClient + Send,
    {
        options.reply_to_story_id.get_or_insert(self.id);
        client.send_video(self.sender.id(), video, options).await
    }

    /// Replies to this story with a round video note.
    pub async fn reply_video_note<C>(
        &self,
        client: &mut C,
        video_note: InputFile,
        mut options: SendVideoNoteOptions,
    ) -> Result<Message, ServiceError>
    where
        C: TelegramClient + Send,
    {
        options.reply_to_story_id.get_or_insert(self.id);
        client
            .send_video_note(self.sender.id(), video_note, options)
            .await
    }

    /// Replies to this story with a voice message.
    pub async fn reply_voice<C>(
        &self,
        client: &mut C,
        voice: InputFile,
        mut options: SendVoiceOptions,
    ) -> Result<Message, ServiceError>
    where
        C: TelegramClient + Send,
    {
        options.reply_to_story_id.get_or_insert(self.id);
        client.send_voice(self.sender.id(), voice, options).await
    }

    /// Deletes this story.
    pub async fn delete<C>(
        &self,
        client: &mut C,
    ) -> Result<bool, ServiceError>
    where
        C: TelegramClient + Send,
    {
        client
            .delete_stories(self.sender.channel_id(), vec![self.id])
            .await
    }

    /// Edits this story: media, caption and privacy in one call.
    pub async fn edit<C>(
        &self,
        client: &mut C,
        options: EditStoryOptions,
    ) -> Result<Story, ServiceError>
    where
        C: TelegramClient + Send,
    {
        client
            .edit_story(self.sender.channel_id(), self.id, options)
            .await
    }

    /// Replaces this story's media with an animation.
    pub async fn edit_animation<C>(
        &self,
        client: &mut C,
        animation: InputFile,
    ) -> Result<Story, ServiceError>
    where
        C: TelegramClient + Send,
    {
        self.edit(
            client,
            EditStoryOptions {
                animation: Some(animation),
                ..Default::default()
            },
        )
        .await
    }

    /// Edits this story's caption.
    pub async fn edit_caption<C>(
        &self,
        client: &mut C,
        caption: impl Into<String> + Send,
        parse_mode: Option<ParseMode>,
        caption_entities: Option<Vec<MessageEntity>>,
    ) -> Result<Story, ServiceError>
    where
        C: TelegramClient + Send,
    {
        self.edit(
            client,
            EditStoryOptions {
                caption: Some(caption.into()),
                parse_mode,
                caption_entities,
                ..Default::default()
            },
        )
        .await
    }

    /// Replaces this story's media with a photo.
    pub async fn edit_photo<C>(
        &self,
        client: &mut C,
        photo: InputFile,
    ) -> Result<Story, ServiceError>
    where
        C: TelegramClient + Send,
    {
        self.edit(
            client,
            EditStoryOptions {
                photo: Some(photo),
                ..Default::default()
            },
        )
        .await
    }

    /// Edits who can see this story. Only the privacy fields of `options`
    /// are forwarded.
    pub async fn edit_privacy<C>(
        &self,
        client: &mut C,
        privacy: StoryPrivacy,
        options: EditStoryOptions,
    ) -> Result<Story, ServiceError>
    where
        C: TelegramClient + Send,
    {
        self.edit(
            client,
            EditStoryOptions {
                privacy: Some(privacy),
                allowed_users: options.allowed_users,
                denied_users: options.denied_users,
                allowed_chats: options.allowed_chats,
                denied_chats: options.denied_chats,
                ..Default::default()
            },
        )
        .await
    }

    /// Replaces this story's media with a video.
    pub async fn edit_video<C>(
        &self,
        client: &mut C,
        video: InputFile,
    ) -> Result<Story, ServiceError>
    where
        C: TelegramClient + Send,
    {
        self.edit(
            client,
            EditStoryOptions {
                video: Some(video),
                ..Default::default()
            },
        )
        .await
    }

    /// Exports a shareable link to this story.
    pub async fn export_link<C>(
        &self,
        client: &mut C,
    ) -> Result<ExportedStoryLink, ServiceError>
    where
        C: TelegramClient + Send,
    {
        client.export_story_link(self.sender.id(), self.id).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use bytes::Bytes;

    use super::*;
    use crate::types::MessageEntityKind;

    #[derive(Debug, PartialEq)]
    enum Call {
        GetUser(i64),
        GetChat(i64),
        Sent {
            op: &'static str,
            chat_id: i64,
            reply_to_story_id: Option<i64>,
        },
        DeleteStories {
            channel_id: Option<i64>,
            story_ids: Vec<i64>,
        },
        EditStory {
            channel_id: Option<i64>,
            story_id: i64,
            caption: Option<String>,
            privacy: Option<StoryPrivacy>,
        },
        ExportStoryLink {
            from_id: i64,
            story_id: i64,
        },
    }

    struct MockClient {
        me: User,
        calls: Vec<Call>,
    }

    impl MockClient {
        fn new() -> Self {
            Self {
                me: user(1, true),
                calls: Vec::new(),
            }
        }
    }

    fn user(id: i64, is_self: bool) -> User {
        User {
            id,
            is_self,
            is_bot: false,
            first_name: Some(format!("user-{id}")),
            last_name: None,
            username: None,
            phone_number: None,
        }
    }

    fn chat(id: i64) -> Chat {
        Chat {
            id,
            title: Some(format!("chat-{id}")),
            username: None,
            is_verified: false,
            members_count: None,
        }
    }

    fn message(chat_id: i64, reply_to_story_id: Option<i64>) -> Message {
        Message {
            id: 100,
            chat_id,
            date: None,
            text: None,
            caption: None,
            reply_to_story_id,
        }
    }

    fn sent_story(sender: StorySender) -> Story {
        Story {
            id: 77,
            sender,
            date: None,
            expire_date: None,
            media: None,
            has_protected_content: false,
            edited: false,
            pinned: false,
            public: true,
            close_friends: false,
            contacts: false,
            selected_contacts: false,
            caption: None,
            caption_entities: None,
            views: None,
        }
    }

    #[async_trait]
    impl TelegramClient for MockClient {
        fn me(&self) -> &User {
            &self.me
        }

        async fn get_user(
            &mut self,
            user_id: i64,
        ) -> Result<User, ServiceError> {
            self.calls.push(Call::GetUser(user_id));
            Ok(user(user_id, false))
        }

        async fn get_chat(
            &mut self,
            chat_id: i64,
        ) -> Result<Chat, ServiceError> {
            self.calls.push(Call::GetChat(chat_id));
            Ok(chat(chat_id))
        }

        async fn send_message(
            &mut self,
            chat_id: i64,
            _text: String,
            options: SendMessageOptions,
        ) -> Result<Message, ServiceError> {
            self.calls.push(Call::Sent {
                op: "send_message",
                chat_id,
                reply_to_story_id: options.reply_to_story_id,
            });
            Ok(message(chat_id, options.reply_to_story_id))
        }

        async fn send_animation(
            &mut self,
            chat_id: i64,
            _animation: InputFile,
            options: SendAnimationOptions,
        ) -> Result<Message, ServiceError> {
            self.calls.push(Call::Sent {
                op: "send_animation",
                chat_id,
                reply_to_story_id: options.reply_to_story_id,
            });
            Ok(message(chat_id, options.reply_to_story_id))
        }

        async fn send_audio(
            &mut self,
            chat_id: i64,
            _audio: InputFile,
            options: SendAudioOptions,
        ) -> Result<Message, ServiceError> {
            self.calls.push(Call::Sent {
                op: "send_audio",
                chat_id,
                reply_to_story_id: options.reply_to_story_id,
            });
            Ok(message(chat_id, options.reply_to_story_id))
        }

        async fn send_cached_media(
            &mut self,
            chat_id: i64,
            _file_id: String,
            options: SendCachedMediaOptions,
        ) -> Result<Message, ServiceError> {
            self.calls.push(Call::Sent {
                op: "send_cached_media",
                chat_id,
                reply_to_story_id: options.reply_to_story_id,
            });
            Ok(message(chat_id, options.reply_to_story_id))
        }

        async fn send_media_group(
            &mut self,
            chat_id: i64,
            _media: Vec<InputMedia>,
            options: SendMediaGroupOptions,
        ) -> Result<Vec<Message>, ServiceError> {
            self.calls.push(Call::Sent {
                op: "send_media_group",
                chat_id,
                reply_to_story_id: options.reply_to_story_id,
            });
            Ok(vec![message(chat_id, options.reply_to_story_id)])
        }

        async fn send_photo(
            &mut self,
            chat_id: i64,
            _photo: InputFile,
            options: SendPhotoOptions,
        ) -> Result<Message, ServiceError> {
            self.calls.push(Call::Sent {
                op: "send_photo",
                chat_id,
                reply_to_story_id: options.reply_to_story_id,
            });
            Ok(message(chat_id, options.reply_to_story_id))
        }

        async fn send_sticker(
            &mut self,
            chat_id: i64,
            _sticker: InputFile,
            options: SendStickerOptions,
        ) -> Result<Message, ServiceError> {
            self.calls.push(Call::Sent {
                op: "send_sticker",
                chat_id,
                reply_to_story_id: options.reply_to_story_id,
            });
            Ok(message(chat_id, options.reply_to_story_id))
        }

        async fn send_video(
            &mut self,
            chat_id: i64,
            _video: InputFile,
            options: SendVideoOptions,
        ) -> Result<Message, ServiceError> {
            self.calls.push(Call::Sent {
                op: "send_video",
                chat_id,
                reply_to_story_id: options.reply_to_story_id,
            });
            Ok(message(chat_id, options.reply_to_story_id))
        }

        async fn send_video_note(
            &mut self,
            chat_id: i64,
            _video_note: InputFile,
            options: SendVideoNoteOptions,
        ) -> Result<Message, ServiceError> {
            self.calls.push(Call::Sent {
                op: "send_video_note",
                chat_id,
                reply_to_story_id: options.reply_to_story_id,
            });
            Ok(message(chat_id, options.reply_to_story_id))
        }

        async fn send_voice(
            &mut self,
            chat_id: i64,
            _voice: InputFile,
            options: SendVoiceOptions,
        ) -> Result<Message, ServiceError> {
            self.calls.push(Call::Sent {
                op: "send_voice",
                chat_id,
                reply_to_story_id: options.reply_to_story_id,
            });
            Ok(message(chat_id, options.reply_to_story_id))
        }

        async fn delete_stories(
            &mut self,
            channel_id: Option<i64>,
            story_ids: Vec<i64>,
        ) -> Result<bool, ServiceError> {
            self.calls.push(Call::DeleteStories {
                channel_id,
                story_ids,
            });
            Ok(true)
        }

        async fn edit_story(
            &mut self,
            channel_id: Option<i64>,
            story_id: i64,
            options: EditStoryOptions,
        ) -> Result<Story, ServiceError> {
            self.calls.push(Call::EditStory {
                channel_id,
                story_id,
                caption: options.caption,
                privacy: options.privacy,
            });
            Ok(sent_story(StorySender::User(self.me.clone())))
        }

        async fn export_story_link(
            &mut self,
            from_id: i64,
            story_id: i64,
        ) -> Result<ExportedStoryLink, ServiceError> {
            self.calls.push(Call::ExportStoryLink { from_id, story_id });
            Ok(ExportedStoryLink {
                link: format!("https://t.me/c/{from_id}/s/{story_id}")
                    .parse()
                    .map_err(ServiceError::InvalidUrl)?,
            })
        }
    }

    fn full_item(
        entities: Vec<raw::MessageEntity>,
        media: Option<raw::MessageMedia>,
    ) -> raw::StoryItem {
        raw::StoryItem::Full(Box::new(raw::StoryItemFull {
            id: 77,
            pinned: true,
            public: true,
            close_friends: false,
            contacts: false,
            selected_contacts: false,
            noforwards: true,
            edited: false,
            date: 1_693_000_000,
            expire_date: 1_693_086_400,
            caption: Some("caption".into()),
            entities,
            media,
            views: Some(raw::StoryViews {
                views_count: 3,
                forwards_count: None,
                reactions_count: Some(1),
                recent_viewers: vec![],
            }),
        }))
    }

    fn document(attributes: Vec<raw::DocumentAttribute>) -> raw::Document {
        raw::Document {
            id: 555,
            access_hash: -3,
            file_reference: Bytes::new(),
            date: 1_693_000_000,
            mime_type: "video/mp4".into(),
            size: 2_048,
            attributes,
        }
    }

    fn video_attribute() -> raw::DocumentAttribute {
        raw::DocumentAttribute::Video(raw::VideoAttribute {
            duration: 12.5,
            width: 720,
            height: 1280,
            round_message: false,
            supports_streaming: true,
        })
    }

    #[tokio::test]
    async fn skipped_records_dispatch_to_the_marker_decoder(
    ) -> anyhow::Result<()> {
        let mut client = MockClient::new();
        let item = raw::StoryItem::Skipped(raw::StoryItemSkipped {
            id: 5,
            date: 1_693_000_000,
            expire_date: 1_693_086_400,
            close_friends: true,
        });

        let update = Story::from_raw(
            &mut client,
            item,
            raw::Peer::User { user_id: 42 },
        )
        .await?;

        match update {
            StoryUpdate::Skipped(skipped) => {
                assert_eq!(skipped.id, 5);
                assert!(skipped.close_friends);
            },
            other => panic!("expected a skipped marker, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn deleted_records_dispatch_to_the_marker_decoder(
    ) -> anyhow::Result<()> {
        let mut client = MockClient::new();
        let item =
            raw::StoryItem::Deleted(raw::StoryItemDeleted { id: 9 });

        let update =
            Story::from_raw(&mut client, item, raw::Peer::Myself).await?;

        assert!(matches!(update, StoryUpdate::Deleted(ref d) if d.id == 9));
        Ok(())
    }

    #[test]
    fn animated_attribute_wins_over_video() {
        let media = raw::MessageMedia::Document {
            document: Some(document(vec![
                raw::DocumentAttribute::Animated,
                video_attribute(),
            ])),
            ttl_seconds: None,
        };

        match StoryMedia::from_raw(&media) {
            Some(StoryMedia::Animation(animation)) => {
                // The co-occurring video attribute supplies the metadata.
                assert_eq!(animation.duration, 12.5);
                assert_eq!((animation.width, animation.height), (720, 1280));
            },
            other => panic!("expected an animation, got {other:?}"),
        }
    }

    #[test]
    fn video_attribute_alone_classifies_as_video() {
        let media = raw::MessageMedia::Document {
            document: Some(document(vec![video_attribute()])),
            ttl_seconds: Some(30),
        };

        match StoryMedia::from_raw(&media) {
            Some(StoryMedia::Video(video)) => {
                assert_eq!(video.ttl_seconds, Some(30));
                assert!(video.supports_streaming);
            },
            other => panic!("expected a video, got {other:?}"),
        }
    }

    #[test]
    fn attributeless_document_stays_unclassified() {
        let media = raw::MessageMedia::Document {
            document: Some(document(vec![raw::DocumentAttribute::Unknown])),
            ttl_seconds: None,
        };
        assert_eq!(StoryMedia::from_raw(&media), None);
    }

    #[test]
    fn unsupported_media_stays_unclassified() {
        assert_eq!(
            StoryMedia::from_raw(&raw::MessageMedia::Unsupported),
            None
        );
    }

    #[tokio::test]
    async fn unparsable_caption_entities_are_dropped_in_order(
    ) -> anyhow::Result<()> {
        let mut client = MockClient::new();
        let item = full_item(
            vec![
                raw::MessageEntity::Bold {
                    offset: 0,
                    length: 3,
                },
                raw::MessageEntity::Unknown {
                    offset: 3,
                    length: 1,
                },
                raw::MessageEntity::Italic {
                    offset: 4,
                    length: 2,
                },
            ],
            None,
        );

        let story = Story::from_raw(
            &mut client,
            item,
            raw::Peer::User { user_id: 42 },
        )
        .await?
        .story()
        .unwrap();

        let entities = story.caption_entities.unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].kind, MessageEntityKind::Bold);
        assert_eq!(entities[1].kind, MessageEntityKind::Italic);
        Ok(())
    }

    #[tokio::test]
    async fn fully_unparsable_entities_leave_the_field_absent(
    ) -> anyhow::Result<()> {
        let mut client = MockClient::new();
        let item = full_item(
            vec![raw::MessageEntity::Unknown {
                offset: 0,
                length: 2,
            }],
            None,
        );

        let story = Story::from_raw(
            &mut client,
            item,
            raw::Peer::User { user_id: 42 },
        )
        .await?
        .story()
        .unwrap();

        assert_eq!(story.caption_entities, None);
        Ok(())
    }

    #[tokio::test]
    async fn channel_peer_resolves_to_a_chat_sender() -> anyhow::Result<()> {
        let mut client = MockClient::new();
        let story = Story::from_raw(
            &mut client,
            full_item(vec![], None),
            raw::Peer::Channel { channel_id: 900 },
        )
        .await?
        .story()
        .unwrap();

        assert_eq!(story.sender_chat().map(|c| c.id), Some(900));
        assert_eq!(story.from_user(), None);
        assert!(client.calls.contains(&Call::GetChat(900)));
        Ok(())
    }

    #[tokio::test]
    async fn user_peer_resolves_to_a_user_sender() -> anyhow::Result<()> {
        let mut client = MockClient::new();
        let story = Story::from_raw(
            &mut client,
            full_item(vec![], None),
            raw::Peer::User { user_id: 42 },
        )
        .await?
        .story()
        .unwrap();

        assert_eq!(story.from_user().map(|u| u.id), Some(42));
        assert_eq!(story.sender_chat(), None);
        Ok(())
    }

    #[tokio::test]
    async fn self_peer_uses_the_cached_account() -> anyhow::Result<()> {
        let mut client = MockClient::new();
        let story = Story::from_raw(
            &mut client,
            full_item(vec![], None),
            raw::Peer::Myself,
        )
        .await?
        .story()
        .unwrap();

        assert_eq!(story.from_user().map(|u| u.id), Some(1));
        // No lookup round-trip for the current account.
        assert!(client.calls.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn flags_and_views_pass_through() -> anyhow::Result<()> {
        let mut client = MockClient::new();
        let story = Story::from_raw(
            &mut client,
            full_item(vec![], None),
            raw::Peer::User { user_id: 42 },
        )
        .await?
        .story()
        .unwrap();

        assert!(story.has_protected_content);
        assert!(story.pinned);
        assert!(story.public);
        assert!(!story.edited);
        assert_eq!(story.views.as_ref().map(|v| v.views_count), Some(3));
        assert_eq!(story.date.map(|d| d.timestamp()), Some(1_693_000_000));
        Ok(())
    }

    #[tokio::test]
    async fn reply_defaults_to_the_story_own_id() -> anyhow::Result<()> {
        let mut client = MockClient::new();
        let story = sent_story(StorySender::User(user(42, false)));

        story
            .reply_text(&mut client, "hello", Default::default())
            .await?;

        assert_eq!(
            client.calls,
            vec![Call::Sent {
                op: "send_message",
                chat_id: 42,
                reply_to_story_id: Some(77),
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn explicit_reply_target_passes_through() -> anyhow::Result<()> {
        let mut client = MockClient::new();
        let story = sent_story(StorySender::User(user(42, false)));

        story
            .reply_photo(
                &mut client,
                InputFile::from("photo-file-id"),
                SendPhotoOptions {
                    reply_to_story_id: Some(99),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(
            client.calls,
            vec![Call::Sent {
                op: "send_photo",
                chat_id: 42,
                reply_to_story_id: Some(99),
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn channel_story_replies_target_the_channel() -> anyhow::Result<()>
    {
        let mut client = MockClient::new();
        let story = sent_story(StorySender::Chat(chat(900)));

        story
            .reply_media_group(&mut client, vec![], Default::default())
            .await?;

        assert_eq!(
            client.calls,
            vec![Call::Sent {
                op: "send_media_group",
                chat_id: 900,
                reply_to_story_id: Some(77),
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn delete_scopes_to_the_channel_for_channel_stories(
    ) -> anyhow::Result<()> {
        let mut client = MockClient::new();

        sent_story(StorySender::Chat(chat(900)))
            .delete(&mut client)
            .await?;
        sent_story(StorySender::User(user(1, true)))
            .delete(&mut client)
            .await?;

        assert_eq!(
            client.calls,
            vec![
                Call::DeleteStories {
                    channel_id: Some(900),
                    story_ids: vec![77],
                },
                Call::DeleteStories {
                    channel_id: None,
                    story_ids: vec![77],
                },
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn edit_caption_forwards_the_story_id() -> anyhow::Result<()> {
        let mut client = MockClient::new();
        let story = sent_story(StorySender::User(user(1, true)));

        story
            .edit_caption(&mut client, "new caption", None, None)
            .await?;

        assert_eq!(
            client.calls,
            vec![Call::EditStory {
                channel_id: None,
                story_id: 77,
                caption: Some("new caption".into()),
                privacy: None,
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn edit_privacy_forwards_only_privacy_fields() -> anyhow::Result<()>
    {
        let mut client = MockClient::new();
        let story = sent_story(StorySender::Chat(chat(900)));

        story
            .edit_privacy(
                &mut client,
                StoryPrivacy::CloseFriends,
                EditStoryOptions {
                    allowed_users: Some(vec![42]),
                    // A caption smuggled in here must not survive.
                    caption: Some("ignored".into()),
                    ..Default::default()
                },
            )
            .await?;

        assert_eq!(
            client.calls,
            vec![Call::EditStory {
                channel_id: Some(900),
                story_id: 77,
                caption: None,
                privacy: Some(StoryPrivacy::CloseFriends),
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn export_link_uses_the_destination_id() -> anyhow::Result<()> {
        let mut client = MockClient::new();

        sent_story(StorySender::User(user(42, false)))
            .export_link(&mut client)
            .await?;
        sent_story(StorySender::Chat(chat(900)))
            .export_link(&mut client)
            .await?;

        assert_eq!(
            client.calls,
            vec![
                Call::ExportStoryLink {
                    from_id: 42,
                    story_id: 77,
                },
                Call::ExportStoryLink {
                    from_id: 900,
                    story_id: 77,
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn story_serializes_with_unix_timestamps() {
        let mut story = sent_story(StorySender::User(user(42, false)));
        story.date = timestamp_to_datetime(1_693_000_000);

        let value = serde_json::to_value(&story).unwrap();
        assert_eq!(value["date"], 1_693_000_000);
        assert_eq!(value["id"], 77);
    }
}
