#![deny(clippy::dbg_macro)]

//! Story layer of an MTProto Telegram client.
//!
//! [`raw`] holds the wire-level story shapes, [`types`] their normalized
//! domain counterparts, and [`client`] the trait the transport layer
//! implements. [`types::Story::from_raw`] is the decode entry point;
//! everything else on [`types::Story`] is a bound shortcut forwarding to
//! the client.

pub mod client;
pub mod raw;
pub mod types;
pub mod utils;

pub use crate::client::{ServiceError, TelegramClient};

pub mod prelude {
    pub use crate::{
        client::{
            EditStoryOptions, SendAnimationOptions, SendAudioOptions,
            SendCachedMediaOptions, SendMediaGroupOptions,
            SendMessageOptions, SendPhotoOptions, SendStickerOptions,
            SendVideoNoteOptions, SendVideoOptions, SendVoiceOptions,
            ServiceError, TelegramClient,
        },
        types::{
            Chat, ExportedStoryLink, InputFile, InputMedia, Message,
            MessageEntity, ParseMode, Story, StoryDeleted, StoryMedia,
            StoryPrivacy, StorySender, StorySkipped, StoryUpdate, User,
        },
    };
    pub use chrono::{DateTime, Utc};
    pub use phonenumber;
}
