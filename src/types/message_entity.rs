use serde::{Deserialize, Serialize};

use crate::raw;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityKind {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Code,
    Pre,
    Blockquote,
    TextLink,
    TextMention,
    CustomEmoji,
}

/// A formatting entity in a caption: usernames, URLs, bold spans and the
/// like.
///
/// Offsets and lengths are in UTF-16 code units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    pub kind: MessageEntityKind,
    pub offset: i32,
    pub length: i32,
    /// Target of a [`MessageEntityKind::TextLink`].
    pub url: Option<String>,
    /// Target of a [`MessageEntityKind::TextMention`].
    pub user_id: Option<i64>,
    /// Language tag of a [`MessageEntityKind::Pre`] block.
    pub language: Option<String>,
    pub custom_emoji_id: Option<i64>,
}

impl MessageEntity {
    fn plain(kind: MessageEntityKind, offset: i32, length: i32) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
            user_id: None,
            language: None,
            custom_emoji_id: None,
        }
    }

    /// Normalizes a single wire entity. Shapes this layer cannot interpret
    /// yield `None`; callers filter those out rather than failing the whole
    /// caption.
    pub fn from_raw(entity: &raw::MessageEntity) -> Option<Self> {
        use self::MessageEntityKind as Kind;
        use crate::raw::MessageEntity as Raw;

        Some(match *entity {
            Raw::Mention { offset, length } => {
                Self::plain(Kind::Mention, offset, length)
            },
            Raw::Hashtag { offset, length } => {
                Self::plain(Kind::Hashtag, offset, length)
            },
            Raw::Cashtag { offset, length } => {
                Self::plain(Kind::Cashtag, offset, length)
            },
            Raw::BotCommand { offset, length } => {
                Self::plain(Kind::BotCommand, offset, length)
            },
            Raw::Url { offset, length } => {
                Self::plain(Kind::Url, offset, length)
            },
            Raw::Email { offset, length } => {
                Self::plain(Kind::Email, offset, length)
            },
            Raw::Phone { offset, length } => {
                Self::plain(Kind::PhoneNumber, offset, length)
            },
            Raw::Bold { offset, length } => {
                Self::plain(Kind::Bold, offset, length)
            },
            Raw::Italic { offset, length } => {
                Self::plain(Kind::Italic, offset, length)
            },
            Raw::Underline { offset, length } => {
                Self::plain(Kind::Underline, offset, length)
            },
            Raw::Strikethrough { offset, length } => {
                Self::plain(Kind::Strikethrough, offset, length)
            },
            Raw::Spoiler { offset, length } => {
                Self::plain(Kind::Spoiler, offset, length)
            },
            Raw::Code { offset, length } => {
                Self::plain(Kind::Code, offset, length)
            },
            Raw::Pre {
                offset,
                length,
                ref language,
            } => Self {
                language: Some(language.clone()),
                ..Self::plain(Kind::Pre, offset, length)
            },
            Raw::Blockquote { offset, length } => {
                Self::plain(Kind::Blockquote, offset, length)
            },
            Raw::TextUrl {
                offset,
                length,
                ref url,
            } => Self {
                url: Some(url.clone()),
                ..Self::plain(Kind::TextLink, offset, length)
            },
            Raw::MentionName {
                offset,
                length,
                user_id,
            } => Self {
                user_id: Some(user_id),
                ..Self::plain(Kind::TextMention, offset, length)
            },
            Raw::CustomEmoji {
                offset,
                length,
                document_id,
            } => Self {
                custom_emoji_id: Some(document_id),
                ..Self::plain(Kind::CustomEmoji, offset, length)
            },
            Raw::Unknown { offset, length } => {
                tracing::debug!(
                    offset,
                    length,
                    "unrecognized caption entity, skipping"
                );
                return None;
            },
        })
    }
}
