//! Wire-level story shapes, as produced by the MTProto deserialization layer.
//!
//! The protocol models these as open constructor unions; here every union the
//! story layer consumes is a closed enum so dispatch is exhaustive at compile
//! time. Constructors this layer does not interpret collapse into explicit
//! `Unknown`/`Unsupported` variants instead of being dropped at the boundary.

use bytes::Bytes;

/// A story record as it arrives off the wire. Exactly one of three shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum StoryItem {
    /// The story exists but its content was withheld by the server.
    Skipped(StoryItemSkipped),
    /// The story no longer exists.
    Deleted(StoryItemDeleted),
    /// A full story record.
    Full(Box<StoryItemFull>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoryItemSkipped {
    pub id: i64,
    pub date: i64,
    pub expire_date: i64,
    pub close_friends: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoryItemDeleted {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoryItemFull {
    pub id: i64,
    pub pinned: bool,
    pub public: bool,
    pub close_friends: bool,
    pub contacts: bool,
    pub selected_contacts: bool,
    pub noforwards: bool,
    pub edited: bool,
    pub date: i64,
    pub expire_date: i64,
    pub caption: Option<String>,
    pub entities: Vec<MessageEntity>,
    pub media: Option<MessageMedia>,
    pub views: Option<StoryViews>,
}

/// The peer a story stream belongs to, or the "current account" sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Peer {
    User { user_id: i64 },
    Channel { channel_id: i64 },
    Myself,
}

/// Media attached to a story.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageMedia {
    Photo {
        photo: Option<Photo>,
        ttl_seconds: Option<i32>,
    },
    Document {
        document: Option<Document>,
        ttl_seconds: Option<i32>,
    },
    /// Any constructor the story layer does not interpret.
    Unsupported,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    pub id: i64,
    pub access_hash: i64,
    pub file_reference: Bytes,
    pub date: i64,
    pub sizes: Vec<PhotoSize>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSize {
    pub width: i32,
    pub height: i32,
    pub size: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: i64,
    pub access_hash: i64,
    pub file_reference: Bytes,
    pub date: i64,
    pub mime_type: String,
    pub size: i64,
    pub attributes: Vec<DocumentAttribute>,
}

/// Document attributes, keyed by kind.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentAttribute {
    Animated,
    Video(VideoAttribute),
    Filename { file_name: String },
    ImageSize { width: i32, height: i32 },
    /// An attribute kind the story layer does not interpret.
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoAttribute {
    pub duration: f64,
    pub width: i32,
    pub height: i32,
    pub round_message: bool,
    pub supports_streaming: bool,
}

impl Document {
    pub fn is_animated(&self) -> bool {
        self.attributes
            .iter()
            .any(|a| matches!(a, DocumentAttribute::Animated))
    }

    pub fn video_attribute(&self) -> Option<&VideoAttribute> {
        self.attributes.iter().find_map(|a| match a {
            DocumentAttribute::Video(video) => Some(video),
            _ => None,
        })
    }

    pub fn file_name(&self) -> Option<&str> {
        self.attributes.iter().find_map(|a| match a {
            DocumentAttribute::Filename { file_name } => {
                Some(file_name.as_str())
            },
            _ => None,
        })
    }
}

/// A formatting entity inside a story caption.
///
/// Offsets and lengths are in UTF-16 code units, as everywhere in the
/// protocol.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageEntity {
    Mention { offset: i32, length: i32 },
    Hashtag { offset: i32, length: i32 },
    Cashtag { offset: i32, length: i32 },
    BotCommand { offset: i32, length: i32 },
    Url { offset: i32, length: i32 },
    Email { offset: i32, length: i32 },
    Phone { offset: i32, length: i32 },
    Bold { offset: i32, length: i32 },
    Italic { offset: i32, length: i32 },
    Underline { offset: i32, length: i32 },
    Strikethrough { offset: i32, length: i32 },
    Spoiler { offset: i32, length: i32 },
    Code { offset: i32, length: i32 },
    Pre { offset: i32, length: i32, language: String },
    Blockquote { offset: i32, length: i32 },
    TextUrl { offset: i32, length: i32, url: String },
    MentionName { offset: i32, length: i32, user_id: i64 },
    CustomEmoji { offset: i32, length: i32, document_id: i64 },
    /// An entity constructor this layer cannot interpret.
    Unknown { offset: i32, length: i32 },
}

/// View counters attached to a story. Opaque to the decoder, passed through
/// as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryViews {
    pub views_count: i32,
    pub forwards_count: Option<i32>,
    pub reactions_count: Option<i32>,
    pub recent_viewers: Vec<i64>,
}
