use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    raw,
    utils::{
        encode_file_id, encode_file_unique_id, timestamp_to_datetime,
        PackedFileId, PackedFileUniqueId, FILE_TYPE_VIDEO,
    },
};

/// A video attached to a story or message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i32,
    pub height: i32,
    /// Duration in seconds.
    pub duration: f64,
    pub file_name: Option<String>,
    pub mime_type: String,
    pub file_size: i64,
    pub supports_streaming: bool,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub date: Option<DateTime<Utc>>,
    /// Self-destruct timer, when the video was sent with one.
    pub ttl_seconds: Option<i32>,
}

impl Video {
    pub(crate) fn from_raw(
        document: &raw::Document,
        video: Option<&raw::VideoAttribute>,
        ttl_seconds: Option<i32>,
    ) -> Self {
        Self {
            file_id: encode_file_id(&PackedFileId {
                file_type: FILE_TYPE_VIDEO,
                id: document.id,
                access_hash: document.access_hash,
            }),
            file_unique_id: encode_file_unique_id(&PackedFileUniqueId {
                file_type: FILE_TYPE_VIDEO,
                id: document.id,
            }),
            width: video.map(|v| v.width).unwrap_or_default(),
            height: video.map(|v| v.height).unwrap_or_default(),
            duration: video.map(|v| v.duration).unwrap_or_default(),
            file_name: document.file_name().map(str::to_owned),
            mime_type: document.mime_type.clone(),
            file_size: document.size,
            supports_streaming: video
                .map(|v| v.supports_streaming)
                .unwrap_or_default(),
            date: timestamp_to_datetime(document.date),
            ttl_seconds,
        }
    }
}
