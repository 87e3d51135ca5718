use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    raw,
    utils::{
        encode_file_id, encode_file_unique_id, timestamp_to_datetime,
        PackedFileId, PackedFileUniqueId, FILE_TYPE_PHOTO,
    },
};

/// A photo attached to a story or message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i32,
    pub height: i32,
    pub file_size: i32,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub date: Option<DateTime<Utc>>,
    /// Self-destruct timer, when the photo was sent with one.
    pub ttl_seconds: Option<i32>,
}

impl Photo {
    pub(crate) fn from_raw(
        photo: &raw::Photo,
        ttl_seconds: Option<i32>,
    ) -> Self {
        // The wire carries every rendition; the descriptor reports the
        // largest one.
        let best = photo.sizes.iter().max_by_key(|s| s.size);
        Self {
            file_id: encode_file_id(&PackedFileId {
                file_type: FILE_TYPE_PHOTO,
                id: photo.id,
                access_hash: photo.access_hash,
            }),
            file_unique_id: encode_file_unique_id(&PackedFileUniqueId {
                file_type: FILE_TYPE_PHOTO,
                id: photo.id,
            }),
            width: best.map(|s| s.width).unwrap_or_default(),
            height: best.map(|s| s.height).unwrap_or_default(),
            file_size: best.map(|s| s.size).unwrap_or_default(),
            date: timestamp_to_datetime(photo.date),
            ttl_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use crate::raw;

    #[test]
    fn descriptor_reports_largest_rendition() {
        let photo = raw::Photo {
            id: 7,
            access_hash: 11,
            file_reference: Bytes::new(),
            date: 1_693_000_000,
            sizes: vec![
                raw::PhotoSize {
                    width: 90,
                    height: 160,
                    size: 1_024,
                },
                raw::PhotoSize {
                    width: 720,
                    height: 1280,
                    size: 131_072,
                },
            ],
        };

        let photo = super::Photo::from_raw(&photo, Some(60));
        assert_eq!((photo.width, photo.height), (720, 1280));
        assert_eq!(photo.file_size, 131_072);
        assert_eq!(photo.ttl_seconds, Some(60));
        assert!(!photo.file_id.is_empty());
    }
}
