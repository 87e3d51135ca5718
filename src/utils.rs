use chrono::{DateTime, TimeZone, Utc};

// Telegram file ids are handed to users as printable strings. They use the
// URL-safe alphabet and no padding, and we accept either padding mode when
// decoding ids produced by other clients.
pub const BASE64_FILE_ID: base64::engine::GeneralPurpose =
    base64::engine::GeneralPurpose::new(
        &base64::alphabet::URL_SAFE,
        base64::engine::GeneralPurposeConfig::new()
            .with_encode_padding(false)
            .with_decode_padding_mode(
                base64::engine::DecodePaddingMode::Indifferent,
            ),
    );

/// Converts a wire-level unix timestamp to an absolute time point.
///
/// The wire encodes "no date" as zero; that maps to `None`.
pub fn timestamp_to_datetime(timestamp: i64) -> Option<DateTime<Utc>> {
    if timestamp == 0 {
        return None;
    }
    Utc.timestamp_opt(timestamp, 0).single()
}

// File type discriminants inside packed file ids, matching the values the
// other Telegram client libraries use.
pub(crate) const FILE_TYPE_PHOTO: u8 = 2;
pub(crate) const FILE_TYPE_VIDEO: u8 = 4;
pub(crate) const FILE_TYPE_ANIMATION: u8 = 10;

/// Binary layout behind the printable `file_id` strings carried by the media
/// descriptor types.
#[derive(serde::Serialize, serde::Deserialize)]
pub(crate) struct PackedFileId {
    pub file_type: u8,
    pub id: i64,
    pub access_hash: i64,
}

/// Binary layout behind `file_unique_id`: stable across accounts, so it
/// omits the access hash.
#[derive(serde::Serialize, serde::Deserialize)]
pub(crate) struct PackedFileUniqueId {
    pub file_type: u8,
    pub id: i64,
}

pub(crate) fn encode_file_id(packed: &PackedFileId) -> String {
    use base64::Engine;
    let bytes =
        bincode::serialize(packed).expect("file id layout is serializable");
    BASE64_FILE_ID.encode(bytes)
}

pub(crate) fn encode_file_unique_id(packed: &PackedFileUniqueId) -> String {
    use base64::Engine;
    let bytes =
        bincode::serialize(packed).expect("file id layout is serializable");
    BASE64_FILE_ID.encode(bytes)
}

pub mod serde_optional_phone_number {
    use phonenumber::PhoneNumber;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(
        phone_number: &Option<PhoneNumber>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match phone_number {
            Some(phone_number) => {
                serializer.serialize_str(&phone_number.to_string())
            },
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<PhoneNumber>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(number) => phonenumber::parse(None, number)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
