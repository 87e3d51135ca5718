use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    client::{ServiceError, TelegramClient},
    raw,
    types::StorySender,
    utils::timestamp_to_datetime,
};

/// A story whose content the server withheld.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorySkipped {
    pub id: i64,
    pub sender: StorySender,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub date: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub expire_date: Option<DateTime<Utc>>,
    pub close_friends: bool,
}

impl StorySkipped {
    pub(crate) async fn from_raw<C>(
        client: &mut C,
        item: &raw::StoryItemSkipped,
        peer: raw::Peer,
    ) -> Result<Self, ServiceError>
    where
        C: TelegramClient + Send,
    {
        Ok(Self {
            id: item.id,
            sender: StorySender::resolve(client, peer).await?,
            date: timestamp_to_datetime(item.date),
            expire_date: timestamp_to_datetime(item.expire_date),
            close_friends: item.close_friends,
        })
    }
}
