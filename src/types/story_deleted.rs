use serde::{Deserialize, Serialize};

use crate::{
    client::{ServiceError, TelegramClient},
    raw,
    types::StorySender,
};

/// A story that no longer exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoryDeleted {
    pub id: i64,
    pub sender: StorySender,
}

impl StoryDeleted {
    pub(crate) async fn from_raw<C>(
        client: &mut C,
        item: &raw::StoryItemDeleted,
        peer: raw::Peer,
    ) -> Result<Self, ServiceError>
    where
        C: TelegramClient + Send,
    {
        Ok(Self {
            id: item.id,
            sender: StorySender::resolve(client, peer).await?,
        })
    }
}
