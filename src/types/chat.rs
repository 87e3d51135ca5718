use serde::{Deserialize, Serialize};

/// A resolved chat or channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub title: Option<String>,
    pub username: Option<String>,
    pub is_verified: bool,
    pub members_count: Option<i32>,
}
