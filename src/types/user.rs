use phonenumber::PhoneNumber;
use serde::{Deserialize, Serialize};

use crate::utils::serde_optional_phone_number;

/// A resolved Telegram user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Whether this user is the current authenticated account.
    pub is_self: bool,
    pub is_bot: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    #[serde(default, with = "serde_optional_phone_number")]
    pub phone_number: Option<PhoneNumber>,
}

// Telegram entities are equal when their ids are: every other field is a
// snapshot that may lag behind the server.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl User {
    /// First and last name joined, the way clients render a user without a
    /// username.
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::new(),
        }
    }
}
