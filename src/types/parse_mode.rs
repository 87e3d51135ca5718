use serde::{Deserialize, Serialize};

/// How caption and message text markup is interpreted by the client.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Both Markdown and HTML styles, combined.
    #[default]
    Combined,
    Markdown,
    Html,
    /// No markup parsing at all.
    Disabled,
}
