use bytes::Bytes;
use url::Url;

/// Additional interface options attached to an outgoing message.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    KeyboardRemove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineKeyboardMarkup {
    pub rows: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub action: InlineButtonAction,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InlineButtonAction {
    CallbackData(Bytes),
    Url(Url),
    SwitchInlineQuery(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplyKeyboardMarkup {
    pub rows: Vec<Vec<String>>,
    pub resize_keyboard: bool,
    pub one_time_keyboard: bool,
    pub selective: bool,
    pub placeholder: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplyKeyboardRemove {
    pub selective: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForceReply {
    pub selective: bool,
    pub placeholder: Option<String>,
}
