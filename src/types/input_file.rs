use std::path::PathBuf;

use bytes::Bytes;
use url::Url;

/// Media handed to a send or edit operation.
#[derive(Clone, Debug, PartialEq)]
pub enum InputFile {
    /// A file that already exists on the Telegram servers.
    FileId(String),
    /// A file the servers should fetch from the Internet.
    Url(Url),
    /// A file on the local machine, uploaded by the client.
    Path(PathBuf),
    /// An in-memory upload.
    Bytes { file_name: String, data: Bytes },
}

impl From<&str> for InputFile {
    fn from(file_id: &str) -> Self {
        Self::FileId(file_id.to_owned())
    }
}

impl From<String> for InputFile {
    fn from(file_id: String) -> Self {
        Self::FileId(file_id)
    }
}

impl From<PathBuf> for InputFile {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Url> for InputFile {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}
