use serde::{Deserialize, Serialize};
use url::Url;

/// A shareable t.me link to a story.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportedStoryLink {
    pub link: Url,
}
