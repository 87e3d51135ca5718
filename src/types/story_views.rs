use serde::{Deserialize, Serialize};

use crate::raw;

/// Aggregated view counters for a story. The decoder passes these through
/// without interpretation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoryViews {
    pub views_count: i32,
    pub forwards_count: Option<i32>,
    pub reactions_count: Option<i32>,
    /// Ids of the most recent viewers, absent rather than empty.
    pub recent_viewers: Option<Vec<i64>>,
}

impl StoryViews {
    pub(crate) fn from_raw(views: &raw::StoryViews) -> Self {
        Self {
            views_count: views.views_count,
            forwards_count: views.forwards_count,
            reactions_count: views.reactions_count,
            recent_viewers: if views.recent_viewers.is_empty() {
                None
            } else {
                Some(views.recent_viewers.clone())
            },
        }
    }
}
