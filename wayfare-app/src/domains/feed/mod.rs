//! Community feed: the core [`FeedState`] plus per-post comment drafts.

pub mod messages;
pub mod update;
pub mod view;

use std::collections::HashMap;

use wayfare_core::FeedState;
use wayfare_model::{Post, PostId};

#[derive(Debug)]
pub struct FeedDomain {
    pub feed: FeedState,
    drafts: HashMap<PostId, String>,
    pub last_shared: Option<String>,
}

impl FeedDomain {
    pub fn new(posts: Vec<Post>, max_comment_chars: usize) -> Self {
        Self {
            feed: FeedState::new(posts, max_comment_chars),
            drafts: HashMap::new(),
            last_shared: None,
        }
    }

    pub fn draft(&self, id: PostId) -> &str {
        self.drafts.get(&id).map(String::as_str).unwrap_or_default()
    }

    pub(crate) fn set_draft(&mut self, id: PostId, draft: String) {
        self.drafts.insert(id, draft);
    }

    pub(crate) fn clear_draft(&mut self, id: PostId) {
        self.drafts.remove(&id);
    }
}
