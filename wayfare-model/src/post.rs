//! Community feed records.

use chrono::{DateTime, Utc};

use crate::ids::{PostId, UserId};
use crate::tag::Tag;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Author {
    pub id: UserId,
    pub display_name: String,
    pub handle: String,
}

impl Author {
    pub fn new(display_name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            display_name: display_name.into(),
            handle: handle.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    pub author: Author,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub body: String,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub like_count: u32,
    pub share_count: u32,
    pub comments: Vec<Comment>,
}

impl Post {
    /// A freshly published post with no engagement yet.
    pub fn new(author: Author, body: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            id: PostId::new(),
            author,
            body: body.into(),
            tags,
            created_at: Utc::now(),
            like_count: 0,
            share_count: 0,
            comments: Vec::new(),
        }
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}
