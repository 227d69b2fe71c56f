//! Community post feed with like, share and comment affordances.

use std::collections::HashMap;

use chrono::Utc;
use thiserror::Error;
use tracing::debug;
use wayfare_model::{Author, Comment, Post, PostId, Tag};

/// Rejected feed actions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// No post with this id.
    #[error("post {0} is not in the feed")]
    UnknownPost(PostId),
    /// Comment body is blank after trimming.
    #[error("comment is empty")]
    EmptyComment,
    /// Comment exceeds the character limit.
    #[error("comment is {len} characters, the limit is {max}")]
    CommentTooLong {
        /// Characters submitted.
        len: usize,
        /// Configured limit.
        max: usize,
    },
}

/// Per-post toggles owned by the viewer, not the post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostViewState {
    /// The viewer liked this post.
    pub liked: bool,
    /// The comment thread is expanded.
    pub comments_open: bool,
}

/// Posts, newest first, with the viewer's per-post UI state.
#[derive(Debug, Clone)]
pub struct FeedState {
    posts: Vec<Post>,
    view: HashMap<PostId, PostViewState>,
    hovered: Option<PostId>,
    max_comment_chars: usize,
}

impl FeedState {
    /// Feed over `posts`, which are expected newest first.
    pub fn new(posts: Vec<Post>, max_comment_chars: usize) -> Self {
        Self {
            posts,
            view: HashMap::new(),
            hovered: None,
            max_comment_chars,
        }
    }

    /// All posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up one post.
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Viewer state for `id`, default when never touched.
    pub fn view_state(&self, id: PostId) -> PostViewState {
        self.view.get(&id).copied().unwrap_or_default()
    }

    /// Post under the pointer, if any.
    pub fn hovered(&self) -> Option<PostId> {
        self.hovered
    }

    /// Track the pointer entering (`Some`) or leaving (`None`) a post.
    pub fn set_hovered(&mut self, id: Option<PostId>) {
        self.hovered = id;
    }

    /// Flip the viewer's like and adjust the count. Returns the new liked
    /// state.
    pub fn toggle_like(&mut self, id: PostId) -> Result<bool, FeedError> {
        let post = find_post(&mut self.posts, id)?;
        let view = self.view.entry(id).or_default();
        view.liked = !view.liked;
        if view.liked {
            post.like_count = post.like_count.saturating_add(1);
        } else {
            post.like_count = post.like_count.saturating_sub(1);
        }
        Ok(view.liked)
    }

    /// Count a share and return the link to hand to the clipboard.
    pub fn share(&mut self, id: PostId) -> Result<String, FeedError> {
        let post = find_post(&mut self.posts, id)?;
        post.share_count = post.share_count.saturating_add(1);
        debug!(post = %id, shares = post.share_count, "post shared");
        Ok(share_link(id))
    }

    /// Show or hide the comment thread. Returns whether it is now open.
    pub fn toggle_comments(&mut self, id: PostId) -> Result<bool, FeedError> {
        find_post(&mut self.posts, id)?;
        let view = self.view.entry(id).or_default();
        view.comments_open = !view.comments_open;
        Ok(view.comments_open)
    }

    /// Append a comment and open the thread.
    pub fn add_comment(
        &mut self,
        id: PostId,
        author: Author,
        body: &str,
    ) -> Result<(), FeedError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(FeedError::EmptyComment);
        }
        let len = body.chars().count();
        if len > self.max_comment_chars {
            return Err(FeedError::CommentTooLong {
                len,
                max: self.max_comment_chars,
            });
        }
        let post = find_post(&mut self.posts, id)?;
        post.comments.push(Comment {
            author,
            body: body.to_string(),
            created_at: Utc::now(),
        });
        self.view.entry(id).or_default().comments_open = true;
        Ok(())
    }

    /// Put a freshly composed post at the top of the feed.
    pub fn publish(&mut self, post: Post) -> PostId {
        let id = post.id;
        self.posts.insert(0, post);
        id
    }

    /// Posts carrying every tag in `tags`, newest first. An empty filter
    /// returns the whole feed.
    pub fn filter_by_tags(&self, tags: &[Tag]) -> Vec<&Post> {
        let mut matching: Vec<&Post> = self
            .posts
            .iter()
            .filter(|post| tags.iter().all(|tag| post.has_tag(tag)))
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching
    }
}

fn find_post(posts: &mut [Post], id: PostId) -> Result<&mut Post, FeedError> {
    posts
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(FeedError::UnknownPost(id))
}

/// Deep link copied to the clipboard when sharing.
pub fn share_link(id: PostId) -> String {
    format!("wayfare://posts/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn author() -> Author {
        Author::new("Mika", "mika")
    }

    fn feed() -> (FeedState, PostId) {
        let post = Post::new(author(), "Sunrise over the dunes", vec![]);
        let id = post.id;
        (FeedState::new(vec![post], 20), id)
    }

    #[test]
    fn like_toggle_is_symmetric() {
        let (mut feed, id) = feed();
        assert_eq!(feed.toggle_like(id), Ok(true));
        assert_eq!(feed.post(id).unwrap().like_count, 1);
        assert_eq!(feed.toggle_like(id), Ok(false));
        assert_eq!(feed.post(id).unwrap().like_count, 0);
    }

    #[test]
    fn unlike_never_underflows() {
        let (mut feed, id) = feed();
        // Seeded state claims liked while the count says zero
        feed.view.insert(
            id,
            PostViewState {
                liked: true,
                comments_open: false,
            },
        );
        assert_eq!(feed.toggle_like(id), Ok(false));
        assert_eq!(feed.post(id).unwrap().like_count, 0);
    }

    #[test]
    fn unknown_post_is_reported() {
        let (mut feed, _) = feed();
        let missing = PostId::new();
        assert_eq!(feed.toggle_like(missing), Err(FeedError::UnknownPost(missing)));
        assert!(feed.share(missing).is_err());
    }

    #[test]
    fn share_counts_and_links() {
        let (mut feed, id) = feed();
        let link = feed.share(id).unwrap();
        assert_eq!(link, format!("wayfare://posts/{id}"));
        assert_eq!(feed.post(id).unwrap().share_count, 1);
    }

    #[test]
    fn comments_are_validated_and_open_the_thread() {
        let (mut feed, id) = feed();
        assert_eq!(
            feed.add_comment(id, author(), "   "),
            Err(FeedError::EmptyComment)
        );
        assert!(matches!(
            feed.add_comment(id, author(), &"x".repeat(21)),
            Err(FeedError::CommentTooLong { len: 21, max: 20 })
        ));
        assert!(!feed.view_state(id).comments_open);

        feed.add_comment(id, author(), "  Stunning!  ").unwrap();
        let post = feed.post(id).unwrap();
        assert_eq!(post.comments[0].body, "Stunning!");
        assert!(feed.view_state(id).comments_open);
        assert_eq!(feed.toggle_comments(id), Ok(false));
    }

    #[test]
    fn tag_filter_requires_every_tag_and_sorts_newest_first() {
        let food = Tag::parse("food").unwrap();
        let lisbon = Tag::parse("lisbon").unwrap();
        let mut older = Post::new(author(), "Pastéis", vec![food.clone(), lisbon.clone()]);
        older.created_at -= TimeDelta::hours(2);
        let newer = Post::new(author(), "Tascas", vec![food.clone(), lisbon.clone()]);
        let other = Post::new(author(), "Ramen", vec![food.clone()]);
        let feed = FeedState::new(vec![older, other, newer], 100);

        let both = feed.filter_by_tags(&[food.clone(), lisbon]);
        let bodies: Vec<_> = both.iter().map(|p| p.body.as_str()).collect();
        assert_eq!(bodies, vec!["Tascas", "Pastéis"]);
        assert_eq!(feed.filter_by_tags(&[]).len(), 3);
    }

    #[test]
    fn publish_prepends() {
        let (mut feed, first) = feed();
        let id = feed.publish(Post::new(author(), "New", vec![]));
        assert_eq!(feed.posts()[0].id, id);
        assert_eq!(feed.posts()[1].id, first);
    }
}
