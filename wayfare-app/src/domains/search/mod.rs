//! Tag search box filtering the community feed.

pub mod messages;
pub mod update;
pub mod view;

use wayfare_core::{Observable, SubscriptionId, TagIndex, TagInput};
use wayfare_model::Tag;

#[derive(Debug)]
pub struct SearchDomain {
    pub index: TagIndex,
    pub input: TagInput,
    filter: Observable<Vec<Tag>>,
}

impl SearchDomain {
    pub fn new<I, S>(tags: I, max_suggestions: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            index: TagIndex::new(tags),
            input: TagInput::new(max_suggestions),
            filter: Observable::default(),
        }
    }

    /// Tags the feed is filtered by and new posts are tagged with.
    pub fn filter(&self) -> &[Tag] {
        self.filter.get()
    }

    pub fn filter_revision(&self) -> u64 {
        self.filter.revision()
    }

    pub fn on_filter_change<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Vec<Tag>) + 'static,
    {
        self.filter.subscribe(listener)
    }

    /// Publish the chips as the new filter if they changed. Typing alone
    /// never republishes.
    pub(crate) fn sync_filter(&mut self) -> bool {
        if self.filter.get().as_slice() == self.input.selected() {
            return false;
        }
        self.filter.set(self.input.selected().to_vec());
        true
    }
}
