//! Tag autocompletion for the search box.
//!
//! Suggestions come from a static tag list with a linear, case-insensitive
//! prefix scan. The list is small and fixed at start-up, so no index
//! structure is kept beyond the normalized tags themselves.

use thiserror::Error;
use tracing::warn;
use wayfare_model::{ModelError, Tag};

/// Why a tag could not be added to the search box.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    /// The text does not parse as a tag.
    #[error(transparent)]
    Invalid(#[from] ModelError),
    /// The tag is already a chip.
    #[error("{0} is already selected")]
    AlreadySelected(Tag),
}

/// Normalized, deduplicated tag list autocompletion draws from.
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    tags: Vec<Tag>,
}

impl TagIndex {
    /// Normalize and deduplicate `raw`, keeping first-seen order. Entries
    /// that do not parse as tags are skipped with a warning.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags: Vec<Tag> = Vec::new();
        for entry in raw {
            match Tag::parse(entry.as_ref()) {
                Ok(tag) if !tags.contains(&tag) => tags.push(tag),
                Ok(_) => {}
                Err(err) => warn!("skipping tag '{}': {err}", entry.as_ref()),
            }
        }
        Self { tags }
    }

    /// Tags in first-seen order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the index has no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Up to `limit` tags starting with `query`, in index order, skipping
    /// anything in `exclude`. A blank query suggests nothing.
    pub fn suggest(&self, query: &str, exclude: &[Tag], limit: usize) -> Vec<Tag> {
        let needle = normalize_query(query);
        if needle.is_empty() {
            return Vec::new();
        }
        self.tags
            .iter()
            .filter(|tag| tag.starts_with(&needle) && !exclude.contains(tag))
            .take(limit)
            .cloned()
            .collect()
    }
}

fn normalize_query(query: &str) -> String {
    let trimmed = query.trim();
    trimmed
        .strip_prefix('#')
        .unwrap_or(trimmed)
        .trim()
        .to_lowercase()
}

/// Highlight movement inside the suggestion dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Toward the first suggestion.
    Up,
    /// Toward the last suggestion.
    Down,
}

/// Search box state: the text being typed, the chips already chosen and the
/// dropdown under the input.
#[derive(Debug, Clone)]
pub struct TagInput {
    query: String,
    selected: Vec<Tag>,
    suggestions: Vec<Tag>,
    highlighted: Option<usize>,
    limit: usize,
}

impl Default for TagInput {
    fn default() -> Self {
        Self::new(8)
    }
}

impl TagInput {
    /// Empty search box showing at most `limit` suggestions.
    pub fn new(limit: usize) -> Self {
        Self {
            query: String::new(),
            selected: Vec::new(),
            suggestions: Vec::new(),
            highlighted: None,
            limit,
        }
    }

    /// Text typed so far.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Chips, in the order they were added.
    pub fn selected(&self) -> &[Tag] {
        &self.selected
    }

    /// Dropdown entries for the current query.
    pub fn suggestions(&self) -> &[Tag] {
        &self.suggestions
    }

    /// Index of the highlighted dropdown entry.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Tag under the highlight.
    pub fn highlighted_tag(&self) -> Option<&Tag> {
        self.highlighted.and_then(|i| self.suggestions.get(i))
    }

    /// Replace the typed text and refresh suggestions. The highlight resets
    /// because the list it pointed into is gone.
    pub fn set_query(&mut self, index: &TagIndex, query: impl Into<String>) {
        self.query = query.into();
        self.refresh(index);
    }

    /// Move the highlight, wrapping at both ends of the dropdown.
    pub fn move_highlight(&mut self, direction: Highlight) {
        let len = self.suggestions.len();
        if len == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match (self.highlighted, direction) {
            (None, Highlight::Down) => 0,
            (None, Highlight::Up) => len - 1,
            (Some(i), Highlight::Down) => (i + 1) % len,
            (Some(i), Highlight::Up) => (i + len - 1) % len,
        });
    }

    /// Commit the highlighted suggestion, or the typed text as a new tag.
    /// Returns the tag that was added; `None` when there was nothing to add.
    pub fn accept(&mut self, index: &TagIndex) -> Result<Option<Tag>, TagError> {
        let tag = match self.highlighted_tag() {
            Some(tag) => tag.clone(),
            None if self.query.trim().is_empty() => return Ok(None),
            None => Tag::parse(&self.query)?,
        };
        if self.selected.contains(&tag) {
            return Err(TagError::AlreadySelected(tag));
        }
        self.selected.push(tag.clone());
        self.query.clear();
        self.refresh(index);
        Ok(Some(tag))
    }

    /// Pick a suggestion directly (mouse click on the dropdown).
    pub fn choose(&mut self, index: &TagIndex, tag: Tag) -> Result<(), TagError> {
        if self.selected.contains(&tag) {
            return Err(TagError::AlreadySelected(tag));
        }
        self.selected.push(tag);
        self.query.clear();
        self.refresh(index);
        Ok(())
    }

    /// Drop a chip. The dropdown is rebuilt so the tag can be suggested
    /// again for the text already typed.
    pub fn remove(&mut self, index: &TagIndex, tag: &Tag) -> bool {
        let before = self.selected.len();
        self.selected.retain(|t| t != tag);
        let removed = self.selected.len() != before;
        if removed {
            self.refresh(index);
        }
        removed
    }

    /// Backspace in an empty input removes the most recent chip.
    pub fn backspace_on_empty(&mut self, index: &TagIndex) -> Option<Tag> {
        if !self.query.is_empty() {
            return None;
        }
        let popped = self.selected.pop()?;
        self.refresh(index);
        Some(popped)
    }

    /// Drop the query, the chips and the dropdown.
    pub fn clear(&mut self) {
        self.query.clear();
        self.selected.clear();
        self.suggestions.clear();
        self.highlighted = None;
    }

    fn refresh(&mut self, index: &TagIndex) {
        self.suggestions = index.suggest(&self.query, &self.selected, self.limit);
        self.highlighted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> TagIndex {
        TagIndex::new(["Road-Trip", "roadside", "rome", "food", "#road-trip", "bad tag"])
    }

    fn tag(raw: &str) -> Tag {
        Tag::parse(raw).unwrap()
    }

    #[test]
    fn index_normalizes_and_deduplicates() {
        let labels: Vec<_> = index().tags().iter().map(|t| t.label().to_string()).collect();
        assert_eq!(labels, vec!["road-trip", "roadside", "rome", "food"]);
    }

    #[test]
    fn suggest_is_case_insensitive_prefix_match() {
        let index = index();
        assert_eq!(index.suggest("RO", &[], 8), vec![tag("road-trip"), tag("roadside"), tag("rome")]);
        assert_eq!(index.suggest("#roa", &[], 8), vec![tag("road-trip"), tag("roadside")]);
        assert!(index.suggest("side", &[], 8).is_empty());
        assert!(index.suggest("   ", &[], 8).is_empty());
    }

    #[test]
    fn suggest_honors_exclusions_and_limit() {
        let index = index();
        assert_eq!(index.suggest("ro", &[tag("roadside")], 8), vec![tag("road-trip"), tag("rome")]);
        assert_eq!(index.suggest("ro", &[], 1), vec![tag("road-trip")]);
    }

    #[test]
    fn highlight_wraps() {
        let index = index();
        let mut input = TagInput::default();
        input.set_query(&index, "ro");
        input.move_highlight(Highlight::Up);
        assert_eq!(input.highlighted(), Some(2));
        input.move_highlight(Highlight::Down);
        assert_eq!(input.highlighted(), Some(0));
    }

    #[test]
    fn accept_prefers_highlight_then_raw_query() {
        let index = index();
        let mut input = TagInput::default();
        input.set_query(&index, "ro");
        input.move_highlight(Highlight::Down);
        input.move_highlight(Highlight::Down);
        assert_eq!(input.accept(&index), Ok(Some(tag("roadside"))));
        assert_eq!(input.query(), "");

        input.set_query(&index, "#Porto");
        assert_eq!(input.accept(&index), Ok(Some(tag("porto"))));
        assert_eq!(input.selected(), &[tag("roadside"), tag("porto")]);

        assert_eq!(input.accept(&index), Ok(None));
    }

    #[test]
    fn selected_tags_drop_out_of_suggestions() {
        let index = index();
        let mut input = TagInput::default();
        input.choose(&index, tag("rome")).unwrap();
        input.set_query(&index, "ro");
        assert!(!input.suggestions().contains(&tag("rome")));
        assert_eq!(
            input.choose(&index, tag("rome")),
            Err(TagError::AlreadySelected(tag("rome")))
        );
    }

    #[test]
    fn invalid_raw_query_is_rejected() {
        let index = index();
        let mut input = TagInput::default();
        input.set_query(&index, "two words");
        assert!(matches!(input.accept(&index), Err(TagError::Invalid(_))));
        assert!(input.selected().is_empty());
    }

    #[test]
    fn backspace_on_empty_removes_last_chip() {
        let index = index();
        let mut input = TagInput::default();
        input.choose(&index, tag("food")).unwrap();
        input.choose(&index, tag("rome")).unwrap();
        input.set_query(&index, "x");
        assert_eq!(input.backspace_on_empty(&index), None);
        input.set_query(&index, "");
        assert_eq!(input.backspace_on_empty(&index), Some(tag("rome")));
        assert!(input.remove(&index, &tag("food")));
        assert!(!input.remove(&index, &tag("food")));
        assert_eq!(input.backspace_on_empty(&index), None);
    }

    #[test]
    fn removed_chip_returns_to_the_dropdown() {
        let index = index();
        let mut input = TagInput::default();
        input.choose(&index, tag("road-trip")).unwrap();
        input.set_query(&index, "ro");
        assert_eq!(input.suggestions(), &[tag("roadside"), tag("rome")]);
        input.move_highlight(Highlight::Down);

        assert!(input.remove(&index, &tag("road-trip")));
        assert_eq!(
            input.suggestions(),
            &[tag("road-trip"), tag("roadside"), tag("rome")]
        );
        assert_eq!(input.highlighted(), None);
    }
}
