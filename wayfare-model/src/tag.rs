//! Topic tags attached to posts and used by the search box.

use crate::error::{ModelError, Result};

/// A normalized tag label: lowercase, no leading `#`, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Tag(String);

impl Tag {
    /// Parse user input into a tag. Accepts an optional leading `#`.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let label = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if label.is_empty() {
            return Err(ModelError::InvalidTag("tag is empty".to_string()));
        }
        if label.chars().any(char::is_whitespace) {
            return Err(ModelError::InvalidTag(format!(
                "'{label}' contains whitespace"
            )));
        }
        Ok(Tag(label.to_lowercase()))
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// Case-insensitive prefix test against an already normalized needle.
    pub fn starts_with(&self, normalized_prefix: &str) -> bool {
        self.0.starts_with(normalized_prefix)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Tag::parse(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case_and_hash() {
        let tag = Tag::parse("  #Kyoto ").unwrap();
        assert_eq!(tag.label(), "kyoto");
        assert_eq!(tag.to_string(), "#kyoto");
    }

    #[test]
    fn parse_rejects_empty_and_spaced_labels() {
        assert!(Tag::parse("#").is_err());
        assert!(Tag::parse("   ").is_err());
        assert!(matches!(
            Tag::parse("road trip"),
            Err(ModelError::InvalidTag(_))
        ));
    }
}
