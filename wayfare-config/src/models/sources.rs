//! Raw inputs before merging: the TOML file and environment overrides.

use serde::{Deserialize, Serialize};

use crate::constants::env_keys;

use super::EasingSetting;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    /// `[carousel]` table.
    #[serde(default)]
    pub carousel: FileCarouselConfig,
    /// `[search]` table.
    #[serde(default)]
    pub search: FileSearchConfig,
    /// `[feed]` table.
    #[serde(default)]
    pub feed: FileFeedConfig,
    /// `[editor]` table.
    #[serde(default)]
    pub editor: FileEditorConfig,
    /// `[notifications]` table.
    #[serde(default)]
    pub notifications: FileNotificationConfig,
    /// `[window]` table.
    #[serde(default)]
    pub window: FileWindowConfig,
}

/// Carousel keys; anything left out keeps its default.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarouselConfig {
    /// Cards per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_count: Option<usize>,
    /// Gap between cards in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Page transition length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_ms: Option<u64>,
    /// Transition curve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<EasingSetting>,
    /// Share of a step a drag must cross to page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drag_threshold_fraction: Option<f32>,
    /// Damping applied to overshoot past either end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elastic_resistance: Option<f32>,
}

/// Tag search keys.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileSearchConfig {
    /// Dropdown rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_suggestions: Option<usize>,
    /// Replaces the built-in tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Feed keys.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileFeedConfig {
    /// Longest comment accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_comment_chars: Option<usize>,
}

/// Compose box keys.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileEditorConfig {
    /// Longest post body accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<usize>,
}

/// Notification keys.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileNotificationConfig {
    /// Seconds a toast stays up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_secs: Option<u64>,
    /// Toasts kept at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
}

/// Initial window size.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileWindowConfig {
    /// Logical pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Logical pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

/// Environment-derived configuration values, kept raw so the loader can
/// report which key failed to parse.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    /// Raw `WAYFARE_CAROUSEL_VISIBLE_COUNT`.
    pub carousel_visible_count: Option<String>,
    /// Raw `WAYFARE_CAROUSEL_GAP`.
    pub carousel_gap: Option<String>,
    /// Raw `WAYFARE_CAROUSEL_ANIMATION_MS`.
    pub carousel_animation_ms: Option<String>,
    /// Raw `WAYFARE_SEARCH_MAX_SUGGESTIONS`.
    pub search_max_suggestions: Option<String>,
    /// Raw `WAYFARE_NOTIFICATION_TTL_SECS`.
    pub notification_ttl_secs: Option<String>,
}

impl EnvConfig {
    /// Read every override key from the process environment.
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from explicit key/value pairs instead of the process environment.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let pairs: Vec<(&str, &str)> = pairs.into_iter().collect();
        Self::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            carousel_visible_count: lookup(env_keys::CAROUSEL_VISIBLE_COUNT),
            carousel_gap: lookup(env_keys::CAROUSEL_GAP),
            carousel_animation_ms: lookup(env_keys::CAROUSEL_ANIMATION_MS),
            search_max_suggestions: lookup(env_keys::SEARCH_MAX_SUGGESTIONS),
            notification_ttl_secs: lookup(env_keys::NOTIFICATION_TTL_SECS),
        }
    }
}
