//! Resolved settings, one struct per app area.

pub mod sources;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants;

/// Fully resolved configuration: compiled defaults, then the TOML file,
/// then environment overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Landing page carousel.
    pub carousel: CarouselSettings,
    /// Tag search box.
    pub search: SearchSettings,
    /// Community feed.
    pub feed: FeedSettings,
    /// Compose box.
    pub editor: EditorSettings,
    /// Toast notifications.
    pub notifications: NotificationSettings,
    /// Main window.
    pub window: WindowSettings,
    /// Provenance of the values above.
    pub metadata: ConfigMetadata,
}

/// Easing curve for carousel page transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingSetting {
    /// Constant speed.
    Linear,
    /// Starts slow.
    EaseIn,
    /// Ends slow.
    #[default]
    EaseOut,
    /// Slow at both ends.
    EaseInOut,
}

/// Landing page carousel behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSettings {
    /// Cards shown per page, at least one.
    pub visible_count: usize,
    /// Gap between cards in pixels.
    pub gap: f32,
    /// Page transition length.
    pub animation_ms: u64,
    /// Page transition curve.
    pub easing: EasingSetting,
    /// Fraction of one step a drag must cross to page, in `(0, 1]`.
    pub drag_threshold_fraction: f32,
    /// Scale applied to overshoot past either end, in `[0, 1]`.
    pub elastic_resistance: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            visible_count: constants::carousel::VISIBLE_COUNT,
            gap: constants::carousel::GAP_PX,
            animation_ms: constants::carousel::ANIMATION_MS,
            easing: EasingSetting::default(),
            drag_threshold_fraction: constants::carousel::DRAG_THRESHOLD_FRACTION,
            elastic_resistance: constants::carousel::ELASTIC_RESISTANCE,
        }
    }
}

/// Tag autocompletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    /// Dropdown rows.
    pub max_suggestions: usize,
    /// Static tag list offered by autocompletion, in display order.
    pub tags: Vec<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_suggestions: constants::search::MAX_SUGGESTIONS,
            tags: constants::search::DEFAULT_TAGS
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

/// Community feed limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    /// Longest comment accepted, in characters.
    pub max_comment_chars: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            max_comment_chars: constants::feed::MAX_COMMENT_CHARS,
        }
    }
}

/// Compose box limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    /// Longest post body accepted, in characters.
    pub max_chars: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            max_chars: constants::editor::MAX_CHARS,
        }
    }
}

/// Toast lifetime and queue size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    /// Seconds before a toast expires.
    pub ttl_secs: u64,
    /// Toasts kept at once.
    pub capacity: usize,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            ttl_secs: constants::notifications::TTL_SECS,
            capacity: constants::notifications::CAPACITY,
        }
    }
}

/// Initial window size in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    /// Initial width.
    pub width: f32,
    /// Initial height.
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: constants::window::WIDTH,
            height: constants::window::HEIGHT,
        }
    }
}

/// Where the effective values came from, for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMetadata {
    /// Config file that was read, if any.
    pub source_file: Option<PathBuf>,
    /// Environment keys that replaced a value.
    pub env_overrides: Vec<&'static str>,
}
