//! Compiled defaults and environment variable names.

/// Environment variable pointing at an explicit config file.
pub const CONFIG_PATH_VAR: &str = "WAYFARE_CONFIG";
/// Directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "wayfare";
/// File name looked up inside [`APP_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variables that override single settings.
pub mod env_keys {
    /// Overrides `carousel.visible_count`.
    pub const CAROUSEL_VISIBLE_COUNT: &str = "WAYFARE_CAROUSEL_VISIBLE_COUNT";
    /// Overrides `carousel.gap`.
    pub const CAROUSEL_GAP: &str = "WAYFARE_CAROUSEL_GAP";
    /// Overrides `carousel.animation_ms`.
    pub const CAROUSEL_ANIMATION_MS: &str = "WAYFARE_CAROUSEL_ANIMATION_MS";
    /// Overrides `search.max_suggestions`.
    pub const SEARCH_MAX_SUGGESTIONS: &str = "WAYFARE_SEARCH_MAX_SUGGESTIONS";
    /// Overrides `notifications.ttl_secs`.
    pub const NOTIFICATION_TTL_SECS: &str = "WAYFARE_NOTIFICATION_TTL_SECS";

    /// Every override key, in the order they are applied.
    pub const ALL: [&str; 5] = [
        CAROUSEL_VISIBLE_COUNT,
        CAROUSEL_GAP,
        CAROUSEL_ANIMATION_MS,
        SEARCH_MAX_SUGGESTIONS,
        NOTIFICATION_TTL_SECS,
    ];
}

/// Carousel defaults.
pub mod carousel {
    /// Cards shown per page.
    pub const VISIBLE_COUNT: usize = 3;
    /// Horizontal gap between cards.
    pub const GAP_PX: f32 = 24.0;
    /// Page transition length.
    pub const ANIMATION_MS: u64 = 300;
    /// Fraction of one step a drag must exceed to change page.
    pub const DRAG_THRESHOLD_FRACTION: f32 = 0.25;
    /// Scale applied to drag overshoot past either end.
    pub const ELASTIC_RESISTANCE: f32 = 0.35;
}

/// Tag search defaults.
pub mod search {
    /// Rows in the suggestion dropdown.
    pub const MAX_SUGGESTIONS: usize = 8;
    /// Tags offered when the config file names none.
    pub const DEFAULT_TAGS: &[&str] = &[
        "beach",
        "backpacking",
        "budget",
        "city-break",
        "culture",
        "food",
        "hiking",
        "islands",
        "kyoto",
        "lisbon",
        "mountains",
        "museums",
        "nightlife",
        "road-trip",
        "roadside",
        "solo",
        "street-food",
        "sunsets",
        "trains",
        "winter",
    ];
}

/// Community feed defaults.
pub mod feed {
    /// Longest comment accepted, in characters.
    pub const MAX_COMMENT_CHARS: usize = 500;
}

/// Compose box defaults.
pub mod editor {
    /// Longest post body accepted, in characters.
    pub const MAX_CHARS: usize = 2_000;
}

/// Notification center defaults.
pub mod notifications {
    /// Seconds before a toast expires.
    pub const TTL_SECS: u64 = 5;
    /// Toasts kept at once; the oldest is evicted first.
    pub const CAPACITY: usize = 5;
}

/// Initial window size.
pub mod window {
    /// Logical pixels.
    pub const WIDTH: f32 = 1280.0;
    /// Logical pixels.
    pub const HEIGHT: f32 = 800.0;
}

/// Thresholds beyond which values are accepted but flagged.
pub mod soft_limits {
    /// Animations longer than this are flagged as sluggish.
    pub const ANIMATION_MS: u64 = 2_000;
    /// Dropdowns longer than this are flagged.
    pub const MAX_SUGGESTIONS: usize = 20;
}
