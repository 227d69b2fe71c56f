//! Guard rails (hard failures) and warnings (logged, not fatal) for a
//! resolved [`Config`].

use std::fmt;

use thiserror::Error;

use crate::{Config, constants::soft_limits};

/// Values that make the app unusable. Loading fails on any of these.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    /// `carousel.visible_count` is zero.
    #[error("carousel.visible_count must be at least 1")]
    VisibleCountZero,
    /// `carousel.gap` is negative or not finite.
    #[error("carousel.gap must be a finite, non-negative number (got {0})")]
    InvalidGap(f32),
    /// `carousel.drag_threshold_fraction` is outside `(0, 1]`.
    #[error("carousel.drag_threshold_fraction must be in (0, 1] (got {0})")]
    InvalidDragThreshold(f32),
    /// `carousel.elastic_resistance` is outside `[0, 1]`.
    #[error("carousel.elastic_resistance must be in [0, 1] (got {0})")]
    InvalidElasticResistance(f32),
    /// `notifications.capacity` is zero.
    #[error("notifications.capacity must be at least 1")]
    NotificationCapacityZero,
    /// Window width or height is not positive.
    #[error("window dimensions must be positive (got {width}x{height})")]
    InvalidWindow {
        /// Configured width.
        width: f32,
        /// Configured height.
        height: f32,
    },
}

/// Accepted but questionable values, logged once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Page transitions longer than the soft limit.
    SlowAnimation {
        /// Configured transition length.
        animation_ms: u64,
    },
    /// More dropdown rows than fit comfortably.
    ManySuggestions {
        /// Configured dropdown size.
        max_suggestions: usize,
    },
    /// No tags configured; autocompletion never suggests anything.
    EmptyTagList,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlowAnimation { animation_ms } => write!(
                f,
                "carousel.animation_ms = {animation_ms} will make paging feel sluggish"
            ),
            Self::ManySuggestions { max_suggestions } => write!(
                f,
                "search.max_suggestions = {max_suggestions} exceeds {} and may overflow the dropdown",
                soft_limits::MAX_SUGGESTIONS
            ),
            Self::EmptyTagList => {
                write!(f, "search.tags is empty; autocompletion is disabled")
            }
        }
    }
}

/// Warnings collected by [`validate`], in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings(Vec<ConfigWarning>);

impl ConfigWarnings {
    /// No warnings were raised.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of warnings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Warnings in the order they were raised.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.0.iter()
    }

    /// Whether `warning` was raised.
    pub fn contains(&self, warning: &ConfigWarning) -> bool {
        self.0.contains(warning)
    }
}

/// Check `config` against the guard rails, collecting soft warnings.
///
/// The first guard rail violation wins; warnings are only returned when
/// nothing is fatal.
pub fn validate(config: &Config) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let carousel = &config.carousel;
    if carousel.visible_count == 0 {
        return Err(ConfigGuardRailError::VisibleCountZero);
    }
    if !carousel.gap.is_finite() || carousel.gap < 0.0 {
        return Err(ConfigGuardRailError::InvalidGap(carousel.gap));
    }
    let fraction = carousel.drag_threshold_fraction;
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(ConfigGuardRailError::InvalidDragThreshold(fraction));
    }
    let resistance = carousel.elastic_resistance;
    if !(0.0..=1.0).contains(&resistance) {
        return Err(ConfigGuardRailError::InvalidElasticResistance(resistance));
    }
    if config.notifications.capacity == 0 {
        return Err(ConfigGuardRailError::NotificationCapacityZero);
    }
    let window = &config.window;
    if !(window.width > 0.0 && window.height > 0.0) {
        return Err(ConfigGuardRailError::InvalidWindow {
            width: window.width,
            height: window.height,
        });
    }

    let mut warnings = Vec::new();
    if carousel.animation_ms > soft_limits::ANIMATION_MS {
        warnings.push(ConfigWarning::SlowAnimation {
            animation_ms: carousel.animation_ms,
        });
    }
    if config.search.max_suggestions > soft_limits::MAX_SUGGESTIONS {
        warnings.push(ConfigWarning::ManySuggestions {
            max_suggestions: config.search.max_suggestions,
        });
    }
    if config.search.tags.is_empty() {
        warnings.push(ConfigWarning::EmptyTagList);
    }
    Ok(ConfigWarnings(warnings))
}
