//! Shared configuration library for Wayfare.
//!
//! This crate centralizes config defaults, TOML loading, environment
//! overrides and validation rules so the desktop app and its tests share a
//! single source of truth.

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    CarouselSettings, Config, ConfigMetadata, EasingSetting, EditorSettings,
    FeedSettings, NotificationSettings, SearchSettings, WindowSettings,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
