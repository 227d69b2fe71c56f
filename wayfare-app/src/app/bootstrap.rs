use std::time::Duration;

use iced::Task;
use wayfare_config::{
    CarouselSettings, Config, ConfigLoadError, ConfigLoader, EasingSetting,
};
use wayfare_core::{CarouselConfig, Easing, StoreEvent};

use crate::common::messages::Message;
use crate::domains::carousel;
use crate::state::State;

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub settings: Config,
}

impl AppConfig {
    pub fn new(settings: Config) -> Self {
        Self { settings }
    }

    /// Load `.env`, the TOML file and environment overrides. Guard-rail
    /// warnings are logged by the loader.
    pub fn from_environment() -> Result<Self, ConfigLoadError> {
        let load = ConfigLoader::new().load()?;
        Ok(Self::new(load.config))
    }

    pub fn carousel_config(&self) -> CarouselConfig {
        carousel_config(&self.settings.carousel)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.settings.notifications.ttl_secs)
    }
}

pub fn carousel_config(settings: &CarouselSettings) -> CarouselConfig {
    CarouselConfig {
        visible_count: settings.visible_count,
        gap: settings.gap,
        animation: Duration::from_millis(settings.animation_ms),
        easing: easing(settings.easing),
        drag_threshold_fraction: settings.drag_threshold_fraction,
        elastic_resistance: settings.elastic_resistance,
    }
    .sanitized()
}

fn easing(setting: EasingSetting) -> Easing {
    match setting {
        EasingSetting::Linear => Easing::Linear,
        EasingSetting::EaseIn => Easing::EaseIn,
        EasingSetting::EaseOut => Easing::EaseOut,
        EasingSetting::EaseInOut => Easing::EaseInOut,
    }
}

/// Initial state plus the task that moves the carousel viewport to its
/// resting offset.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let mut state = State::new(config);
    state.store.subscribe(log_store_event);
    state.search.on_filter_change(|tags| {
        log::debug!("feed filter now has {} tag(s)", tags.len())
    });
    let task = carousel::update::sync_viewport(&state.carousel);
    (state, task)
}

fn log_store_event(event: &StoreEvent) {
    match event {
        StoreEvent::SessionStarted(author) => {
            log::info!("signed in as @{}", author.handle)
        }
        StoreEvent::SessionEnded(author) => {
            log::info!("@{} signed out", author.handle)
        }
        StoreEvent::NotificationAdded(notification) => log::debug!(
            "notification {} ({:?}): {}",
            notification.id,
            notification.kind,
            notification.message
        ),
        StoreEvent::NotificationsExpired(ids) => {
            log::debug!("{} notifications expired", ids.len())
        }
        other => log::trace!("store event: {other:?}"),
    }
}
