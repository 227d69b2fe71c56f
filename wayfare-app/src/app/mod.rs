use std::sync::Arc;

use iced::{Settings, Size};

use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the Wayfare window with the provided configuration.
pub fn application(config: AppConfig) -> iced::Result {
    let window_size = Size::new(
        config.settings.window.width,
        config.settings.window.height,
    );
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Wayfare")
    .subscription(subscriptions::subscription)
    .window(iced::window::Settings {
        size: window_size,
        resizable: true,
        decorations: true,
        ..Default::default()
    })
    .run()
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("wayfare".to_string());
    settings.antialiasing = true;
    settings
}
