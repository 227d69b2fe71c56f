use wayfare_app::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("wayfare_app", LevelFilter::Debug)
        .filter_module("wayfare_core", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment()?;
    log::info!(
        "starting with {} visible carousel items, config file: {:?}",
        config.settings.carousel.visible_count,
        config.settings.metadata.source_file
    );

    app::application(config).map_err(|err| {
        anyhow::anyhow!("application exited with error: {err}")
    })
}
