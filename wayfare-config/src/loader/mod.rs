//! Compose defaults, the TOML file and environment overrides into a
//! validated [`Config`].

pub mod error;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    Config, ConfigWarnings,
    constants::{self, env_keys},
    models::sources::{EnvConfig, FileConfig},
    util::parse_env_value,
    validation,
};

use error::ConfigLoadError;

/// Result of a successful load: the config plus any soft warnings.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// Effective, validated configuration.
    pub config: Config,
    /// Soft problems the caller should log.
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone)]
enum PathChoice {
    /// Explicitly requested; missing is an error.
    Explicit(PathBuf),
    /// Conventional location; missing falls back to defaults.
    Default(Option<PathBuf>),
}

/// Builder for a one-shot config load.
///
/// By default reads `.env`, then `$WAYFARE_CONFIG` or the platform config
/// file, then the process environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: Option<PathChoice>,
    env: Option<EnvConfig>,
    load_dotenv: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader with the default lookup order.
    pub fn new() -> Self {
        Self {
            path: None,
            env: None,
            load_dotenv: true,
        }
    }

    /// Use this file instead of `$WAYFARE_CONFIG` or the platform default.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(PathChoice::Explicit(path.into()));
        self
    }

    /// Skip file lookup entirely and run on defaults plus environment.
    pub fn without_file(mut self) -> Self {
        self.path = Some(PathChoice::Default(None));
        self
    }

    /// Use these environment values instead of the process environment.
    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.env = Some(env);
        self
    }

    /// Do not read a `.env` file before gathering the environment.
    pub fn without_dotenv(mut self) -> Self {
        self.load_dotenv = false;
        self
    }

    /// Resolve, merge and validate the configuration.
    pub fn load(self) -> Result<ConfigLoad, ConfigLoadError> {
        if self.load_dotenv {
            match dotenvy::dotenv() {
                Ok(path) => debug!("loaded environment from {}", path.display()),
                Err(err) if err.not_found() => {}
                Err(err) => warn!("ignoring unreadable .env file: {err}"),
            }
        }

        let choice = self.path.unwrap_or_else(resolve_path_from_env);
        let (file, source_file) = match choice {
            PathChoice::Explicit(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::Missing { path });
                }
                (read_file(&path)?, Some(path))
            }
            PathChoice::Default(Some(path)) if path.exists() => {
                (read_file(&path)?, Some(path))
            }
            PathChoice::Default(path) => {
                if let Some(path) = path {
                    debug!(
                        "no config file at {}, using defaults",
                        path.display()
                    );
                }
                (FileConfig::default(), None)
            }
        };

        let env = self.env.unwrap_or_else(EnvConfig::gather);
        let mut config = merge_file(file);
        config.metadata.source_file = source_file;
        apply_env(&mut config, &env)?;

        let warnings = validation::validate(&config)?;
        for warning in warnings.iter() {
            warn!("config: {warning}");
        }

        Ok(ConfigLoad { config, warnings })
    }
}

fn resolve_path_from_env() -> PathChoice {
    if let Ok(path) = std::env::var(constants::CONFIG_PATH_VAR)
        && !path.trim().is_empty()
    {
        return PathChoice::Explicit(PathBuf::from(path));
    }
    PathChoice::Default(dirs::config_dir().map(|dir| {
        dir.join(constants::APP_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    }))
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let raw =
        std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&raw).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn merge_file(file: FileConfig) -> Config {
    let mut config = Config::default();

    let carousel = &mut config.carousel;
    if let Some(v) = file.carousel.visible_count {
        carousel.visible_count = v;
    }
    if let Some(v) = file.carousel.gap {
        carousel.gap = v;
    }
    if let Some(v) = file.carousel.animation_ms {
        carousel.animation_ms = v;
    }
    if let Some(v) = file.carousel.easing {
        carousel.easing = v;
    }
    if let Some(v) = file.carousel.drag_threshold_fraction {
        carousel.drag_threshold_fraction = v;
    }
    if let Some(v) = file.carousel.elastic_resistance {
        carousel.elastic_resistance = v;
    }

    if let Some(v) = file.search.max_suggestions {
        config.search.max_suggestions = v;
    }
    if let Some(tags) = file.search.tags {
        config.search.tags = tags;
    }
    if let Some(v) = file.feed.max_comment_chars {
        config.feed.max_comment_chars = v;
    }
    if let Some(v) = file.editor.max_chars {
        config.editor.max_chars = v;
    }
    if let Some(v) = file.notifications.ttl_secs {
        config.notifications.ttl_secs = v;
    }
    if let Some(v) = file.notifications.capacity {
        config.notifications.capacity = v;
    }
    if let Some(v) = file.window.width {
        config.window.width = v;
    }
    if let Some(v) = file.window.height {
        config.window.height = v;
    }

    config
}

fn apply_env(
    config: &mut Config,
    env: &EnvConfig,
) -> Result<(), ConfigLoadError> {
    let overrides = &mut config.metadata.env_overrides;

    if let Some(v) = parse_env_value(
        env_keys::CAROUSEL_VISIBLE_COUNT,
        env.carousel_visible_count.as_deref(),
    )? {
        config.carousel.visible_count = v;
        overrides.push(env_keys::CAROUSEL_VISIBLE_COUNT);
    }
    if let Some(v) =
        parse_env_value(env_keys::CAROUSEL_GAP, env.carousel_gap.as_deref())?
    {
        config.carousel.gap = v;
        overrides.push(env_keys::CAROUSEL_GAP);
    }
    if let Some(v) = parse_env_value(
        env_keys::CAROUSEL_ANIMATION_MS,
        env.carousel_animation_ms.as_deref(),
    )? {
        config.carousel.animation_ms = v;
        overrides.push(env_keys::CAROUSEL_ANIMATION_MS);
    }
    if let Some(v) = parse_env_value(
        env_keys::SEARCH_MAX_SUGGESTIONS,
        env.search_max_suggestions.as_deref(),
    )? {
        config.search.max_suggestions = v;
        overrides.push(env_keys::SEARCH_MAX_SUGGESTIONS);
    }
    if let Some(v) = parse_env_value(
        env_keys::NOTIFICATION_TTL_SECS,
        env.notification_ttl_secs.as_deref(),
    )? {
        config.notifications.ttl_secs = v;
        overrides.push(env_keys::NOTIFICATION_TTL_SECS);
    }

    Ok(())
}
