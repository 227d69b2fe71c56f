//! Root application state
//!
//! One explicit value owned by the iced runtime. Each domain keeps its own
//! slice; the [`AppStore`] holds the cross-cutting session and
//! notifications and tells subscribers about every change.

use iced::Size;
use wayfare_core::AppStore;

use crate::app::AppConfig;
use crate::domains::carousel::CarouselDomain;
use crate::domains::compose::ComposeDomain;
use crate::domains::feed::FeedDomain;
use crate::domains::plans::PlansDomain;
use crate::domains::search::SearchDomain;
use crate::infra::seed;

/// Top-level view toggle. Not routing: both pages live in one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Community,
}

#[derive(Debug)]
pub struct State {
    pub page: Page,
    pub window_size: Size,
    pub store: AppStore,
    pub carousel: CarouselDomain,
    pub plans: PlansDomain,
    pub feed: FeedDomain,
    pub search: SearchDomain,
    pub compose: ComposeDomain,
}

impl State {
    pub fn new(config: &AppConfig) -> Self {
        let settings = &config.settings;
        let window_size =
            Size::new(settings.window.width, settings.window.height);

        let mut carousel =
            CarouselDomain::new(config.carousel_config(), seed::destinations());
        carousel.observe_window(window_size.width);

        Self {
            page: Page::default(),
            window_size,
            store: AppStore::new(
                settings.notifications.capacity,
                config.notification_ttl(),
            ),
            carousel,
            plans: PlansDomain::new(seed::plans()),
            feed: FeedDomain::new(
                seed::posts(),
                settings.feed.max_comment_chars,
            ),
            search: SearchDomain::new(
                &settings.search.tags,
                settings.search.max_suggestions,
            ),
            compose: ComposeDomain::new(settings.editor.max_chars),
        }
    }

    /// Record a new window size and re-measure the carousel. Returns whether
    /// the carousel step changed.
    pub fn resize(&mut self, size: Size) -> bool {
        self.window_size = size;
        self.carousel.observe_window(size.width)
    }
}
