//! Root message type
//!
//! Every domain owns its own message enum; the root [`Message`] only routes
//! them and carries the handful of window-level events that touch more
//! than one domain.

use iced::Size;

use crate::domains::carousel::messages::CarouselMessage;
use crate::domains::compose::messages::ComposeMessage;
use crate::domains::feed::messages::FeedMessage;
use crate::domains::notifications::messages::NotificationMessage;
use crate::domains::search::messages::SearchMessage;
use crate::state::Page;

#[derive(Debug, Clone)]
pub enum Message {
    ShowPage(Page),
    WindowResized(Size),
    Key(KeyAction),
    SignIn,
    SignOut,
    Carousel(CarouselMessage),
    Feed(FeedMessage),
    Search(SearchMessage),
    Compose(ComposeMessage),
    Notifications(NotificationMessage),
}

/// Arrow keys, resolved against the active page in `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Left,
    Right,
    Up,
    Down,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShowPage(_) => "ShowPage",
            Self::WindowResized(_) => "WindowResized",
            Self::Key(_) => "Key",
            Self::SignIn => "SignIn",
            Self::SignOut => "SignOut",
            Self::Carousel(msg) => msg.name(),
            Self::Feed(msg) => msg.name(),
            Self::Search(msg) => msg.name(),
            Self::Compose(msg) => msg.name(),
            Self::Notifications(msg) => msg.name(),
        }
    }
}

impl From<CarouselMessage> for Message {
    fn from(msg: CarouselMessage) -> Self {
        Self::Carousel(msg)
    }
}

impl From<FeedMessage> for Message {
    fn from(msg: FeedMessage) -> Self {
        Self::Feed(msg)
    }
}

impl From<SearchMessage> for Message {
    fn from(msg: SearchMessage) -> Self {
        Self::Search(msg)
    }
}

impl From<ComposeMessage> for Message {
    fn from(msg: ComposeMessage) -> Self {
        Self::Compose(msg)
    }
}

impl From<NotificationMessage> for Message {
    fn from(msg: NotificationMessage) -> Self {
        Self::Notifications(msg)
    }
}
