use std::time::Instant;

use wayfare_model::NotificationId;

#[derive(Debug, Clone)]
pub enum NotificationMessage {
    Dismiss(NotificationId),
    MarkAllRead,
    Tick(Instant),
}

impl NotificationMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dismiss(_) => "Notifications::Dismiss",
            Self::MarkAllRead => "Notifications::MarkAllRead",
            Self::Tick(_) => "Notifications::Tick",
        }
    }
}
