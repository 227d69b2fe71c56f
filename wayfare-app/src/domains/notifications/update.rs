use chrono::Utc;
use iced::Task;
use wayfare_core::AppStore;

use super::messages::NotificationMessage;
use crate::common::messages::Message;

pub fn update(
    store: &mut AppStore,
    message: NotificationMessage,
) -> Task<Message> {
    match message {
        NotificationMessage::Dismiss(id) => {
            if !store.dismiss(id) {
                log::debug!("notification {id} was already gone");
            }
        }
        NotificationMessage::MarkAllRead => {
            store.mark_all_read();
        }
        // The timer only paces expiry; wall-clock time decides what is stale.
        NotificationMessage::Tick(_) => {
            store.expire(Utc::now());
        }
    }
    Task::none()
}
