use iced::Task;
use wayfare_core::{AppStore, FeedError};
use wayfare_model::NotificationKind;

use super::FeedDomain;
use super::messages::FeedMessage;
use crate::common::messages::Message;

pub fn update(
    domain: &mut FeedDomain,
    store: &mut AppStore,
    message: FeedMessage,
) -> Task<Message> {
    match message {
        FeedMessage::ToggleLike(id) => {
            if let Err(err) = domain.feed.toggle_like(id) {
                report(store, err);
            }
        }
        FeedMessage::Share(id) => match domain.feed.share(id) {
            Ok(link) => {
                store.notify(NotificationKind::Success, "Link copied");
                domain.last_shared = Some(link.clone());
                return iced::clipboard::write(link);
            }
            Err(err) => report(store, err),
        },
        FeedMessage::ToggleComments(id) => {
            if let Err(err) = domain.feed.toggle_comments(id) {
                report(store, err);
            }
        }
        FeedMessage::DraftChanged(id, draft) => domain.set_draft(id, draft),
        FeedMessage::SubmitComment(id) => {
            let Some(author) = store.current_author().cloned() else {
                store.notify(
                    NotificationKind::Warning,
                    "Sign in to join the conversation",
                );
                return Task::none();
            };
            let draft = domain.draft(id).to_string();
            match domain.feed.add_comment(id, author, &draft) {
                Ok(()) => domain.clear_draft(id),
                Err(err) => report(store, err),
            }
        }
        FeedMessage::Hovered(id) => domain.feed.set_hovered(id),
    }
    Task::none()
}

fn report(store: &mut AppStore, err: FeedError) {
    let kind = match err {
        FeedError::UnknownPost(_) => NotificationKind::Error,
        FeedError::EmptyComment | FeedError::CommentTooLong { .. } => {
            NotificationKind::Warning
        }
    };
    log::debug!("feed action rejected: {err}");
    store.notify(kind, err.to_string());
}
