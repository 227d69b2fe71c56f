use iced::Task;
use wayfare_core::EditorError;
use wayfare_model::{NotificationKind, Post};

use super::messages::ComposeMessage;
use crate::common::messages::Message;
use crate::state::State;

pub fn update(state: &mut State, message: ComposeMessage) -> Task<Message> {
    match message {
        ComposeMessage::Edited(text) => {
            match state.compose.session.set_content(&text) {
                Ok(()) => {}
                // Keep the previous draft; the counter already shows the limit.
                Err(EditorError::TooLong { .. }) => {}
                Err(err) => {
                    log::warn!("compose edit dropped: {err}");
                    state.store.notify(NotificationKind::Error, err.to_string());
                }
            }
        }
        ComposeMessage::Publish => publish(state),
    }
    Task::none()
}

/// Turn the draft into a post tagged with the active search chips.
fn publish(state: &mut State) {
    let Some(author) = state.store.current_author().cloned() else {
        state
            .store
            .notify(NotificationKind::Warning, "Sign in to share a post");
        return;
    };
    if state.compose.draft().trim().is_empty() {
        state
            .store
            .notify(NotificationKind::Warning, "Write something first");
        return;
    }
    let body = match state.compose.session.take_content() {
        Ok(body) => body,
        Err(err) => {
            state.store.notify(NotificationKind::Error, err.to_string());
            return;
        }
    };
    let tags = state.search.filter().to_vec();
    let id = state
        .feed
        .feed
        .publish(Post::new(author, body.trim(), tags));
    log::info!("published post {id}");
    state.store.notify(NotificationKind::Success, "Post published");
}
