use iced::Task;
use wayfare_core::{AppStore, TagError};
use wayfare_model::NotificationKind;

use super::SearchDomain;
use super::messages::SearchMessage;
use crate::common::messages::Message;

pub fn update(
    domain: &mut SearchDomain,
    store: &mut AppStore,
    message: SearchMessage,
) -> Task<Message> {
    let SearchDomain { index, input, .. } = domain;
    match message {
        // The text input reports Backspace even when its value is already
        // empty, which is the only way to see that key here.
        SearchMessage::QueryChanged(query)
            if query.is_empty() && input.query().is_empty() =>
        {
            return update(domain, store, SearchMessage::BackspaceOnEmpty);
        }
        SearchMessage::QueryChanged(query) => input.set_query(index, query),
        SearchMessage::BackspaceOnEmpty => {
            if let Some(tag) = input.backspace_on_empty(index) {
                log::debug!("backspace removed {tag}");
            }
        }
        SearchMessage::Accept => match input.accept(index) {
            Ok(Some(tag)) => log::debug!("filtering feed by {tag}"),
            Ok(None) => {}
            Err(err) => report(store, err),
        },
        SearchMessage::Choose(tag) => {
            if let Err(err) = input.choose(index, tag) {
                report(store, err);
            }
        }
        SearchMessage::Remove(tag) => {
            input.remove(index, &tag);
        }
        SearchMessage::MoveHighlight(direction) => {
            input.move_highlight(direction)
        }
        SearchMessage::Clear => input.clear(),
    }
    domain.sync_filter();
    Task::none()
}

fn report(store: &mut AppStore, err: TagError) {
    log::debug!("tag rejected: {err}");
    store.notify(NotificationKind::Warning, err.to_string());
}
