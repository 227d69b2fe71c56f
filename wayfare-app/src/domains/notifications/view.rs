use iced::widget::{Column, button, container, row, text};
use iced::{Alignment, Element, Length};
use wayfare_core::AppStore;
use wayfare_model::{Notification, NotificationKind};

use super::messages::NotificationMessage;
use crate::common::messages::Message;

/// Newest-last stack of toasts under an unread summary. Renders nothing
/// when the center is empty.
pub fn view(store: &AppStore) -> Element<'_, Message> {
    let center = store.notifications();
    let mut toasts: Vec<Element<'_, Message>> = Vec::new();
    if !center.is_empty() {
        toasts.push(summary(center.unread_count()));
    }
    toasts.extend(center.iter().map(toast));
    Column::with_children(toasts)
        .spacing(8)
        .width(Length::Fixed(340.0))
        .into()
}

pub fn unread_label(unread: usize) -> String {
    match unread {
        0 => "All caught up".to_string(),
        1 => "1 unread".to_string(),
        n => format!("{n} unread"),
    }
}

fn summary<'a>(unread: usize) -> Element<'a, Message> {
    row![
        text(unread_label(unread)).size(13).width(Length::Fill),
        button(text("Mark all read").size(13))
            .on_press_maybe(
                (unread > 0).then_some(NotificationMessage::MarkAllRead.into()),
            )
            .padding([2, 8])
            .style(button::text),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

fn toast(notification: &Notification) -> Element<'_, Message> {
    let label = match notification.kind {
        NotificationKind::Info => "Info",
        NotificationKind::Success => "Done",
        NotificationKind::Warning => "Heads up",
        NotificationKind::Error => "Error",
    };
    let marker = if notification.read { "" } else { "•" };
    let body = row![
        text(marker).size(13),
        text(label).size(13),
        text(&notification.message).size(14).width(Length::Fill),
        button(text("×").size(14))
            .on_press(NotificationMessage::Dismiss(notification.id).into())
            .padding(2)
            .style(button::text),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(body)
        .padding(10)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
