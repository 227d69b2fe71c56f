use chrono::{DateTime, Utc};
use iced::widget::{
    Column, Row, button, column, container, mouse_area, row, text, text_input,
};
use iced::{Alignment, Element, Length, Theme};
use wayfare_model::{Post, Tag};

use super::FeedDomain;
use super::messages::FeedMessage;
use crate::common::messages::Message;
use crate::infra::constants::layout::{CARD_PADDING, FEED_MAX_WIDTH};

/// Posts matching every tag in `filter`, newest first.
pub fn view<'a>(domain: &'a FeedDomain, filter: &[Tag]) -> Element<'a, Message> {
    let now = Utc::now();
    let posts = domain.feed.filter_by_tags(filter);
    if posts.is_empty() {
        return text("No posts match the selected tags").size(15).into();
    }
    let cards: Vec<Element<'a, Message>> = posts
        .into_iter()
        .map(|post| post_card(domain, post, now))
        .collect();
    Column::with_children(cards)
        .spacing(16)
        .max_width(FEED_MAX_WIDTH)
        .into()
}

fn post_card<'a>(
    domain: &'a FeedDomain,
    post: &'a Post,
    now: DateTime<Utc>,
) -> Element<'a, Message> {
    let view_state = domain.feed.view_state(post.id);
    let hovered = domain.feed.hovered() == Some(post.id);

    let header = row![
        text(&post.author.display_name).size(16),
        text(format!("@{}", post.author.handle)).size(13),
        text(age_label(post.created_at, now)).size(13),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let tags: Vec<Element<'a, Message>> = post
        .tags
        .iter()
        .map(|tag| text(tag.to_string()).size(13).into())
        .collect();

    let like_label = if view_state.liked { "♥" } else { "♡" };
    let actions = row![
        action(
            format!("{like_label} {}", post.like_count),
            FeedMessage::ToggleLike(post.id),
        ),
        action(
            format!("Comments {}", post.comment_count()),
            FeedMessage::ToggleComments(post.id),
        ),
        action(
            format!("Share {}", post.share_count),
            FeedMessage::Share(post.id),
        ),
    ]
    .spacing(8);

    let mut body = column![
        header,
        text(&post.body).size(15),
        Row::with_children(tags).spacing(8),
        actions,
    ]
    .spacing(10);

    if view_state.comments_open {
        body = body.push(comments(domain, post, now));
    }

    let style: fn(&Theme) -> container::Style = if hovered {
        container::bordered_box
    } else {
        container::rounded_box
    };
    let card = container(body)
        .padding(CARD_PADDING)
        .width(Length::Fill)
        .style(style);

    mouse_area(card)
        .on_enter(FeedMessage::Hovered(Some(post.id)).into())
        .on_exit(FeedMessage::Hovered(None).into())
        .into()
}

fn comments<'a>(
    domain: &'a FeedDomain,
    post: &'a Post,
    now: DateTime<Utc>,
) -> Element<'a, Message> {
    let thread: Vec<Element<'a, Message>> = post
        .comments
        .iter()
        .map(|comment| {
            column![
                text(format!(
                    "{} · {}",
                    comment.author.display_name,
                    age_label(comment.created_at, now)
                ))
                .size(12),
                text(&comment.body).size(14),
            ]
            .spacing(2)
            .into()
        })
        .collect();

    let id = post.id;
    let input = text_input("Add a comment…", domain.draft(id))
        .on_input(move |draft| FeedMessage::DraftChanged(id, draft).into())
        .on_submit(FeedMessage::SubmitComment(id).into())
        .padding(8);

    column![Column::with_children(thread).spacing(8), input]
        .spacing(10)
        .padding([0, 12])
        .into()
}

fn action<'a>(label: String, message: FeedMessage) -> Element<'a, Message> {
    button(text(label).size(13))
        .on_press(message.into())
        .padding([4, 10])
        .style(button::secondary)
        .into()
}

/// Coarse "time ago" label: minutes, hours, then days.
pub fn age_label(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(created_at);
    if age.num_minutes() < 1 {
        "just now".to_string()
    } else if age.num_hours() < 1 {
        format!("{}m ago", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h ago", age.num_hours())
    } else {
        format!("{}d ago", age.num_days())
    }
}
