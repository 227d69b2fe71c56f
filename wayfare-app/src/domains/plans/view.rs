use iced::widget::{Column, Row, column, container, scrollable, text};
use iced::{Element, Length};
use wayfare_core::{DayCard, PlanSummary};
use wayfare_model::TravelPlan;

use super::PlansDomain;
use crate::common::messages::Message;
use crate::infra::constants::layout::{CARD_PADDING, PLAN_CARD_WIDTH};

pub fn view(domain: &PlansDomain) -> Element<'_, Message> {
    if domain.plans.is_empty() {
        return text("No trips planned yet").size(16).into();
    }
    let plans: Vec<Element<'_, Message>> =
        domain.plans.iter().map(plan_section).collect();
    Column::with_children(plans).spacing(24).into()
}

fn plan_section(plan: &TravelPlan) -> Element<'_, Message> {
    let summary = PlanSummary::from_plan(plan);
    let header = column![
        text(summary.title).size(22),
        text(format!(
            "{} · {} · {} days, {} activities",
            summary.destination,
            summary.date_range,
            summary.day_count,
            summary.activity_count
        ))
        .size(14),
    ]
    .spacing(4);

    let cards: Vec<Element<'_, Message>> =
        PlanSummary::cards(plan).into_iter().map(day_card).collect();
    let strip = scrollable(Row::with_children(cards).spacing(16))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .width(Length::Fill);

    column![header, strip].spacing(12).into()
}

fn day_card<'a>(card: DayCard) -> Element<'a, Message> {
    let lines: Vec<Element<'a, Message>> = card
        .lines
        .into_iter()
        .map(|line| text(line).size(14).into())
        .collect();
    let body = column![
        text(card.title).size(18),
        text(card.subtitle).size(13),
        Column::with_children(lines).spacing(6),
    ]
    .spacing(8);

    container(body)
        .width(Length::Fixed(PLAN_CARD_WIDTH))
        .padding(CARD_PADDING)
        .style(container::rounded_box)
        .into()
}
