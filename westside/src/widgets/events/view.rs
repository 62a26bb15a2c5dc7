use iced::widget::text::Wrapping;
use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Element, Length, Theme, alignment};

use super::event::{EventsEvent, EventsIntent};
use super::model::{EventItem, EventsStatus, EventsViewModel};
use crate::theme::PALETTE;

const LIST_PADDING: f32 = 12.0;
const ROW_SPACING: f32 = 12.0;
const ROW_PADDING: f32 = 10.0;
const BADGE_WIDTH: f32 = 52.0;
const BADGE_MONTH_SIZE: f32 = 11.0;
const BADGE_DAY_SIZE: f32 = 22.0;
const TITLE_SIZE: f32 = 16.0;
const CAPTION_SIZE: f32 = 12.0;
const DETAIL_PADDING: f32 = 20.0;
const DETAIL_TITLE_SIZE: f32 = 22.0;

/// Props for the events list view.
pub(crate) struct EventsProps<'a> {
    pub(crate) vm: EventsViewModel<'a>,
}

/// Render the events list, or its loading and error placeholders.
pub(crate) fn view(
    props: EventsProps<'_>,
) -> Element<'_, EventsEvent, Theme, iced::Renderer> {
    let vm = props.vm;

    match vm.status {
        EventsStatus::Idle | EventsStatus::Loading => {
            placeholder(text("Loading events...").color(PALETTE.muted_text))
        },
        EventsStatus::Failed(message) => placeholder(
            column![
                text(format!("Events could not be loaded: {message}"))
                    .color(PALETTE.error),
                button(text("Retry"))
                    .on_press(EventsEvent::Intent(EventsIntent::Load)),
            ]
            .spacing(ROW_SPACING)
            .align_x(alignment::Horizontal::Center),
        ),
        EventsStatus::Loaded if vm.events.is_empty() => {
            placeholder(text("No upcoming events.").color(PALETTE.muted_text))
        },
        EventsStatus::Loaded => {
            let rows = vm.events.iter().map(event_row);
            scrollable(
                Column::with_children(rows)
                    .spacing(ROW_SPACING)
                    .padding(LIST_PADDING)
                    .width(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        },
    }
}

/// Render the detail page of one event.
pub(crate) fn detail<'a, Message: 'a>(
    event: &'a EventItem,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let mut content = column![
        text(event.title()).size(DETAIL_TITLE_SIZE),
        text(event.date()).size(CAPTION_SIZE).color(PALETTE.muted_text),
    ]
    .spacing(ROW_SPACING);

    if let Some(group) = event.group() {
        content = content.push(
            text(group).size(CAPTION_SIZE).color(PALETTE.primary),
        );
    }

    scrollable(
        container(content.push(text(event.description())))
            .padding(DETAIL_PADDING)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn event_row(
    event: &EventItem,
) -> Element<'_, EventsEvent, Theme, iced::Renderer> {
    let badge = column![
        text(event.month_label().unwrap_or("---"))
            .size(BADGE_MONTH_SIZE)
            .color(PALETTE.on_primary),
        text(event.day_label().unwrap_or_default())
            .size(BADGE_DAY_SIZE)
            .color(PALETTE.on_primary),
    ]
    .align_x(alignment::Horizontal::Center);

    let badge = container(badge)
        .width(Length::Fixed(BADGE_WIDTH))
        .align_x(alignment::Horizontal::Center)
        .style(|_| iced::widget::container::Style {
            background: Some(PALETTE.primary.into()),
            ..Default::default()
        });

    let mut caption = column![
        text(event.title())
            .size(TITLE_SIZE)
            .wrapping(Wrapping::WordOrGlyph),
    ];
    if let Some(group) = event.group() {
        caption = caption.push(
            text(group).size(CAPTION_SIZE).color(PALETTE.muted_text),
        );
    }

    button(
        row![badge, caption]
            .spacing(ROW_SPACING)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .padding(ROW_PADDING)
    .on_press(EventsEvent::Intent(EventsIntent::Select(event.id())))
    .style(|_, status| iced::widget::button::Style {
        background: matches!(status, iced::widget::button::Status::Hovered)
            .then(|| PALETTE.selection.scale_alpha(0.12).into()),
        text_color: PALETTE.text,
        ..Default::default()
    })
    .into()
}

fn placeholder<'a>(
    content: impl Into<Element<'a, EventsEvent, Theme, iced::Renderer>>,
) -> Element<'a, EventsEvent, Theme, iced::Renderer> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
