use iced::widget::text::Wrapping;
use iced::widget::{Column, button, column, container, text};
use iced::{Element, Length, Theme};

use super::event::{MenuEvent, MenuIntent};
use super::model::{MenuItem, MenuViewModel};
use crate::theme::PALETTE;

const ROW_HEIGHT: f32 = 44.0;
const ROW_PADDING_X: f32 = 16.0;
const ROW_FONT_SIZE: f32 = 16.0;
const GREETING_FONT_SIZE: f32 = 13.0;
const GREETING_PADDING: f32 = 16.0;

/// Props for the menu view.
pub(crate) struct MenuProps<'a> {
    pub(crate) vm: MenuViewModel<'a>,
}

/// Render the menu entries with an optional greeting on top.
pub(crate) fn view(
    props: MenuProps<'_>,
) -> Element<'_, MenuEvent, Theme, iced::Renderer> {
    let vm = props.vm;

    let greeting = match vm.user_name {
        Some(name) => format!("Signed in as {name}"),
        None => String::from("Not signed in"),
    };
    let header = container(
        text(greeting)
            .size(GREETING_FONT_SIZE)
            .color(PALETTE.muted_text)
            .wrapping(Wrapping::None),
    )
    .padding(GREETING_PADDING);

    let rows = vm
        .items
        .iter()
        .map(|item| menu_row(*item, vm.selected == Some(*item)));

    column![header, Column::with_children(rows)]
        .width(Length::Fill)
        .into()
}

fn menu_row<'a>(
    item: MenuItem,
    is_selected: bool,
) -> Element<'a, MenuEvent, Theme, iced::Renderer> {
    let label = text(item.title())
        .size(ROW_FONT_SIZE)
        .wrapping(Wrapping::None);

    button(label)
        .width(Length::Fill)
        .height(Length::Fixed(ROW_HEIGHT))
        .padding([0.0, ROW_PADDING_X])
        .on_press(MenuEvent::Intent(MenuIntent::Select(item)))
        .style(move |_, status| {
            let highlighted = is_selected
                || matches!(status, iced::widget::button::Status::Hovered);
            iced::widget::button::Style {
                background: highlighted.then(|| PALETTE.selection.into()),
                text_color: PALETTE.on_primary,
                ..Default::default()
            }
        })
        .into()
}
