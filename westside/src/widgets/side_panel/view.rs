use iced::widget::text::Wrapping;
use iced::widget::{
    Space, Stack, button, column, container, mouse_area, row, text,
};
use iced::{Element, Length, Theme, alignment};
use westside_panel::{ChromeConfig, LeftControl};

use super::event::SidePanelIntent;
use super::model::SidePanelViewModel;
use crate::app::{AppEvent, side_panel_intent};
use crate::theme::{PALETTE, overlay_color};

const BAR_HEIGHT: f32 = 44.0;
const BAR_PADDING_X: f32 = 8.0;
const BAR_TITLE_SIZE: f32 = 17.0;
const BAR_BUTTON_SIZE: f32 = 16.0;
const BAR_SIDE_WIDTH: f32 = 88.0;
const MENU_GLYPH: &str = "\u{2630}";

/// Props for the side panel frame.
pub(crate) struct SidePanelProps<'a> {
    pub(crate) vm: SidePanelViewModel<'a>,
    pub(crate) menu: Element<'a, AppEvent, Theme, iced::Renderer>,
    pub(crate) content: Element<'a, AppEvent, Theme, iced::Renderer>,
}

/// Render content, dimming overlay and panel as one pointer-tracked stack.
pub(crate) fn view(
    props: SidePanelProps<'_>,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let SidePanelProps { vm, menu, content } = props;

    let content_bar = nav_bar(vm.content_chrome(), vm.back_label());
    let content_layer = container(column![content_bar, content])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| iced::widget::container::Style {
            background: Some(PALETTE.background.into()),
            text_color: Some(PALETTE.text),
            ..Default::default()
        });

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![content_layer.into()];

    if vm.overlay_visible() {
        let color = overlay_color(vm.opacity);
        let overlay = container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| iced::widget::container::Style {
                background: Some(color.into()),
                ..Default::default()
            });
        // Claims presses so content underneath stays inert.
        layers.push(
            mouse_area(overlay)
                .on_press(side_panel_intent(SidePanelIntent::PointerPressed))
                .on_release(side_panel_intent(
                    SidePanelIntent::PointerReleased,
                ))
                .into(),
        );
    }

    let visible_width = vm.visible_width();
    if visible_width > 0.0 {
        let menu_bar = nav_bar(vm.menu_chrome(), None);
        let panel = container(column![menu_bar, menu])
            .width(Length::Fixed(visible_width))
            .height(Length::Fill)
            .clip(true)
            .style(|_| iced::widget::container::Style {
                background: Some(PALETTE.panel_background.into()),
                text_color: Some(PALETTE.on_primary),
                ..Default::default()
            });
        layers.push(panel.into());
    }

    let stacked = Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill);

    mouse_area(stacked)
        .on_move(|position| {
            side_panel_intent(SidePanelIntent::PointerMoved(position))
        })
        .on_press(side_panel_intent(SidePanelIntent::PointerPressed))
        .on_release(side_panel_intent(SidePanelIntent::PointerReleased))
        .into()
}

fn nav_bar<'a>(
    chrome: Option<&'a ChromeConfig>,
    back_label: Option<&'a str>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let Some(chrome) = chrome else {
        return container(Space::new()).height(Length::Fixed(0.0)).into();
    };
    if chrome.bar_hidden {
        return container(Space::new()).height(Length::Fixed(0.0)).into();
    }

    let tint = chrome.tint;
    let leading: Element<'a, AppEvent, Theme, iced::Renderer> =
        match (chrome.left_control, back_label) {
            (LeftControl::Menu, _) => bar_button(
                MENU_GLYPH.to_string(),
                SidePanelIntent::OpenMenu,
                tint,
            ),
            (LeftControl::Default, Some(label)) => bar_button(
                format!("\u{2039} {label}"),
                SidePanelIntent::Back,
                tint,
            ),
            (LeftControl::Default, None) => container(Space::new()).into(),
        };

    let title = text(chrome.title.as_str())
        .size(BAR_TITLE_SIZE)
        .color(chrome.title_color)
        .wrapping(Wrapping::None);

    let bar = row![
        container(leading).width(Length::Fixed(BAR_SIDE_WIDTH)),
        container(title)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
        container(Space::new()).width(Length::Fixed(BAR_SIDE_WIDTH)),
    ]
    .align_y(alignment::Vertical::Center);

    let bar_tint = chrome.bar_tint;
    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(BAR_HEIGHT))
        .padding([0.0, BAR_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(bar_tint.into()),
            ..Default::default()
        })
        .into()
}

fn bar_button<'a>(
    label: String,
    intent: SidePanelIntent,
    tint: iced::Color,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    button(
        text(label)
            .size(BAR_BUTTON_SIZE)
            .color(tint)
            .wrapping(Wrapping::None),
    )
    .on_press(side_panel_intent(intent))
    .style(|_, _| iced::widget::button::Style {
        background: None,
        ..Default::default()
    })
    .into()
}
