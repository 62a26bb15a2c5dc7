use iced::widget::{
    Space, button, column, container, opaque, row, text, text_input,
};
use iced::{Element, Length, Theme, alignment};
use zeroize::Zeroizing;

use super::event::{AuthEvent, AuthIntent};
use super::model::AuthViewModel;
use crate::theme::{PALETTE, overlay_color};

const CARD_WIDTH: f32 = 320.0;
const CARD_PADDING: f32 = 20.0;
const CARD_SPACING: f32 = 12.0;
const HEADING_SIZE: f32 = 20.0;
const INPUT_PADDING: f32 = 8.0;
const ERROR_SIZE: f32 = 13.0;
const BACKDROP_OPACITY: f32 = 0.5;

/// Props for the auth modal view.
pub(crate) struct AuthProps<'a> {
    pub(crate) vm: AuthViewModel<'a>,
}

/// Render the modal form over a dimmed backdrop.
pub(crate) fn view(
    props: AuthProps<'_>,
) -> Element<'_, AuthEvent, Theme, iced::Renderer> {
    let vm = props.vm;

    let mut form = column![text(vm.heading()).size(HEADING_SIZE)]
        .spacing(CARD_SPACING)
        .width(Length::Fill);

    if vm.asks_for_name() {
        form = form.push(
            text_input("Name", vm.name)
                .on_input(|value| intent(AuthIntent::NameChanged(value)))
                .padding(INPUT_PADDING),
        );
    }

    form = form
        .push(
            text_input("Email", vm.email)
                .on_input(|value| intent(AuthIntent::EmailChanged(value)))
                .padding(INPUT_PADDING),
        )
        .push(
            text_input("Password", vm.password)
                .on_input(|value| {
                    intent(AuthIntent::PasswordChanged(Zeroizing::new(value)))
                })
                .on_submit(intent(AuthIntent::Submit))
                .secure(true)
                .padding(INPUT_PADDING),
        );

    if let Some(message) = vm.error {
        form = form.push(text(message).size(ERROR_SIZE).color(PALETTE.error));
    }

    let actions = row![
        container(Space::new()).width(Length::Fill),
        button(text("Cancel")).on_press(intent(AuthIntent::Cancel)),
        button(text(vm.heading())).on_press(intent(AuthIntent::Submit)),
    ]
    .spacing(CARD_SPACING)
    .align_y(alignment::Vertical::Center);

    let card = container(form.push(actions))
        .width(Length::Fixed(CARD_WIDTH))
        .padding(CARD_PADDING)
        .style(|_| iced::widget::container::Style {
            background: Some(PALETTE.background.into()),
            text_color: Some(PALETTE.text),
            ..Default::default()
        });

    let backdrop = overlay_color(BACKDROP_OPACITY);
    opaque(
        container(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_| iced::widget::container::Style {
                background: Some(backdrop.into()),
                ..Default::default()
            }),
    )
}

fn intent(intent: AuthIntent) -> AuthEvent {
    AuthEvent::Intent(intent)
}
