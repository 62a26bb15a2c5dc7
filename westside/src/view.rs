use iced::widget::{column, container, stack, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::screens::AppScreen;
use crate::theme::PALETTE;
use crate::widgets::auth::view::AuthProps;
use crate::widgets::events::view::EventsProps;
use crate::widgets::menu::view::MenuProps;
use crate::widgets::side_panel::view::SidePanelProps;
use crate::widgets::{auth, events, menu, side_panel};

const PAGE_PADDING: f32 = 24.0;
const PAGE_SPACING: f32 = 12.0;
const PAGE_TITLE_SIZE: f32 = 24.0;
const PAGE_HINT_SIZE: f32 = 14.0;

/// Compose the side panel frame, the visible screen and any modal.
pub(crate) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let user_name = app.session.current_user().map(|user| user.name());

    let menu = menu::view::view(MenuProps {
        vm: app.widgets.menu.vm(user_name),
    })
    .map(AppEvent::Menu);
    let content = screen_body(app, app.widgets.side_panel.visible_screen());

    let frame = side_panel::view::view(SidePanelProps {
        vm: app.widgets.side_panel.vm(),
        menu,
        content,
    });

    match app.widgets.auth.vm() {
        Some(vm) => {
            let modal = auth::view::view(AuthProps { vm }).map(AppEvent::Auth);
            stack![frame, modal]
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        },
        None => frame,
    }
}

fn screen_body<'a>(
    app: &'a App,
    screen: &'a AppScreen,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    match screen {
        AppScreen::Home => {
            let greeting = match app.session.current_user() {
                Some(user) => format!("Welcome back, {}.", user.name()),
                None => String::from("Welcome."),
            };
            page(
                app.settings.app_title(),
                vec![
                    greeting,
                    String::from(
                        "Swipe from the left edge or use the menu button to \
                         browse events and manage your account.",
                    ),
                ],
            )
        },
        AppScreen::Events => events::view::view(EventsProps {
            vm: app.widgets.events.vm(),
        })
        .map(AppEvent::Events),
        AppScreen::EventDetail(event) => events::view::detail(event),
        AppScreen::About => page(
            "About",
            vec![String::from(
                "Continuing medical education events for Westside clinicians.",
            )],
        ),
        AppScreen::Menu => container(text("")).into(),
    }
}

fn page<'a>(
    title: &'a str,
    lines: Vec<String>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let body = lines.into_iter().fold(
        column![text(title).size(PAGE_TITLE_SIZE)].spacing(PAGE_SPACING),
        |body, line| {
            body.push(text(line).size(PAGE_HINT_SIZE).color(PALETTE.muted_text))
        },
    );

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PAGE_PADDING)
        .align_x(alignment::Horizontal::Left)
        .into()
}
