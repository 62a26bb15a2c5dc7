use iced::Task;

use crate::app::{App, AppEvent};
use crate::screens::AppScreen;
use crate::widgets::auth::{AuthEvent, AuthIntent};
use crate::widgets::events::{EventsEvent, EventsIntent};
use crate::widgets::menu::{MenuEvent, MenuIntent};
use crate::widgets::side_panel::{
    SidePanelEffect, SidePanelEvent, SidePanelIntent,
};

/// Route a side panel event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: SidePanelEvent) -> Task<AppEvent> {
    match event {
        SidePanelEvent::Intent(intent) => route_intent(app, intent),
        SidePanelEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, intent: SidePanelIntent) -> Task<AppEvent> {
    app.widgets
        .side_panel
        .reduce(intent)
        .map(AppEvent::SidePanel)
}

fn route_effect(app: &mut App, effect: SidePanelEffect) -> Task<AppEvent> {
    use SidePanelEffect as E;

    match effect {
        E::PresentModal(flow) => Task::done(AppEvent::Auth(
            AuthEvent::Intent(AuthIntent::Open(flow)),
        )),
        E::DismissModal => {
            Task::done(AppEvent::Auth(AuthEvent::Intent(AuthIntent::Close)))
        },
        E::ResetMenu => {
            Task::done(AppEvent::Menu(MenuEvent::Intent(MenuIntent::Reset)))
        },
        E::Logout => {
            app.session.logout();
            Task::none()
        },
        E::ContentShown(AppScreen::Events) => Task::done(AppEvent::Events(
            EventsEvent::Intent(EventsIntent::Load),
        )),
        E::ContentShown(screen) => {
            log::debug!("content shows {screen:?}");
            Task::none()
        },
    }
}
