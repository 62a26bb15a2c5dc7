use iced::Task;
use westside_panel::{NavigationIntent, Screen};

use crate::app::{App, AppEvent, side_panel_intent};
use crate::screens::AppScreen;
use crate::widgets::events::{EventsEffect, EventsEvent, EventsIntent};
use crate::widgets::side_panel::SidePanelIntent;

/// Route an events widget event through reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: EventsEvent) -> Task<AppEvent> {
    match event {
        EventsEvent::Intent(intent) => route_intent(app, intent),
        EventsEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, intent: EventsIntent) -> Task<AppEvent> {
    app.widgets.events.reduce(intent).map(AppEvent::Events)
}

fn route_effect(effect: EventsEffect) -> Task<AppEvent> {
    match effect {
        EventsEffect::OpenEvent(event) => {
            let screen = AppScreen::EventDetail(event);
            let title = screen.title().to_string();
            Task::done(side_panel_intent(SidePanelIntent::Display {
                intent: NavigationIntent::Push(screen),
                title,
            }))
        },
    }
}
