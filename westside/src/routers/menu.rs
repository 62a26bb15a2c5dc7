use iced::Task;

use crate::app::{App, AppEvent, side_panel_intent};
use crate::widgets::menu::{MenuEffect, MenuEvent, MenuIntent};
use crate::widgets::side_panel::SidePanelIntent;

/// Route a menu event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: MenuEvent) -> Task<AppEvent> {
    match event {
        MenuEvent::Intent(intent) => route_intent(app, intent),
        MenuEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, intent: MenuIntent) -> Task<AppEvent> {
    app.widgets.menu.reduce(intent).map(AppEvent::Menu)
}

fn route_effect(effect: MenuEffect) -> Task<AppEvent> {
    match effect {
        MenuEffect::Navigate { intent, title } => {
            Task::done(side_panel_intent(SidePanelIntent::Display {
                intent,
                title,
            }))
        },
    }
}
