use iced::{Task, window};

use super::{App, AppEvent, side_panel_intent};
use crate::routers;
use crate::widgets::side_panel::SidePanelIntent;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::IcedReady => {
            Task::done(side_panel_intent(SidePanelIntent::Appeared))
        },
        AppEvent::SidePanel(event) => routers::side_panel::route(app, event),
        AppEvent::Menu(event) => routers::menu::route(app, event),
        AppEvent::Auth(event) => routers::auth::route(app, event),
        AppEvent::Events(event) => routers::events::route(app, event),
        AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
