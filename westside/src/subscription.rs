use std::time::Duration;

use iced::{Subscription, window};

use super::{App, AppEvent, side_panel_intent};
use crate::widgets::side_panel::{PANEL_TICK_MS, SidePanelIntent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    // Drive the panel settle animation only while one is running.
    if app.widgets.side_panel.is_animating() {
        let tick = iced::time::every(Duration::from_millis(PANEL_TICK_MS))
            .map(|now| side_panel_intent(SidePanelIntent::Tick(now)));
        subs.push(tick);
    }

    Subscription::batch(subs)
}
