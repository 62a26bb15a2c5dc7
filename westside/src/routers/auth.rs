use iced::Task;

use crate::app::{App, AppEvent, side_panel_intent};
use crate::widgets::auth::{AuthCtx, AuthEffect, AuthEvent, AuthIntent};
use crate::widgets::side_panel::SidePanelIntent;

/// Route an auth event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: AuthEvent) -> Task<AppEvent> {
    match event {
        AuthEvent::Intent(intent) => route_intent(app, intent),
        AuthEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, intent: AuthIntent) -> Task<AppEvent> {
    let ctx = AuthCtx {
        session: &mut app.session,
    };
    app.widgets.auth.reduce(intent, ctx).map(AppEvent::Auth)
}

fn route_effect(effect: AuthEffect) -> Task<AppEvent> {
    match effect {
        AuthEffect::Finished(outcome) => {
            Task::done(side_panel_intent(SidePanelIntent::ModalFinished(
                outcome,
            )))
        },
    }
}
