use iced::Task;
use iced::time::Instant;
use westside_panel::ContainerEffect;

use super::event::{SidePanelEffect, SidePanelEvent, SidePanelIntent};
use super::state::SidePanelState;
use crate::screens::AppScreen;

/// Reduce a side panel intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut SidePanelState,
    intent: SidePanelIntent,
) -> Task<SidePanelEvent> {
    let effects = match intent {
        SidePanelIntent::Appeared => state.appeared(),
        SidePanelIntent::Resized(size) => state.resized(size),
        SidePanelIntent::PointerMoved(position) => {
            state.pointer_moved(position)
        },
        SidePanelIntent::PointerPressed => state.pointer_pressed(),
        SidePanelIntent::PointerReleased => state.pointer_released(),
        SidePanelIntent::OpenMenu => state.container_mut().open_menu(),
        SidePanelIntent::Back => state.container_mut().pop(),
        SidePanelIntent::Display { intent, title } => {
            state.container_mut().display(intent, &title)
        },
        SidePanelIntent::ModalFinished(outcome) => {
            state.container_mut().modal_finished(outcome)
        },
        SidePanelIntent::Tick(now) => {
            state.tick(now);
            return Task::none();
        },
    };

    apply_effects(state, effects, Instant::now())
}

/// Play panel animations locally and forward everything else.
fn apply_effects(
    state: &mut SidePanelState,
    effects: Vec<ContainerEffect>,
    now: Instant,
) -> Task<SidePanelEvent> {
    let mut forwarded = Vec::new();
    for effect in effects {
        if let ContainerEffect::AnimatePanel(animation) = effect {
            state.start_animation(animation, now);
            continue;
        }

        let visible = state.container().content().top().screen();
        if let Some(effect) = host_effect(effect, visible) {
            forwarded.push(Task::done(SidePanelEvent::Effect(effect)));
        }
    }

    Task::batch(forwarded)
}

/// Translate a container effect into the app-level effect it implies.
fn host_effect(
    effect: ContainerEffect,
    visible: &AppScreen,
) -> Option<SidePanelEffect> {
    match effect {
        ContainerEffect::AnimatePanel(_) => None,
        ContainerEffect::PushContent { .. }
        | ContainerEffect::ReplaceContent { .. }
        | ContainerEffect::PopContent { .. } => {
            Some(SidePanelEffect::ContentShown(visible.clone()))
        },
        ContainerEffect::ResetMenu => Some(SidePanelEffect::ResetMenu),
        ContainerEffect::PresentModal(flow) => {
            Some(SidePanelEffect::PresentModal(flow))
        },
        ContainerEffect::DismissModal => Some(SidePanelEffect::DismissModal),
        ContainerEffect::Logout => Some(SidePanelEffect::Logout),
    }
}
