use iced::Task;

use super::event::{MenuEffect, MenuEvent, MenuIntent};
use super::state::MenuState;

/// Reduce a menu intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut MenuState,
    intent: MenuIntent,
) -> Task<MenuEvent> {
    match intent {
        MenuIntent::Select(item) => {
            log::debug!("menu item selected: {}", item.title());
            state.select(item);
            Task::done(MenuEvent::Effect(MenuEffect::Navigate {
                intent: item.intent(),
                title: item.title().to_string(),
            }))
        },
        MenuIntent::Reset => {
            state.reset();
            Task::none()
        },
    }
}
