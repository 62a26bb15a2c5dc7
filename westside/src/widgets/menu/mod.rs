mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{MenuEffect, MenuEvent, MenuIntent};
use iced::Task;
pub(crate) use model::{MenuViewModel, items_for};
use state::MenuState;

/// Side menu widget owning the current selection.
pub(crate) struct MenuWidget {
    state: MenuState,
}

impl MenuWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: MenuState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, intent: MenuIntent) -> Task<MenuEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model for the given session.
    pub(crate) fn vm<'a>(
        &self,
        user_name: Option<&'a str>,
    ) -> MenuViewModel<'a> {
        MenuViewModel {
            items: items_for(user_name.is_some()),
            selected: self.state.selected(),
            user_name,
        }
    }
}
