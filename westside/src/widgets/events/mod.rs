mod errors;
mod event;
mod model;
mod reducer;
mod state;
mod storage;
pub(crate) mod view;

use std::path::PathBuf;

pub(crate) use event::{EventsEffect, EventsEvent, EventsIntent};
use iced::Task;
pub(crate) use model::{EventItem, EventsViewModel};
use state::EventsState;

/// Events list widget owning the cached feed.
pub(crate) struct EventsWidget {
    state: EventsState,
}

impl EventsWidget {
    /// Construct the widget reading from `source`, or the bundled feed.
    pub(crate) fn new(source: Option<PathBuf>) -> Self {
        Self {
            state: EventsState::new(source),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, intent: EventsIntent) -> Task<EventsEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> EventsViewModel<'_> {
        EventsViewModel {
            events: self.state.events(),
            status: self.state.status(),
        }
    }
}
