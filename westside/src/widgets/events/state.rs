use std::path::PathBuf;

use super::model::{EventItem, EventsStatus};

/// Cached events feed and its loading status.
#[derive(Debug, Default)]
pub(super) struct EventsState {
    source: Option<PathBuf>,
    events: Vec<EventItem>,
    status: EventsStatus,
}

impl EventsState {
    pub(super) fn new(source: Option<PathBuf>) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    pub(super) fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }

    pub(super) fn events(&self) -> &[EventItem] {
        &self.events
    }

    pub(super) fn status(&self) -> &EventsStatus {
        &self.status
    }

    /// Whether a load request should start a fetch.
    pub(super) fn needs_load(&self) -> bool {
        matches!(self.status, EventsStatus::Idle | EventsStatus::Failed(_))
    }

    pub(super) fn begin_load(&mut self) {
        self.status = EventsStatus::Loading;
    }

    pub(super) fn set_events(&mut self, events: Vec<EventItem>) {
        self.events = events;
        self.status = EventsStatus::Loaded;
    }

    pub(super) fn set_failed(&mut self, message: String) {
        self.status = EventsStatus::Failed(message);
    }

    pub(super) fn find(&self, id: u64) -> Option<&EventItem> {
        self.events.iter().find(|event| event.id() == id)
    }
}
