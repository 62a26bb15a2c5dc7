use iced::Task;

use super::event::{EventsEffect, EventsEvent, EventsIntent};
use super::state::EventsState;
use super::storage::load_events;

/// Reduce an events intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut EventsState,
    intent: EventsIntent,
) -> Task<EventsEvent> {
    match intent {
        EventsIntent::Load => {
            if !state.needs_load() {
                return Task::none();
            }
            state.begin_load();
            let source = state.source().cloned();
            Task::perform(
                async move { load_events(source.as_deref()) },
                |result| match result {
                    Ok(events) => {
                        EventsEvent::Intent(EventsIntent::Loaded(events))
                    },
                    Err(err) => EventsEvent::Intent(EventsIntent::LoadFailed(
                        format!("{err}"),
                    )),
                },
            )
        },
        EventsIntent::Loaded(events) => {
            log::info!("loaded {} events", events.len());
            state.set_events(events);
            Task::none()
        },
        EventsIntent::LoadFailed(message) => {
            log::warn!("events feed failed to load: {message}");
            state.set_failed(message);
            Task::none()
        },
        EventsIntent::Select(id) => match state.find(id) {
            Some(event) => Task::done(EventsEvent::Effect(
                EventsEffect::OpenEvent(event.clone()),
            )),
            None => {
                log::warn!("selected unknown event {id}");
                Task::none()
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{EventsIntent, reduce};
    use crate::widgets::events::model::{EventItem, EventsStatus};
    use crate::widgets::events::state::EventsState;

    #[test]
    fn given_idle_state_when_load_requested_then_status_is_loading() {
        let mut state = EventsState::new(None);

        let _ = reduce(&mut state, EventsIntent::Load);

        assert_eq!(state.status(), &EventsStatus::Loading);
        assert!(!state.needs_load());
    }

    #[test]
    fn given_loaded_events_when_load_requested_again_then_cache_is_kept() {
        let mut state = EventsState::new(None);
        let events = vec![EventItem::new(1, "Rounds", "2026-01-02")];
        let _ = reduce(&mut state, EventsIntent::Loaded(events));

        let _ = reduce(&mut state, EventsIntent::Load);

        assert_eq!(state.status(), &EventsStatus::Loaded);
        assert_eq!(state.events().len(), 1);
    }

    #[test]
    fn given_failed_load_when_load_requested_then_it_retries() {
        let mut state = EventsState::new(None);
        let _ = reduce(&mut state, EventsIntent::Load);
        let _ = reduce(
            &mut state,
            EventsIntent::LoadFailed(String::from("events IO failed")),
        );
        assert!(state.needs_load());

        let _ = reduce(&mut state, EventsIntent::Load);

        assert_eq!(state.status(), &EventsStatus::Loading);
    }
}
