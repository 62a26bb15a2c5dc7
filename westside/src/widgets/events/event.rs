use super::model::EventItem;

/// Intent events handled by the events widget.
#[derive(Debug, Clone)]
pub(crate) enum EventsIntent {
    Load,
    Loaded(Vec<EventItem>),
    LoadFailed(String),
    Select(u64),
}

/// Effect events produced by the events reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EventsEffect {
    OpenEvent(EventItem),
}

/// Events widget event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum EventsEvent {
    Intent(EventsIntent),
    Effect(EventsEffect),
}
