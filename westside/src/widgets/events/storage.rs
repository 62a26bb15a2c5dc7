use std::fs;
use std::path::Path;

use super::errors::EventsError;
use super::model::{EventItem, EventsFeed};

const BUNDLED_EVENTS: &str = include_str!("../../../assets/events.json");

/// Load the events feed from `path`, or the bundled feed when unset.
///
/// Events come back ordered by date.
pub(crate) fn load_events(
    path: Option<&Path>,
) -> Result<Vec<EventItem>, EventsError> {
    let payload = match path {
        Some(path) => {
            log::debug!("loading events from {}", path.display());
            fs::read_to_string(path)?
        },
        None => BUNDLED_EVENTS.to_string(),
    };

    parse_events(&payload)
}

fn parse_events(payload: &str) -> Result<Vec<EventItem>, EventsError> {
    let mut feed: EventsFeed = serde_json::from_str(payload)?;
    feed.events.sort_by(|left, right| left.date().cmp(right.date()));
    Ok(feed.events)
}
