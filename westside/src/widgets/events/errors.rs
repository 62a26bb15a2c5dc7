use thiserror::Error;

/// Errors emitted while loading the events feed.
#[derive(Debug, Error)]
pub(crate) enum EventsError {
    #[error("events IO failed")]
    Io(#[from] std::io::Error),
    #[error("events JSON failed")]
    Json(#[from] serde_json::Error),
}
