use serde::Deserialize;

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT",
    "NOV", "DEC",
];

/// One scheduled education event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct EventItem {
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    /// Calendar date as `YYYY-MM-DD`.
    date: String,
    #[serde(default)]
    group: Option<String>,
}

/// Top-level shape of an events feed file.
#[derive(Debug, Deserialize)]
pub(super) struct EventsFeed {
    pub(super) events: Vec<EventItem>,
}

impl EventItem {
    #[cfg(test)]
    pub(crate) fn new(id: u64, title: &str, date: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: String::new(),
            date: date.to_string(),
            group: None,
        }
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn date(&self) -> &str {
        &self.date
    }

    pub(crate) fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Three-letter month, or `None` for a malformed date.
    pub(crate) fn month_label(&self) -> Option<&'static str> {
        let (_, month, _) = self.date_parts()?;
        MONTHS.get(month.checked_sub(1)? as usize).copied()
    }

    /// Day of month without padding.
    pub(crate) fn day_label(&self) -> Option<String> {
        let (_, _, day) = self.date_parts()?;
        Some(day.to_string())
    }

    fn date_parts(&self) -> Option<(u32, u32, u32)> {
        let mut parts = self.date.splitn(3, '-');
        let year = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let day: u32 = parts.next()?.parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some((year, month, day))
    }
}

/// Loading progress of the events feed.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum EventsStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Read-only events data for the presentation layer.
pub(crate) struct EventsViewModel<'a> {
    pub(crate) events: &'a [EventItem],
    pub(crate) status: &'a EventsStatus,
}
