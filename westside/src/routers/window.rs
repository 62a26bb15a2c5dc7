use iced::{Size, Task};

use crate::app::{App, AppEvent, side_panel_intent};
use crate::widgets::side_panel::SidePanelIntent;

/// Track the window size and let the container re-structure its view.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    if app.window_size == size {
        return Task::none();
    }
    app.window_size = size;
    Task::done(side_panel_intent(SidePanelIntent::Resized(size)))
}
