use westside_panel::Screen;

use crate::widgets::events::EventItem;

/// Every screen the shell can place on a navigation stack.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppScreen {
    Menu,
    Home,
    Events,
    EventDetail(EventItem),
    About,
}

impl Screen for AppScreen {
    fn title(&self) -> &str {
        match self {
            AppScreen::Menu => "Menu",
            AppScreen::Home => "Home",
            AppScreen::Events => "Events",
            AppScreen::EventDetail(event) => event.title(),
            AppScreen::About => "About",
        }
    }

    /// Detail and about pages are only reached by drilling in, so the
    /// bar shows a back button instead of the menu toggle.
    fn is_directly_navigable(&self) -> bool {
        !matches!(self, AppScreen::EventDetail(_) | AppScreen::About)
    }
}
