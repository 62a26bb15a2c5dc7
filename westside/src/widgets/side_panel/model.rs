use westside_panel::{ChromeConfig, NavigationStack, PanelState};

use crate::screens::AppScreen;

/// Interval between animation frames while the panel settles.
pub(crate) const PANEL_TICK_MS: u64 = 16;

/// Read-only side panel data for the presentation layer.
pub(crate) struct SidePanelViewModel<'a> {
    pub(crate) state: PanelState,
    pub(crate) offset: f32,
    pub(crate) opacity: f32,
    pub(crate) width: f32,
    pub(crate) menu: &'a NavigationStack<AppScreen>,
    pub(crate) content: &'a NavigationStack<AppScreen>,
}

impl<'a> SidePanelViewModel<'a> {
    /// Width of the panel strip currently on screen.
    pub(crate) fn visible_width(&self) -> f32 {
        (self.width + self.offset).clamp(0.0, self.width)
    }

    /// Chrome of the visible content screen.
    pub(crate) fn content_chrome(&self) -> Option<&'a ChromeConfig> {
        self.content.top().chrome()
    }

    /// Chrome of the visible menu screen.
    pub(crate) fn menu_chrome(&self) -> Option<&'a ChromeConfig> {
        self.menu.top().chrome()
    }

    /// Label of the entry a back button would return to.
    pub(crate) fn back_label(&self) -> Option<&'a str> {
        let entries = self.content.entries();
        entries
            .len()
            .checked_sub(2)
            .and_then(|index| entries.get(index))
            .map(|entry| entry.label())
    }

    /// Whether the dimming overlay should be drawn and intercept input.
    ///
    /// A closed panel may still be fading out.
    pub(crate) fn overlay_visible(&self) -> bool {
        self.state != PanelState::Closed || self.opacity > 0.0
    }
}
