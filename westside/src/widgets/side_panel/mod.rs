mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidePanelEffect, SidePanelEvent, SidePanelIntent};
use iced::Task;
pub(crate) use model::{PANEL_TICK_MS, SidePanelViewModel};
use state::SidePanelState;
use westside_panel::{Container, ContainerConfig};

use crate::screens::AppScreen;

/// Side panel widget owning the container and pointer tracking.
pub(crate) struct SidePanelWidget {
    state: SidePanelState,
}

impl SidePanelWidget {
    /// Construct the widget with menu and home as stack roots.
    ///
    /// An unusable configuration falls back to the default one.
    pub(crate) fn new(config: ContainerConfig) -> Self {
        let container =
            match Container::new(config, AppScreen::Menu, AppScreen::Home) {
                Ok(container) => container,
                Err(err) => {
                    log::error!("panel configuration rejected: {err}");
                    Container::with_defaults(AppScreen::Menu, AppScreen::Home)
                },
            };

        Self {
            state: SidePanelState::new(container),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: SidePanelIntent,
    ) -> Task<SidePanelEvent> {
        reducer::reduce(&mut self.state, intent)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> SidePanelViewModel<'_> {
        let container = self.state.container();
        let (offset, opacity) = self.state.presented_geometry();

        SidePanelViewModel {
            state: container.panel().state(),
            offset,
            opacity,
            width: container.panel().width(),
            menu: container.menu(),
            content: container.content(),
        }
    }

    /// Return whether a settle animation is still playing.
    pub(crate) fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Return the screen on top of the content stack.
    pub(crate) fn visible_screen(&self) -> &AppScreen {
        self.state.container().content().top().screen()
    }
}
