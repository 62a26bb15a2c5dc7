#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Size, Subscription, Task, Theme};
use westside_session::SessionStore;

use crate::settings::{SettingsData, load_initial_settings};
use crate::widgets::auth::{AuthEvent, AuthWidget};
use crate::widgets::events::{EventsEvent, EventsWidget};
use crate::widgets::menu::{MenuEvent, MenuWidget};
use crate::widgets::side_panel::{
    SidePanelEvent, SidePanelIntent, SidePanelWidget,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 375.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 667.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Side panel widget
    SidePanel(SidePanelEvent),
    // Menu widget
    Menu(MenuEvent),
    // Auth modal widget
    Auth(AuthEvent),
    // Events list widget
    Events(EventsEvent),
    // Direct operations
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) side_panel: SidePanelWidget,
    pub(crate) menu: MenuWidget,
    pub(crate) auth: AuthWidget,
    pub(crate) events: EventsWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) window_size: Size,
    pub(crate) settings: SettingsData,
    pub(crate) session: SessionStore,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = load_initial_settings();
        let window_size = Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        };

        let widgets = Widgets {
            side_panel: SidePanelWidget::new(
                settings.container_config(window_size),
            ),
            menu: MenuWidget::new(),
            auth: AuthWidget::new(),
            events: EventsWidget::new(settings.events_path().cloned()),
        };

        let app = App {
            window_size,
            settings,
            session: SessionStore::new(),
            widgets,
        };

        (app, Task::done(AppEvent::IcedReady))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        self.settings.app_title().to_string()
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::Light
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

/// Wrap a side panel intent into an app event.
pub(crate) fn side_panel_intent(intent: SidePanelIntent) -> AppEvent {
    AppEvent::SidePanel(SidePanelEvent::Intent(intent))
}
