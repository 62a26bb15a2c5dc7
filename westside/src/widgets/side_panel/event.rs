use iced::time::Instant;
use iced::{Point, Size};
use westside_panel::{ModalFlow, ModalOutcome, NavigationIntent};

use crate::screens::AppScreen;

/// Intent events handled by the side panel widget.
#[derive(Debug, Clone)]
pub(crate) enum SidePanelIntent {
    Appeared,
    Resized(Size),
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    OpenMenu,
    Back,
    Display {
        intent: NavigationIntent<AppScreen>,
        title: String,
    },
    ModalFinished(ModalOutcome),
    Tick(Instant),
}

/// Effect events produced by the side panel reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SidePanelEffect {
    PresentModal(ModalFlow),
    DismissModal,
    ResetMenu,
    Logout,
    ContentShown(AppScreen),
}

/// Side panel event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum SidePanelEvent {
    /// Intent event reduced by the side panel widget.
    Intent(SidePanelIntent),
    /// External effect orchestrated by app-level routing.
    Effect(SidePanelEffect),
}
