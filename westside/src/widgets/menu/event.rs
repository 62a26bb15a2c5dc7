use westside_panel::NavigationIntent;

use super::model::MenuItem;
use crate::screens::AppScreen;

/// Intent events handled by the menu widget.
#[derive(Debug, Clone)]
pub(crate) enum MenuIntent {
    Select(MenuItem),
    Reset,
}

/// Effect events produced by the menu reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MenuEffect {
    Navigate {
        intent: NavigationIntent<AppScreen>,
        title: String,
    },
}

/// Menu event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum MenuEvent {
    Intent(MenuIntent),
    Effect(MenuEffect),
}
