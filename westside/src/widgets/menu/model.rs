use westside_panel::{ContentAction, NavigationIntent};

use crate::screens::AppScreen;

/// Entries offered by the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuItem {
    Home,
    Events,
    About,
    Login,
    Register,
    Logout,
}

impl MenuItem {
    pub(crate) fn title(self) -> &'static str {
        match self {
            MenuItem::Home => "Home",
            MenuItem::Events => "Events",
            MenuItem::About => "About",
            MenuItem::Login => "Login",
            MenuItem::Register => "Register",
            MenuItem::Logout => "Logout",
        }
    }

    /// Navigation request issued when the item is selected.
    pub(crate) fn intent(self) -> NavigationIntent<AppScreen> {
        match self {
            MenuItem::Home => NavigationIntent::Replace(AppScreen::Home),
            MenuItem::Events => NavigationIntent::Replace(AppScreen::Events),
            MenuItem::About => NavigationIntent::Push(AppScreen::About),
            MenuItem::Login => NavigationIntent::Action(ContentAction::Login),
            MenuItem::Register => {
                NavigationIntent::Action(ContentAction::Register)
            },
            MenuItem::Logout => {
                NavigationIntent::Action(ContentAction::Logout)
            },
        }
    }
}

/// Menu entries for the current session state.
pub(crate) fn items_for(signed_in: bool) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::Home, MenuItem::Events, MenuItem::About];
    if signed_in {
        items.push(MenuItem::Logout);
    } else {
        items.extend([MenuItem::Login, MenuItem::Register]);
    }
    items
}

/// Read-only menu data for the presentation layer.
pub(crate) struct MenuViewModel<'a> {
    pub(crate) items: Vec<MenuItem>,
    pub(crate) selected: Option<MenuItem>,
    pub(crate) user_name: Option<&'a str>,
}
