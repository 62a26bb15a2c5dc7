pub(crate) mod auth;
pub(crate) mod events;
pub(crate) mod menu;
pub(crate) mod side_panel;
pub(crate) mod window;
