//! Side-panel controller for the Westside app shell.
//!
//! The crate is UI-agnostic apart from borrowing [`iced`] geometry and
//! color types. It is organised leaves first:
//! - [`overlay_opacity`] maps a panel offset onto overlay dimming;
//! - [`SidePanel`] holds the four-state [`PanelState`] machine and the live
//!   geometry;
//! - [`GestureInterpreter`] turns drag samples into panel transitions;
//! - [`NavigationIntent`]s are routed onto [`NavigationStack`]s with
//!   [`ChromeConfig`] re-applied on every visible change;
//! - [`Container`] wires everything together and returns
//!   [`ContainerEffect`]s for the host to execute.
//!
//! All state lives on the host's UI thread; nothing here locks or spawns.
//!
//! # Quick Example
//!
//! ```
//! use iced::Point;
//! use westside_panel::{
//!     Container, ContainerConfig, GestureSample, NavigationIntent,
//!     PanelState, Screen,
//! };
//!
//! #[derive(Debug, Clone)]
//! struct Page(&'static str);
//!
//! impl Screen for Page {
//!     fn title(&self) -> &str {
//!         self.0
//!     }
//! }
//!
//! let mut container =
//!     Container::new(ContainerConfig::default(), Page("Menu"), Page("Home"))
//!         .expect("default width is valid");
//!
//! assert!(container.gesture_should_begin(Point::new(8.0, 200.0)).is_accepted());
//! let _ = container.gesture_sample(GestureSample::Changed { translation_x: 250.0 });
//! let _ = container.gesture_sample(GestureSample::Ended);
//! assert_eq!(container.panel().state(), PanelState::Open);
//!
//! let _ = container.display(NavigationIntent::Replace(Page("Events")), "Events");
//! assert_eq!(container.panel().state(), PanelState::Closed);
//! assert_eq!(container.content().depth(), 1);
//! ```

mod chrome;
mod container;
mod effect;
mod error;
mod gesture;
mod overlay;
mod panel;
mod router;
mod screen;
mod stack;

pub use chrome::{
    BACK_LABEL, ChromeConfig, ChromeTheme, LeftControl, PRIMARY_COLOR,
    content_chrome, menu_chrome,
};
pub use container::{Container, ContainerConfig};
pub use effect::{ContainerEffect, ContentAction, ModalFlow, ModalOutcome};
pub use error::PanelError;
pub use gesture::{
    FormFactor, GestureConfig, GestureDecision, GestureInterpreter,
    GestureSample, INVISIBLE_SWIPE_ZONE_WIDTH, settle_target,
};
pub use overlay::{MAX_OVERLAY_OPACITY, overlay_opacity};
pub use panel::{
    DEFAULT_PANEL_WIDTH, Easing, PANEL_ANIMATION_DURATION, PanelAnimation,
    PanelState, SidePanel,
};
pub use router::NavigationIntent;
pub use screen::Screen;
pub use stack::{NavigationStack, StackEntry};
