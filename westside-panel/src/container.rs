use iced::{Point, Size};

use crate::chrome::ChromeTheme;
use crate::effect::{ContainerEffect, ModalFlow, ModalOutcome};
use crate::error::PanelError;
use crate::gesture::{
    GestureConfig, GestureDecision, GestureInterpreter, GestureSample,
};
use crate::panel::{DEFAULT_PANEL_WIDTH, PanelAnimation, SidePanel};
use crate::router::{ContentRouter, NavigationIntent};
use crate::screen::Screen;
use crate::stack::NavigationStack;

/// Construction parameters for a [`Container`].
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    pub panel_width: f32,
    pub gesture: GestureConfig,
    pub chrome: ChromeTheme,
    pub view_size: Size,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            panel_width: DEFAULT_PANEL_WIDTH,
            gesture: GestureConfig::default(),
            chrome: ChromeTheme::default(),
            view_size: Size::new(375.0, 667.0),
        }
    }
}

/// Top-level side-panel container.
///
/// Owns the panel, the menu and content stacks and the presented modal.
/// Every mutating call returns the host effects it produced.
#[derive(Debug, Clone)]
pub struct Container<S> {
    panel: SidePanel,
    gestures: GestureInterpreter,
    router: ContentRouter<S>,
    view_size: Size,
}

impl<S: Screen> Container<S> {
    pub fn new(
        config: ContainerConfig,
        menu_root: S,
        content_root: S,
    ) -> Result<Self, PanelError> {
        Ok(Self {
            panel: SidePanel::new(config.panel_width)?,
            gestures: GestureInterpreter::new(config.gesture),
            router: ContentRouter::new(config.chrome, menu_root, content_root),
            view_size: config.view_size,
        })
    }

    /// Container with a default-width panel and gesture settings.
    pub fn with_defaults(menu_root: S, content_root: S) -> Self {
        let config = ContainerConfig::default();
        Self {
            panel: SidePanel::default(),
            gestures: GestureInterpreter::new(config.gesture),
            router: ContentRouter::new(config.chrome, menu_root, content_root),
            view_size: config.view_size,
        }
    }

    pub fn panel(&self) -> &SidePanel {
        &self.panel
    }

    pub fn menu(&self) -> &NavigationStack<S> {
        self.router.menu()
    }

    pub fn content(&self) -> &NavigationStack<S> {
        self.router.content()
    }

    /// Modal flow currently presented over the container, if any.
    pub fn modal(&self) -> Option<ModalFlow> {
        self.router.modal()
    }

    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Host is about to show the container: make sure bars are configured.
    pub fn view_will_appear(&mut self) {
        self.router.refresh_chrome();
    }

    /// Host finished showing the container.
    pub fn view_did_appear(&mut self) -> Vec<ContainerEffect> {
        self.structure_view()
    }

    /// Host view is changing size.
    pub fn view_will_transition(&mut self, size: Size) -> Vec<ContainerEffect> {
        self.view_size = size;
        self.structure_view()
    }

    /// Menu button tapped.
    pub fn open_menu(&mut self) -> Vec<ContainerEffect> {
        animate(self.panel.request_open())
    }

    /// Overlay tapped.
    pub fn close_menu(&mut self) -> Vec<ContainerEffect> {
        animate(self.panel.request_close())
    }

    /// Decide whether a drag starting at `start` drives the panel.
    pub fn gesture_should_begin(&mut self, start: Point) -> GestureDecision {
        self.gestures
            .should_begin(&mut self.panel, start, self.view_size.width)
    }

    /// Feed a drag sample.
    pub fn gesture_sample(
        &mut self,
        sample: GestureSample,
    ) -> Vec<ContainerEffect> {
        animate(self.gestures.handle_sample(&mut self.panel, sample))
    }

    pub fn should_recognize_simultaneously(&self) -> bool {
        self.gestures.should_recognize_simultaneously()
    }

    /// Route a menu selection.
    pub fn display(
        &mut self,
        intent: NavigationIntent<S>,
        title: &str,
    ) -> Vec<ContainerEffect> {
        self.router.display(&mut self.panel, intent, title)
    }

    /// Host back control.
    pub fn pop(&mut self) -> Vec<ContainerEffect> {
        self.router.pop(&mut self.panel)
    }

    /// Terminal outcome of the presented login/registration flow.
    pub fn modal_finished(
        &mut self,
        outcome: ModalOutcome,
    ) -> Vec<ContainerEffect> {
        self.router.modal_finished(outcome)
    }

    fn structure_view(&mut self) -> Vec<ContainerEffect> {
        animate(self.panel.request_close())
    }
}

fn animate(animation: Option<PanelAnimation>) -> Vec<ContainerEffect> {
    animation
        .map(ContainerEffect::AnimatePanel)
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use iced::{Point, Size};

    use super::{Container, ContainerConfig};
    use crate::chrome::{BACK_LABEL, LeftControl};
    use crate::effect::{
        ContainerEffect, ContentAction, ModalFlow, ModalOutcome,
    };
    use crate::gesture::GestureSample;
    use crate::panel::{DEFAULT_PANEL_WIDTH, PanelState};
    use crate::router::NavigationIntent;
    use crate::screen::Screen;

    #[derive(Debug, Clone, PartialEq)]
    enum Page {
        Menu,
        Home,
        Events,
        Detail,
    }

    impl Screen for Page {
        fn title(&self) -> &str {
            match self {
                Page::Menu => "Menu",
                Page::Home => "Home",
                Page::Events => "Events",
                Page::Detail => "Detail",
            }
        }

        fn is_directly_navigable(&self) -> bool {
            !matches!(self, Page::Detail)
        }
    }

    fn container() -> Container<Page> {
        Container::new(
            ContainerConfig {
                panel_width: 300.0,
                ..ContainerConfig::default()
            },
            Page::Menu,
            Page::Home,
        )
        .expect("valid config")
    }

    fn content(container: &Container<Page>) -> Vec<Page> {
        container.content().screens().cloned().collect()
    }

    fn animations(effects: &[ContainerEffect]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, ContainerEffect::AnimatePanel(_)))
            .count()
    }

    #[test]
    fn given_default_container_when_created_then_it_matches_default_config() {
        let container = Container::with_defaults(Page::Menu, Page::Home);

        assert_eq!(container.panel().width(), DEFAULT_PANEL_WIDTH);
        assert_eq!(container.panel().state(), PanelState::Closed);
        assert_eq!(container.view_size(), Size::new(375.0, 667.0));
        assert_eq!(content(&container), vec![Page::Home]);
        assert!(container.content().top().chrome().is_some());
    }

    #[test]
    fn given_new_container_when_created_then_root_chrome_is_applied() {
        let container = container();
        let chrome = container.content().top().chrome().expect("chrome set");

        assert_eq!(chrome.left_control, LeftControl::Menu);
        assert_eq!(container.content().top().label(), "Westside CME");
        assert_eq!(container.menu().top().label(), "Menu");
        assert_eq!(container.panel().state(), PanelState::Closed);
    }

    #[test]
    fn given_open_menu_then_close_menu_when_applied_then_panel_rests_closed() {
        let mut container = container();

        let open = container.open_menu();
        let close = container.close_menu();

        assert_eq!(animations(&open), 1);
        assert_eq!(animations(&close), 1);
        assert_eq!(container.panel().state(), PanelState::Closed);
        assert_eq!(container.panel().offset(), -300.0);
        assert_eq!(container.panel().opacity(), 0.0);
    }

    #[test]
    fn given_replace_intent_when_displayed_then_content_is_single_screen_and_panel_closed()
     {
        let mut container = container();
        let _ = container.display(NavigationIntent::Push(Page::Events), "E");
        let _ = container.open_menu();

        let effects =
            container.display(NavigationIntent::Replace(Page::Events), "E");

        assert_eq!(content(&container), vec![Page::Events]);
        assert_eq!(container.panel().state(), PanelState::Closed);
        assert!(matches!(effects.as_slice(), [
            ContainerEffect::AnimatePanel(_),
            ContainerEffect::ReplaceContent { animated: false },
        ]));
    }

    #[test]
    fn given_push_intent_when_displayed_then_screen_is_appended_animated() {
        let mut container = container();

        let effects =
            container.display(NavigationIntent::Push(Page::Events), "E");

        assert_eq!(content(&container), vec![Page::Home, Page::Events]);
        assert!(effects.contains(&ContainerEffect::PushContent {
            animated: true
        }));
        assert_eq!(
            container.content().top().chrome().map(|c| c.left_control),
            Some(LeftControl::Menu)
        );
    }

    #[test]
    fn given_drill_in_screen_when_pushed_then_entries_beneath_read_back() {
        let mut container = container();
        let _ = container.display(NavigationIntent::Push(Page::Events), "E");

        let _ = container.display(NavigationIntent::Push(Page::Detail), "D");

        let labels: Vec<&str> = container.content().labels().collect();
        assert_eq!(labels, vec![BACK_LABEL, BACK_LABEL, "Westside CME"]);
        assert_eq!(
            container.content().top().chrome().map(|c| c.left_control),
            Some(LeftControl::Default)
        );
    }

    #[test]
    fn given_drill_in_screen_when_popped_then_revealed_screen_gets_chrome_back()
     {
        let mut container = container();
        let _ = container.display(NavigationIntent::Push(Page::Detail), "D");

        let effects = container.pop();

        assert_eq!(content(&container), vec![Page::Home]);
        assert!(effects.contains(&ContainerEffect::PopContent {
            animated: true
        }));
        assert_eq!(container.content().top().label(), "Westside CME");
        assert!(container.pop().is_empty());
    }

    #[test]
    fn given_login_action_when_displayed_then_modal_is_presented_over_content()
     {
        let mut container = container();

        let effects = container
            .display(NavigationIntent::Action(ContentAction::Login), "Login");

        assert_eq!(container.modal(), Some(ModalFlow::Login));
        assert!(
            effects.contains(&ContainerEffect::PresentModal(ModalFlow::Login))
        );
        assert_eq!(content(&container), vec![Page::Home]);
    }

    #[test]
    fn given_presented_modal_when_succeeded_then_menu_resets_and_modal_dismisses()
     {
        let mut container = container();
        let _ = container.display(
            NavigationIntent::Action(ContentAction::Register),
            "Register",
        );

        let effects = container.modal_finished(ModalOutcome::Succeeded);

        assert_eq!(effects, vec![
            ContainerEffect::ResetMenu,
            ContainerEffect::DismissModal,
        ]);
        assert_eq!(container.modal(), None);
    }

    #[test]
    fn given_presented_modal_when_cancelled_then_only_dismissed() {
        let mut container = container();
        let _ = container
            .display(NavigationIntent::Action(ContentAction::Login), "Login");

        let effects = container.modal_finished(ModalOutcome::Cancelled);

        assert_eq!(effects, vec![ContainerEffect::DismissModal]);
    }

    #[test]
    fn given_no_modal_when_outcome_reported_then_it_is_ignored() {
        let mut container = container();

        assert!(container.modal_finished(ModalOutcome::Succeeded).is_empty());
    }

    #[test]
    fn given_presented_modal_when_second_flow_requested_then_it_is_ignored() {
        let mut container = container();
        let _ = container
            .display(NavigationIntent::Action(ContentAction::Login), "Login");

        let effects = container.display(
            NavigationIntent::Action(ContentAction::Register),
            "Register",
        );

        assert_eq!(animations(&effects), effects.len());
        assert_eq!(container.modal(), Some(ModalFlow::Login));
    }

    #[test]
    fn given_logout_action_when_displayed_then_session_clears_and_content_is_untouched()
     {
        let mut container = container();
        let _ = container.display(NavigationIntent::Push(Page::Events), "E");

        let effects = container
            .display(NavigationIntent::Action(ContentAction::Logout), "Logout");

        assert!(effects.contains(&ContainerEffect::Logout));
        assert!(effects.contains(&ContainerEffect::ResetMenu));
        assert_eq!(content(&container), vec![Page::Home, Page::Events]);
        assert_eq!(container.menu().depth(), 1);
    }

    #[test]
    fn given_left_edge_drag_when_released_two_thirds_open_then_panel_opens() {
        let mut container = container();

        let decision = container.gesture_should_begin(Point::new(12.0, 300.0));
        let _ = container.gesture_sample(GestureSample::Began);
        let _ = container
            .gesture_sample(GestureSample::Changed { translation_x: 200.0 });
        let effects = container.gesture_sample(GestureSample::Ended);

        assert!(decision.is_accepted());
        assert_eq!(animations(&effects), 1);
        assert_eq!(container.panel().state(), PanelState::Open);
    }

    #[test]
    fn given_size_transition_when_notified_then_view_size_updates_and_panel_closes()
     {
        let mut container = container();
        let _ = container.open_menu();

        let effects = container.view_will_transition(Size::new(1024.0, 768.0));

        assert_eq!(container.view_size(), Size::new(1024.0, 768.0));
        assert_eq!(container.panel().state(), PanelState::Closed);
        assert_eq!(animations(&effects), 1);
    }

    #[test]
    fn given_any_container_when_asked_for_simultaneous_recognition_then_declines()
     {
        assert!(!container().should_recognize_simultaneously());
    }
}
