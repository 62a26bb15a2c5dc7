use crate::chrome::{BACK_LABEL, ChromeTheme, content_chrome, menu_chrome};
use crate::effect::{ContainerEffect, ContentAction, ModalFlow, ModalOutcome};
use crate::panel::SidePanel;
use crate::screen::Screen;
use crate::stack::NavigationStack;

/// Navigation request produced by a menu selection.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationIntent<S> {
    /// Push onto the content stack, animated.
    Push(S),
    /// Make the screen the only content entry, not animated.
    Replace(S),
    Action(ContentAction),
}

/// Owns both navigation stacks and the presented modal, and applies
/// navigation intents to them.
#[derive(Debug, Clone)]
pub(crate) struct ContentRouter<S> {
    theme: ChromeTheme,
    menu_root: S,
    menu: NavigationStack<S>,
    content: NavigationStack<S>,
    modal: Option<ModalFlow>,
}

impl<S: Screen> ContentRouter<S> {
    pub(crate) fn new(
        theme: ChromeTheme,
        menu_root: S,
        content_root: S,
    ) -> Self {
        let mut router = Self {
            theme,
            menu: NavigationStack::new(menu_root.clone()),
            menu_root,
            content: NavigationStack::new(content_root),
            modal: None,
        };
        router.refresh_chrome();
        router
    }

    pub(crate) fn menu(&self) -> &NavigationStack<S> {
        &self.menu
    }

    pub(crate) fn content(&self) -> &NavigationStack<S> {
        &self.content
    }

    pub(crate) fn modal(&self) -> Option<ModalFlow> {
        self.modal
    }

    /// Apply a navigation intent. The panel is always closed first.
    pub(crate) fn display(
        &mut self,
        panel: &mut SidePanel,
        intent: NavigationIntent<S>,
        title: &str,
    ) -> Vec<ContainerEffect> {
        log::debug!("display content for menu item '{title}'");
        let mut effects: Vec<ContainerEffect> = panel
            .request_close()
            .map(ContainerEffect::AnimatePanel)
            .into_iter()
            .collect();

        match intent {
            NavigationIntent::Push(screen) => {
                self.content.push(screen);
                self.apply_content_chrome();
                effects.push(ContainerEffect::PushContent { animated: true });
            },
            NavigationIntent::Replace(screen) => {
                self.content.replace(screen);
                self.apply_content_chrome();
                effects
                    .push(ContainerEffect::ReplaceContent { animated: false });
            },
            NavigationIntent::Action(action) => {
                effects.extend(self.handle_action(action));
            },
        }

        effects
    }

    /// Go back one content entry; the root is never removed.
    pub(crate) fn pop(
        &mut self,
        panel: &mut SidePanel,
    ) -> Vec<ContainerEffect> {
        let Some(screen) = self.content.pop() else {
            return Vec::new();
        };
        log::debug!("popped content screen '{}'", screen.title());

        let mut effects: Vec<ContainerEffect> = panel
            .request_close()
            .map(ContainerEffect::AnimatePanel)
            .into_iter()
            .collect();
        self.apply_content_chrome();
        effects.push(ContainerEffect::PopContent { animated: true });
        effects
    }

    /// Handle the single terminal outcome of the presented modal.
    ///
    /// Success resets the menu; cancellation only dismisses.
    pub(crate) fn modal_finished(
        &mut self,
        outcome: ModalOutcome,
    ) -> Vec<ContainerEffect> {
        let Some(flow) = self.modal.take() else {
            log::warn!("modal outcome {outcome:?} without a presented modal");
            return Vec::new();
        };
        log::debug!("modal {flow:?} finished with {outcome:?}");

        let mut effects = Vec::new();
        if outcome == ModalOutcome::Succeeded {
            effects.push(self.reset_menu());
        }
        effects.push(ContainerEffect::DismissModal);
        effects
    }

    /// Re-apply chrome to the visible entries of both stacks.
    pub(crate) fn refresh_chrome(&mut self) {
        self.apply_content_chrome();
        self.apply_menu_chrome();
    }

    fn handle_action(&mut self, action: ContentAction) -> Vec<ContainerEffect> {
        match action {
            ContentAction::Register => self.present(ModalFlow::Register),
            ContentAction::Login => self.present(ModalFlow::Login),
            ContentAction::Logout => {
                vec![ContainerEffect::Logout, self.reset_menu()]
            },
        }
    }

    fn present(&mut self, flow: ModalFlow) -> Vec<ContainerEffect> {
        if let Some(current) = self.modal {
            log::warn!("ignoring {flow:?} while {current:?} is presented");
            return Vec::new();
        }

        self.modal = Some(flow);
        vec![ContainerEffect::PresentModal(flow)]
    }

    fn reset_menu(&mut self) -> ContainerEffect {
        self.menu.replace(self.menu_root.clone());
        self.apply_menu_chrome();
        ContainerEffect::ResetMenu
    }

    fn apply_content_chrome(&mut self) {
        let top = self.content.top().screen();
        let chrome = content_chrome(top, &self.theme);
        let drill_in = !top.is_directly_navigable();

        self.content.set_top_chrome(chrome);
        if drill_in {
            self.content.relabel_beneath_top(BACK_LABEL);
        }
    }

    fn apply_menu_chrome(&mut self) {
        let top = self.menu.top().screen();
        let chrome = menu_chrome(top, &self.theme);
        let drill_in = !top.is_directly_navigable();

        self.menu.set_top_chrome(chrome);
        if drill_in {
            self.menu.relabel_beneath_top(BACK_LABEL);
        }
    }
}
