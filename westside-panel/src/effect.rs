use crate::panel::PanelAnimation;

/// Modal flows the container can present over itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalFlow {
    Login,
    Register,
}

/// Terminal outcome reported exactly once by a presented modal flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalOutcome {
    Succeeded,
    Cancelled,
}

/// Named menu actions that do not map onto a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentAction {
    Register,
    Login,
    Logout,
}

/// Host commands produced by the container.
///
/// The container has already updated its own stacks and panel when these
/// are returned; the host executes them to keep rendering and external
/// collaborators in step.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerEffect {
    AnimatePanel(PanelAnimation),
    PushContent { animated: bool },
    ReplaceContent { animated: bool },
    PopContent { animated: bool },
    /// The menu stack went back to its default root.
    ResetMenu,
    PresentModal(ModalFlow),
    DismissModal,
    /// Clear the current session.
    Logout,
}
