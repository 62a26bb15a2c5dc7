use westside_panel::ModalFlow;
use zeroize::Zeroizing;

/// Draft of the presented login or registration form.
#[derive(Default)]
pub(super) struct AuthState {
    flow: Option<ModalFlow>,
    name: String,
    email: String,
    password: Zeroizing<String>,
    error: Option<String>,
}

impl AuthState {
    pub(super) fn flow(&self) -> Option<ModalFlow> {
        self.flow
    }

    pub(super) fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn email(&self) -> &str {
        &self.email
    }

    pub(super) fn password(&self) -> &Zeroizing<String> {
        &self.password
    }

    pub(super) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a fresh draft for `flow`.
    pub(super) fn open(&mut self, flow: ModalFlow) {
        *self = Self {
            flow: Some(flow),
            ..Self::default()
        };
    }

    /// Drop the draft; the password buffer is wiped on drop.
    pub(super) fn close(&mut self) {
        *self = Self::default();
    }

    pub(super) fn set_name(&mut self, name: String) {
        self.name = name;
        self.error = None;
    }

    pub(super) fn set_email(&mut self, email: String) {
        self.email = email;
        self.error = None;
    }

    pub(super) fn set_password(&mut self, password: Zeroizing<String>) {
        self.password = password;
        self.error = None;
    }

    pub(super) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }
}
