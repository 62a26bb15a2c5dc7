use westside_panel::ModalFlow;

/// Read-only auth form data for the presentation layer.
pub(crate) struct AuthViewModel<'a> {
    pub(crate) flow: ModalFlow,
    pub(crate) name: &'a str,
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
    pub(crate) error: Option<&'a str>,
}

impl AuthViewModel<'_> {
    pub(crate) fn heading(&self) -> &'static str {
        match self.flow {
            ModalFlow::Login => "Login",
            ModalFlow::Register => "Register",
        }
    }

    pub(crate) fn asks_for_name(&self) -> bool {
        self.flow == ModalFlow::Register
    }
}
