mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{AuthEffect, AuthEvent, AuthIntent};
use iced::Task;
pub(crate) use model::AuthViewModel;
pub(crate) use reducer::AuthCtx;
use state::AuthState;

/// Login and registration modal owning the form draft.
pub(crate) struct AuthWidget {
    state: AuthState,
}

impl AuthWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: AuthState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: AuthIntent,
        ctx: AuthCtx<'_>,
    ) -> Task<AuthEvent> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// View model of the presented form, if any.
    pub(crate) fn vm(&self) -> Option<AuthViewModel<'_>> {
        let flow = self.state.flow()?;
        Some(AuthViewModel {
            flow,
            name: self.state.name(),
            email: self.state.email(),
            password: self.state.password().as_str(),
            error: self.state.error(),
        })
    }
}
