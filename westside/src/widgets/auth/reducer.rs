use iced::Task;
use westside_panel::{ModalFlow, ModalOutcome};
use westside_session::{Credentials, Registration, SessionStore};

use super::event::{AuthEffect, AuthEvent, AuthIntent};
use super::state::AuthState;

/// Mutable context for auth reduction.
pub(crate) struct AuthCtx<'a> {
    pub(crate) session: &'a mut SessionStore,
}

/// Reduce an auth intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut AuthState,
    intent: AuthIntent,
    ctx: AuthCtx<'_>,
) -> Task<AuthEvent> {
    match intent {
        AuthIntent::Open(flow) => {
            state.open(flow);
            Task::none()
        },
        AuthIntent::Close => {
            state.close();
            Task::none()
        },
        AuthIntent::NameChanged(name) => {
            state.set_name(name);
            Task::none()
        },
        AuthIntent::EmailChanged(email) => {
            state.set_email(email);
            Task::none()
        },
        AuthIntent::PasswordChanged(password) => {
            state.set_password(password);
            Task::none()
        },
        AuthIntent::Submit => submit(state, ctx.session),
        AuthIntent::Cancel => {
            if state.flow().is_none() {
                return Task::none();
            }
            state.close();
            finished(ModalOutcome::Cancelled)
        },
    }
}

fn submit(
    state: &mut AuthState,
    session: &mut SessionStore,
) -> Task<AuthEvent> {
    let Some(flow) = state.flow() else {
        return Task::none();
    };

    let result = match flow {
        ModalFlow::Login => session.login(Credentials::new(
            state.email(),
            state.password().clone(),
        )),
        ModalFlow::Register => session.register(Registration::new(
            state.name(),
            state.email(),
            state.password().clone(),
        )),
    };

    match result {
        Ok(user) => {
            log::debug!("{flow:?} flow finished for {}", user.email());
            state.close();
            finished(ModalOutcome::Succeeded)
        },
        Err(err) => {
            state.set_error(err.to_string());
            Task::none()
        },
    }
}

fn finished(outcome: ModalOutcome) -> Task<AuthEvent> {
    Task::done(AuthEvent::Effect(AuthEffect::Finished(outcome)))
}

#[cfg(test)]
mod tests {
    use westside_panel::ModalFlow;
    use westside_session::SessionStore;
    use zeroize::Zeroizing;

    use super::{AuthCtx, AuthIntent, reduce};
    use crate::widgets::auth::state::AuthState;

    fn fill(
        state: &mut AuthState,
        session: &mut SessionStore,
        name: &str,
        email: &str,
        password: &str,
    ) {
        for intent in [
            AuthIntent::NameChanged(name.to_string()),
            AuthIntent::EmailChanged(email.to_string()),
            AuthIntent::PasswordChanged(Zeroizing::new(password.to_string())),
        ] {
            let _ = reduce(state, intent, AuthCtx {
                session: &mut *session,
            });
        }
    }

    #[test]
    fn given_valid_registration_when_submitted_then_user_is_signed_in_and_form_closes()
     {
        let mut state = AuthState::default();
        let mut session = SessionStore::new();
        let _ = reduce(
            &mut state,
            AuthIntent::Open(ModalFlow::Register),
            AuthCtx {
                session: &mut session,
            },
        );
        fill(&mut state, &mut session, "Ada", "ada@example.com", "secret1");

        let _ = reduce(&mut state, AuthIntent::Submit, AuthCtx {
            session: &mut session,
        });

        assert!(session.is_signed_in());
        assert_eq!(state.flow(), None);
        assert!(state.password().is_empty());
    }

    #[test]
    fn given_wrong_password_when_login_submitted_then_error_is_shown_and_form_stays()
     {
        let mut state = AuthState::default();
        let mut session = SessionStore::new();
        let _ = reduce(
            &mut state,
            AuthIntent::Open(ModalFlow::Register),
            AuthCtx {
                session: &mut session,
            },
        );
        fill(&mut state, &mut session, "Ada", "ada@example.com", "secret1");
        let _ = reduce(&mut state, AuthIntent::Submit, AuthCtx {
            session: &mut session,
        });
        session.logout();

        let _ = reduce(
            &mut state,
            AuthIntent::Open(ModalFlow::Login),
            AuthCtx {
                session: &mut session,
            },
        );
        fill(&mut state, &mut session, "", "ada@example.com", "wrong-pass");
        let _ = reduce(&mut state, AuthIntent::Submit, AuthCtx {
            session: &mut session,
        });

        assert!(!session.is_signed_in());
        assert_eq!(state.flow(), Some(ModalFlow::Login));
        assert_eq!(state.error(), Some("Email or password is incorrect."));
    }

    #[test]
    fn given_open_form_when_cancelled_then_draft_is_cleared() {
        let mut state = AuthState::default();
        let mut session = SessionStore::new();
        let _ = reduce(
            &mut state,
            AuthIntent::Open(ModalFlow::Login),
            AuthCtx {
                session: &mut session,
            },
        );
        fill(&mut state, &mut session, "", "ada@example.com", "secret1");

        let _ = reduce(&mut state, AuthIntent::Cancel, AuthCtx {
            session: &mut session,
        });

        assert_eq!(state.flow(), None);
        assert!(state.email().is_empty());
        assert!(!session.is_signed_in());
    }

    #[test]
    fn given_edit_after_error_when_reduced_then_error_is_cleared() {
        let mut state = AuthState::default();
        let mut session = SessionStore::new();
        let _ = reduce(
            &mut state,
            AuthIntent::Open(ModalFlow::Register),
            AuthCtx {
                session: &mut session,
            },
        );
        let _ = reduce(&mut state, AuthIntent::Submit, AuthCtx {
            session: &mut session,
        });
        assert_eq!(state.error(), Some("Name is required."));

        let _ = reduce(
            &mut state,
            AuthIntent::NameChanged(String::from("Ada")),
            AuthCtx {
                session: &mut session,
            },
        );

        assert_eq!(state.error(), None);
    }
}
