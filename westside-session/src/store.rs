use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::SessionError;
use crate::model::{
    Credentials, MIN_PASSWORD_LEN, Registration, Session, User,
};

#[derive(Debug)]
struct Account {
    user: User,
    password: SecretString,
}

/// In-process account directory and current-session holder.
#[derive(Debug, Default)]
pub struct SessionStore {
    accounts: HashMap<String, Account>,
    current: Option<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently signed-in user.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref().map(Session::user)
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// Create an account and sign it in.
    pub fn register(
        &mut self,
        registration: Registration,
    ) -> Result<User, SessionError> {
        let name = registration.name.trim().to_string();
        if name.is_empty() {
            return Err(SessionError::NameRequired);
        }
        let email = normalize_email(&registration.email)?;
        if registration.password.expose_secret().chars().count()
            < MIN_PASSWORD_LEN
        {
            return Err(SessionError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if self.accounts.contains_key(&email) {
            return Err(SessionError::EmailTaken);
        }

        let user = User::new(name, email.clone());
        self.accounts.insert(email, Account {
            user: user.clone(),
            password: registration.password,
        });
        log::info!("registered account {}", user.email());

        self.current = Some(Session::start(user.clone()));
        Ok(user)
    }

    /// Sign in with existing credentials.
    pub fn login(
        &mut self,
        credentials: Credentials,
    ) -> Result<User, SessionError> {
        let email = normalize_email(&credentials.email)?;
        let account = self
            .accounts
            .get(&email)
            .ok_or(SessionError::InvalidCredentials)?;

        if account.password.expose_secret()
            != credentials.password.expose_secret()
        {
            log::warn!("rejected login for {email}");
            return Err(SessionError::InvalidCredentials);
        }

        let user = account.user.clone();
        self.current = Some(Session::start(user.clone()));
        log::info!("signed in {}", user.email());
        Ok(user)
    }

    /// Drop the current session. Safe to call when signed out.
    pub fn logout(&mut self) {
        if let Some(session) = self.current.take() {
            log::info!("signed out {}", session.user().email());
        }
    }
}

fn normalize_email(raw: &str) -> Result<String, SessionError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(SessionError::EmailRequired);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            Ok(email)
        },
        _ => Err(SessionError::InvalidEmail),
    }
}
