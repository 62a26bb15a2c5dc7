use secrecy::SecretString;
use uuid::Uuid;
use zeroize::Zeroizing;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Stable identifier for a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

/// Public profile of a registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    pub(crate) fn new(name: String, email: String) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Login form payload.
#[derive(Debug)]
pub struct Credentials {
    pub(crate) email: String,
    pub(crate) password: SecretString,
}

impl Credentials {
    /// Build credentials, moving the password out of its zeroizing buffer.
    pub fn new(email: impl Into<String>, password: Zeroizing<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.as_str()),
        }
    }
}

/// Registration form payload.
#[derive(Debug)]
pub struct Registration {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password: SecretString,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: Zeroizing<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: SecretString::from(password.as_str()),
        }
    }
}

/// An authenticated session.
#[derive(Debug)]
pub struct Session {
    user: User,
}

impl Session {
    pub(crate) fn start(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}
