use thiserror::Error;

/// Errors emitted by session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Email address is not valid.")]
    InvalidEmail,
    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },
    #[error("An account with this email already exists.")]
    EmailTaken,
    #[error("Email or password is incorrect.")]
    InvalidCredentials,
}
