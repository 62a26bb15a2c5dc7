//! Session domain model for the Westside shell.
//!
//! Accounts live in an in-process [`SessionStore`]. Passwords are held as
//! [`secrecy::SecretString`] so they never end up in `Debug` output, and
//! form drafts are expected to arrive in [`zeroize::Zeroizing`] buffers.

mod errors;
mod model;
mod store;

pub use errors::SessionError;
pub use model::{
    Credentials, MIN_PASSWORD_LEN, Registration, Session, User, UserId,
};
pub use store::SessionStore;
