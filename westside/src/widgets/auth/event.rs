use std::fmt;

use westside_panel::{ModalFlow, ModalOutcome};
use zeroize::Zeroizing;

/// Intent events handled by the auth modal widget.
#[derive(Clone)]
pub(crate) enum AuthIntent {
    Open(ModalFlow),
    Close,
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(Zeroizing<String>),
    Submit,
    Cancel,
}

impl fmt::Debug for AuthIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(flow) => f.debug_tuple("Open").field(flow).finish(),
            Self::Close => f.write_str("Close"),
            Self::NameChanged(name) => {
                f.debug_tuple("NameChanged").field(name).finish()
            },
            Self::EmailChanged(email) => {
                f.debug_tuple("EmailChanged").field(email).finish()
            },
            Self::PasswordChanged(_) => {
                f.debug_tuple("PasswordChanged").field(&"<redacted>").finish()
            },
            Self::Submit => f.write_str("Submit"),
            Self::Cancel => f.write_str("Cancel"),
        }
    }
}

/// Effect events produced by the auth reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AuthEffect {
    /// The presented flow reached its terminal outcome.
    Finished(ModalOutcome),
}

/// Auth event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum AuthEvent {
    Intent(AuthIntent),
    Effect(AuthEffect),
}

#[cfg(test)]
mod tests {
    use zeroize::Zeroizing;

    use super::AuthIntent;

    #[test]
    fn given_password_intent_when_debug_formatted_then_value_is_redacted() {
        let intent = AuthIntent::PasswordChanged(Zeroizing::new(
            String::from("hunter22"),
        ));

        let rendered = format!("{intent:?}");

        assert!(!rendered.contains("hunter22"));
        assert!(rendered.contains("redacted"));
    }
}
