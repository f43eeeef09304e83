// Sign-in failures
use crate::core_records::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("No shadow entry for user: {0}")]
    ShadowEntryMissing(String),

    #[error("Invalid credentials for user: {0}")]
    InvalidCredentials(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    /// True when the account files could not be read at all.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AuthError::Store(_))
    }

    /// Text safe to hand back to whoever attempted the sign-in.
    ///
    /// An unknown user and a wrong password read the same, so the reply
    /// cannot be used to probe which accounts exist.
    pub fn to_client_message(&self) -> String {
        match self {
            AuthError::UnknownUser(_) | AuthError::InvalidCredentials(_) => {
                "Invalid credentials.".to_string()
            }
            _ => "Authentication service unavailable.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_client_message_does_not_leak_user_existence() {
        let unknown = AuthError::UnknownUser("mallory".to_string());
        let invalid = AuthError::InvalidCredentials("alice".to_string());
        assert_eq!(unknown.to_client_message(), invalid.to_client_message());
        assert!(!unknown.to_client_message().contains("mallory"));
    }

    #[test]
    fn test_only_store_errors_are_fatal() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let store = AuthError::from(StoreError::read(Path::new("/etc/shadow"), io));
        assert!(store.is_fatal());
        assert!(!AuthError::ShadowEntryMissing("alice".to_string()).is_fatal());
        assert_eq!(
            store.to_client_message(),
            "Authentication service unavailable."
        );
    }
}
