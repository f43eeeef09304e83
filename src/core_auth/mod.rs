// User lookup and sign-in against the passwd/shadow pair

pub mod error;
pub mod user_store;
pub mod verifier;

pub use error::AuthError;
pub use user_store::UserStore;
pub use verifier::{CredentialVerifier, UnixCryptVerifier};
