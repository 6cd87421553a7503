//! Access control port.

use crate::domain::Credential;

/// Shared-secret access gate.
///
/// Exchanges a login code for the admin token and classifies the token a
/// caller presents on later requests.
pub trait AccessGate: Send + Sync {
    /// Exchange a submitted code for the admin bearer token.
    fn exchange_code(&self, code: &str) -> Result<String, AuthError>;

    /// Classify the token carried by a request, if any.
    fn authenticate(&self, token: Option<&str>) -> Result<Credential, AuthError>;

    /// Token handed to guests.
    fn guest_token(&self) -> &str;

    /// How long clients should keep the credential cookie, in seconds.
    fn credential_max_age_seconds(&self) -> i64;
}

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid code")]
    InvalidCode,

    #[error("Missing authentication cookie")]
    MissingCredential,

    #[error("Invalid authentication token")]
    InvalidCredential,
}
