//! Shared-secret access gate.

use devtrack_core::domain::{Credential, GUEST_TOKEN};
use devtrack_core::ports::{AccessGate, AuthError};

/// Shared-secret gate configuration.
#[derive(Debug, Clone)]
pub struct SharedSecretConfig {
    /// Code an admin types on the login page.
    pub secret_code: String,
    /// Bearer token handed out for a correct code.
    pub bearer_token: String,
    pub cookie_max_age_seconds: i64,
}

impl SharedSecretConfig {
    pub fn new(secret_code: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            secret_code: secret_code.into(),
            bearer_token: bearer_token.into(),
            cookie_max_age_seconds: 24 * 60 * 60,
        }
    }
}

/// Gate comparing codes and tokens against static configured values.
///
/// The admin token is fixed: every successful login receives the same value,
/// and nothing is stored server-side.
pub struct SharedSecretGate {
    config: SharedSecretConfig,
}

impl SharedSecretGate {
    pub fn new(config: SharedSecretConfig) -> Self {
        Self { config }
    }
}

impl AccessGate for SharedSecretGate {
    fn exchange_code(&self, code: &str) -> Result<String, AuthError> {
        if code == self.config.secret_code {
            tracing::info!("Admin code accepted");
            Ok(self.config.bearer_token.clone())
        } else {
            tracing::warn!("Rejected login with invalid code");
            Err(AuthError::InvalidCode)
        }
    }

    fn authenticate(&self, token: Option<&str>) -> Result<Credential, AuthError> {
        match token {
            None => Err(AuthError::MissingCredential),
            Some(t) if t == self.config.bearer_token => Ok(Credential::Admin),
            Some(GUEST_TOKEN) => Ok(Credential::Guest),
            Some(_) => Err(AuthError::InvalidCredential),
        }
    }

    fn guest_token(&self) -> &str {
        GUEST_TOKEN
    }

    fn credential_max_age_seconds(&self) -> i64 {
        self.config.cookie_max_age_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> SharedSecretGate {
        SharedSecretGate::new(SharedSecretConfig::new("letmein", "admin-token-123"))
    }

    #[test]
    fn test_matching_code_returns_configured_token() {
        assert_eq!(gate().exchange_code("letmein").unwrap(), "admin-token-123");
    }

    #[test]
    fn test_code_comparison_is_exact() {
        let gate = gate();
        for code in ["", "LETMEIN", "letmein ", " letmein", "letme", "letmein2"] {
            assert_eq!(gate.exchange_code(code), Err(AuthError::InvalidCode), "{code:?}");
        }
    }

    #[test]
    fn test_authenticate_classifies_tokens() {
        let gate = gate();

        assert_eq!(gate.authenticate(Some("admin-token-123")), Ok(Credential::Admin));
        assert_eq!(gate.authenticate(Some("guest")), Ok(Credential::Guest));
        assert_eq!(gate.authenticate(Some("Guest")), Err(AuthError::InvalidCredential));
        assert_eq!(gate.authenticate(None), Err(AuthError::MissingCredential));
    }

    #[test]
    fn test_default_cookie_lifetime_is_one_day() {
        assert_eq!(gate().credential_max_age_seconds(), 86400);
    }
}
