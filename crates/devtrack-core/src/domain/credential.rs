/// Cookie value granting read-only access.
pub const GUEST_TOKEN: &str = "guest";

/// Who is calling, as established from the `auth_token` cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    /// Holder of the configured bearer token. May create posts.
    Admin,
    /// Holder of the guest sentinel. Read-only.
    Guest,
}

impl Credential {
    pub fn is_admin(&self) -> bool {
        matches!(self, Credential::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Credential::Admin => "admin",
            Credential::Guest => "guest",
        }
    }
}
