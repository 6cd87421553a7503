//! Credential extractors backed by the `auth_token` cookie.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use devtrack_core::domain::Credential;

use super::error::AppError;
use crate::state::AppState;

/// Name of the cookie carrying the credential.
pub const AUTH_COOKIE: &str = "auth_token";

/// Authenticated caller, admin or guest.
///
/// Use this in handlers to require a valid cookie:
/// ```ignore
/// async fn list(caller: Caller) -> impl Responder {
///     format!("Hello, {}!", caller.credential().as_str())
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Caller(pub Credential);

impl Caller {
    pub fn credential(&self) -> Credential {
        self.0
    }
}

impl FromRequest for Caller {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState not found in app data");
            return ready(Err(AppError::Internal(
                "Server configuration error".to_string(),
            )));
        };

        let cookie = req.cookie(AUTH_COOKIE);
        let result = state
            .gate
            .authenticate(cookie.as_ref().map(|c| c.value()))
            .map(Caller)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Rejected request credential");
                AppError::from(e)
            });

        ready(result)
    }
}

/// Caller holding the admin credential. Guests are rejected with 403.
#[derive(Debug, Clone, Copy)]
pub struct Admin;

impl FromRequest for Admin {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let result = match Caller::from_request(req, payload).into_inner() {
            Ok(Caller(Credential::Admin)) => Ok(Admin),
            Ok(Caller(Credential::Guest)) => Err(AppError::Forbidden(
                "Guest accounts cannot create posts".to_string(),
            )),
            Err(e) => Err(e),
        };

        ready(result)
    }
}
