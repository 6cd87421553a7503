//! Access gate handlers.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpResponse, web};

use devtrack_core::ports::AccessGate;
use devtrack_shared::dto::{AuthRequest, TokenResponse};

use crate::middleware::auth::AUTH_COOKIE;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth
///
/// A missing or unreadable body is treated as an empty code.
pub async fn login(
    state: web::Data<AppState>,
    body: Option<web::Json<AuthRequest>>,
) -> AppResult<HttpResponse> {
    let code = body.map(|b| b.into_inner().code).unwrap_or_default();

    let token = state.gate.exchange_code(&code)?;

    Ok(token_response(state.gate.as_ref(), token))
}

/// POST /api/auth/guest
pub async fn guest(state: web::Data<AppState>) -> HttpResponse {
    let token = state.gate.guest_token().to_string();
    tracing::info!("Guest credential issued");

    token_response(state.gate.as_ref(), token)
}

/// Any other verb on the auth resources.
pub async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed("POST"))
}

fn token_response(gate: &dyn AccessGate, token: String) -> HttpResponse {
    let cookie = Cookie::build(AUTH_COOKIE, token.clone())
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(gate.credential_max_age_seconds()))
        .finish();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(TokenResponse { token })
}
