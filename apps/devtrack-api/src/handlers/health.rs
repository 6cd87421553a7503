//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - reports whether the post store answers.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store = state.posts.repository().ping().await;

    let mut builder = match &store {
        Ok(()) => HttpResponse::Ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: post store unreachable");
            HttpResponse::ServiceUnavailable()
        }
    };

    builder.json(HealthResponse {
        status: if store.is_ok() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
