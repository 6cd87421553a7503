//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;

#[cfg(test)]
mod tests;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config()).service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Access gate
            .service(
                web::resource("/auth")
                    .route(web::post().to(auth::login))
                    .default_service(web::to(auth::method_not_allowed)),
            )
            .service(
                web::resource("/auth/guest")
                    .route(web::post().to(auth::guest))
                    .default_service(web::to(auth::method_not_allowed)),
            )
            // Post gateway
            .service(
                web::resource("/mongodb")
                    .route(web::get().to(posts::read))
                    .route(web::post().to(posts::create))
                    .default_service(web::to(posts::method_not_allowed)),
            ),
    );
}

/// Malformed JSON bodies become `400 { message }`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::BadRequest(err.to_string()).into()
    })
}

/// Unparseable query strings (e.g. a repeated `id`) become `400 { message }`.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected query string");
        AppError::BadRequest(err.to_string()).into()
    })
}
