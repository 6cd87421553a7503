//! # DevTrack API Server
//!
//! Actix-web server for the DevTrack blog: the shared-secret access gate
//! and the post gateway.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    tracing::info!(
        "Starting DevTrack API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await.inspect_err(|e| {
        tracing::error!(error = %e, "Startup failed");
    })?;
    let server_state = state.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(server_state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    state.shutdown().await;
    Ok(())
}
