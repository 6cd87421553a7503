//! Application state - shared across all handlers.

use std::sync::Arc;

use devtrack_core::PostService;
use devtrack_core::ports::{AccessGate, PostRepository};
use devtrack_infra::SharedSecretGate;

#[cfg(feature = "mongo")]
use devtrack_infra::{MongoConfig, MongoConnection, MongoPostRepository};

use crate::config::AppConfig;

/// Startup failures.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to connect to the data store: {0}")]
    Database(String),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub gate: Arc<dyn AccessGate>,
    #[cfg(feature = "mongo")]
    db: Option<MongoConnection>,
}

impl AppState {
    /// Build the application state, connecting to the configured store.
    pub async fn new(config: &AppConfig) -> Result<Self, StartupError> {
        let gate: Arc<dyn AccessGate> = Arc::new(SharedSecretGate::new(config.auth.clone()));

        #[cfg(feature = "mongo")]
        let state = {
            let mongo = MongoConfig {
                uri: config.store.uri.clone(),
                database: config.store.database.clone(),
                collection: config.store.collection.clone(),
                max_connections: config.store.max_connections,
                min_connections: config.store.min_connections,
            };
            let conn = MongoConnection::init(&mongo)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            let repo = Arc::new(MongoPostRepository::new(conn.posts()));

            Self {
                posts: PostService::new(repo),
                gate,
                db: Some(conn),
            }
        };

        #[cfg(not(feature = "mongo"))]
        let state = {
            tracing::warn!("Running without mongo feature - posts are kept in memory");
            Self::with_repository(Arc::new(devtrack_infra::InMemoryPostRepository::new()), gate)
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// Build state around an existing repository and gate.
    pub fn with_repository(repo: Arc<dyn PostRepository>, gate: Arc<dyn AccessGate>) -> Self {
        Self {
            posts: PostService::new(repo),
            gate,
            #[cfg(feature = "mongo")]
            db: None,
        }
    }

    /// Release the store connection pool.
    pub async fn shutdown(self) {
        #[cfg(feature = "mongo")]
        if let Some(conn) = self.db {
            conn.shutdown().await;
        }
        tracing::info!("Application state shut down");
    }
}
