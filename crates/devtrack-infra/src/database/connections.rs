use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};

use super::document::PostDocument;

/// Configuration for the MongoDB connection.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl MongoConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: "devtrack".to_string(),
            collection: "posts".to_string(),
            max_connections: 10,
            min_connections: 0,
        }
    }
}

/// Process-wide MongoDB client.
///
/// Created once at startup and shared by every request. The driver pools
/// connections internally; call [`MongoConnection::shutdown`] on exit.
///
/// # Example
/// ```ignore
/// let conn = MongoConnection::init(&config).await?;
/// let repo = MongoPostRepository::new(conn.posts());
/// // ... serve requests ...
/// conn.shutdown().await;
/// ```
#[derive(Clone)]
pub struct MongoConnection {
    client: Client,
    db: Database,
    collection: String,
}

impl MongoConnection {
    /// Connect, verify the server answers, and make sure the post index exists.
    pub async fn init(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!("Initializing MongoDB connection...");

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some("devtrack-api".to_string());
        options.max_pool_size = Some(config.max_connections);
        options.min_pool_size = Some(config.min_connections);
        options.connect_timeout = Some(Duration::from_secs(10));
        options.server_selection_timeout = Some(Duration::from_secs(10));
        options.max_idle_time = Some(Duration::from_secs(300));

        let client = Client::with_options(options)?;
        let db = client.database(&config.database);

        db.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(
            database = %config.database,
            pool = config.max_connections,
            "MongoDB connected"
        );

        let conn = Self {
            client,
            db,
            collection: config.collection.clone(),
        };
        conn.ensure_indexes().await?;

        Ok(conn)
    }

    /// Handle to the posts collection.
    pub fn posts(&self) -> Collection<PostDocument> {
        self.db.collection(&self.collection)
    }

    async fn ensure_indexes(&self) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(
                IndexOptions::builder()
                    .name("createdAt_desc".to_string())
                    .build(),
            )
            .build();

        self.posts().create_index(index).await?;
        tracing::debug!(collection = %self.collection, "Post indexes ensured");
        Ok(())
    }

    /// Close pooled connections and wait for in-flight operations.
    pub async fn shutdown(self) {
        tracing::info!("Closing MongoDB connection");
        self.client.shutdown().await;
    }
}
