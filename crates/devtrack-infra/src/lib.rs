//! # DevTrack Infrastructure
//!
//! Concrete implementations of the ports defined in `devtrack-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory storage only
//! - `mongo` - MongoDB post storage via the official driver

pub mod auth;
pub mod database;

// Re-exports
pub use auth::{SharedSecretConfig, SharedSecretGate};
pub use database::InMemoryPostRepository;

#[cfg(feature = "mongo")]
pub use database::{MongoConfig, MongoConnection, MongoPostRepository};
