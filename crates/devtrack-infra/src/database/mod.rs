//! Post storage: MongoDB and an in-memory fallback.

mod memory;

#[cfg(feature = "mongo")]
mod connections;
#[cfg(feature = "mongo")]
mod document;
#[cfg(feature = "mongo")]
mod mongo_repo;

pub use memory::InMemoryPostRepository;

#[cfg(feature = "mongo")]
pub use connections::{MongoConfig, MongoConnection};
#[cfg(feature = "mongo")]
pub use document::PostDocument;
#[cfg(feature = "mongo")]
pub use mongo_repo::MongoPostRepository;
