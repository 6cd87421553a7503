//! Access gate implementations.

mod shared_secret;

pub use shared_secret::{SharedSecretConfig, SharedSecretGate};
