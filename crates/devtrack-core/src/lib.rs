//! # DevTrack Core
//!
//! The domain layer of the DevTrack blog: posts, credentials, and the
//! ports that storage and access control must implement.
//! This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::PostService;
