use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post storage.
///
/// Posts are append-only: there is no update or delete.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its textual identifier.
    ///
    /// An identifier the store cannot parse is reported as `Ok(None)`, the
    /// same as an unknown one.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// Persist a post; the store assigns its identifier.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepoError>;
}
