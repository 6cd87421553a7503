//! In-memory post repository - used by tests and builds without MongoDB.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use devtrack_core::domain::{NewPost, Post};
use devtrack_core::error::RepoError;
use devtrack_core::ports::PostRepository;

/// In-memory post store behind an async RwLock.
///
/// Identifiers are UUIDs in simple form. Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.posts.read().await;

        // Reverse first so equal timestamps list the later insert first.
        let mut posts: Vec<Post> = store.iter().rev().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let store = self.posts.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let created = post.into_post(Uuid::new_v4().simple().to_string());

        let mut store = self.posts.write().await;
        store.push(created.clone());

        Ok(created)
    }

    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }
}
