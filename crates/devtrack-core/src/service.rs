//! Post gateway - authorization and validation around the repository.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Credential, NewPost, Post, PostDraft, PostFilter};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Read and create posts on behalf of an authenticated caller.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<dyn PostRepository> {
        &self.repo
    }

    /// List posts newest first, narrowed by `filter`.
    pub async fn list(&self, filter: &PostFilter) -> Result<Vec<Post>, DomainError> {
        let posts = self.repo.list_newest_first().await?;
        if filter.is_empty() {
            return Ok(posts);
        }
        Ok(posts.into_iter().filter(|p| filter.matches(p)).collect())
    }

    /// Fetch one post. Malformed and unknown ids are both `NotFound`.
    pub async fn get(&self, id: &str) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// Create a post. Only the admin may write; the credential is checked
    /// before the draft is looked at.
    pub async fn create(&self, caller: Credential, draft: PostDraft) -> Result<Post, DomainError> {
        if !caller.is_admin() {
            return Err(DomainError::Forbidden);
        }

        let post = NewPost::from_draft(draft, Utc::now())?;
        Ok(self.repo.insert(post).await?)
    }
}
