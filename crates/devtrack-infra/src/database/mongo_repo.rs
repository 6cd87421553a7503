//! MongoDB repository implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use devtrack_core::domain::{NewPost, Post};
use devtrack_core::error::RepoError;
use devtrack_core::ports::PostRepository;

use super::document::PostDocument;

/// MongoDB post repository.
///
/// Holds a collection handle from the shared client; each call checks a
/// connection out of the driver's pool for the duration of that call only.
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    pub fn new(collection: Collection<PostDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let docs: Vec<PostDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(count = docs.len(), "Listed posts");
        docs.into_iter().map(Post::try_from).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let Ok(oid) = ObjectId::parse_str(id) else {
            tracing::debug!(post_id = %id, "Unparseable post id");
            return Ok(None);
        };

        let result = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        result.map(Post::try_from).transpose()
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let document = PostDocument::from_new(post);

        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| RepoError::Insert(e.to_string()))?;

        tracing::info!(post_id = %document.id, category = %document.category, "Post created");
        Post::try_from(document)
    }

    async fn ping(&self) -> Result<(), RepoError> {
        self.collection
            .estimated_document_count()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        Ok(())
    }
}
