//! BSON shape of a stored post.

use chrono::{DateTime, Utc};
use mongodb::bson::DateTime as BsonDateTime;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use devtrack_core::domain::{NewPost, Post};
use devtrack_core::error::RepoError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category: String,
    pub created_at: BsonDateTime,
}

impl PostDocument {
    /// Build a document for insertion with a freshly generated id.
    pub fn from_new(post: NewPost) -> Self {
        Self {
            id: ObjectId::new(),
            title: post.title,
            content: post.content,
            image_url: post.image_url,
            category: post.category,
            created_at: BsonDateTime::from_millis(post.created_at.timestamp_millis()),
        }
    }
}

/// Conversion from stored document to domain Post.
///
/// Fails when `createdAt` lies outside the range chrono can represent.
impl TryFrom<PostDocument> for Post {
    type Error = RepoError;

    fn try_from(doc: PostDocument) -> Result<Self, Self::Error> {
        let millis = doc.created_at.timestamp_millis();
        let Some(created_at) = DateTime::<Utc>::from_timestamp_millis(millis) else {
            tracing::warn!(post_id = %doc.id, millis, "Stored createdAt out of range");
            return Err(RepoError::Query(format!(
                "Post {} has an out-of-range createdAt",
                doc.id.to_hex()
            )));
        };

        Ok(Self {
            id: doc.id.to_hex(),
            title: doc.title,
            content: doc.content,
            image_url: doc.image_url.filter(|u| !u.is_empty()),
            category: doc.category,
            created_at,
        })
    }
}
