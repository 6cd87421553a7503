use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::DomainError;

/// Post entity - a blog post as stored and returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Store-assigned identifier, already rendered as text.
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Creation time as RFC 3339 UTC with millisecond precision,
    /// e.g. `2024-05-01T09:30:00.000Z`.
    pub fn created_at_text(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Unvalidated post fields as submitted by a client.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

/// A validated post that has not been persisted yet.
///
/// The store assigns the identifier on insert; the timestamp is fixed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    /// Validate a draft and stamp it with `created_at`.
    ///
    /// Title, content and category must be present and non-empty. An empty
    /// image URL is dropped.
    pub fn from_draft(draft: PostDraft, created_at: DateTime<Utc>) -> Result<Self, DomainError> {
        let (Some(title), Some(content), Some(category)) = (
            non_empty(draft.title),
            non_empty(draft.content),
            non_empty(draft.category),
        ) else {
            return Err(DomainError::Validation(
                "Title, content, and category are required".to_string(),
            ));
        };

        Ok(Self {
            title,
            content,
            image_url: non_empty(draft.image_url),
            category,
            created_at,
        })
    }

    /// Attach the identifier assigned by the store.
    pub fn into_post(self, id: impl Into<String>) -> Post {
        Post {
            id: id.into(),
            title: self.title,
            content: self.content,
            image_url: self.image_url,
            category: self.category,
            created_at: self.created_at,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
