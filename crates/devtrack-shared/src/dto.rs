//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to exchange a login code for the admin token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub code: String,
}

/// Response carrying the credential to store in the `auth_token` cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Request to create a post. Presence of the required fields is checked by
/// the server so that a missing field is a 400 rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

/// Query string accepted by `GET /api/mongodb`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostQuery {
    pub id: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// A post as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category: String,
    /// RFC 3339, UTC, millisecond precision.
    pub created_at: String,
}

/// Payload of a post listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostList {
    pub posts: Vec<PostResponse>,
}

/// Payload of a single post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinglePost {
    pub post: PostResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_response_uses_mongo_style_keys() {
        let post = PostResponse {
            id: "65f0c0ffee".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            image_url: None,
            category: "Backend".to_string(),
            created_at: "2024-05-01T09:30:00.000Z".to_string(),
        };

        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["_id"], "65f0c0ffee");
        assert_eq!(json["createdAt"], "2024-05-01T09:30:00.000Z");
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn test_create_request_tolerates_missing_fields() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title":"t","imageUrl":"https://x/y.png"}"#).unwrap();

        assert_eq!(req.title.as_deref(), Some("t"));
        assert_eq!(req.image_url.as_deref(), Some("https://x/y.png"));
        assert!(req.content.is_none());
        assert!(req.category.is_none());
    }
}
