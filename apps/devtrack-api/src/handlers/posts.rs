//! Post gateway handlers (`/api/mongodb`).

use actix_web::{HttpResponse, web};

use devtrack_core::domain::{Credential, Post, PostDraft, PostFilter};
use devtrack_shared::ApiResponse;
use devtrack_shared::dto::{CreatePostRequest, PostList, PostQuery, PostResponse, SinglePost};

use crate::middleware::auth::{Admin, Caller};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/mongodb[?id=...&category=...&search=...]
///
/// With a non-empty `id`, returns that post; otherwise lists posts newest first.
pub async fn read(
    caller: Caller,
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    if let Some(id) = query.id.filter(|id| !id.is_empty()) {
        let post = state.posts.get(&id).await?;
        tracing::debug!(post_id = %id, caller = caller.credential().as_str(), "Fetched post");
        return Ok(HttpResponse::Ok().json(ApiResponse::ok(SinglePost {
            post: to_response(post),
        })));
    }

    let filter = PostFilter::new(query.category, query.search);
    let posts: Vec<PostResponse> = state
        .posts
        .list(&filter)
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    tracing::debug!(
        count = posts.len(),
        caller = caller.credential().as_str(),
        "Listed posts"
    );
    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostList { posts })))
}

/// POST /api/mongodb - admin only.
pub async fn create(
    _admin: Admin,
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = PostDraft {
        title: req.title,
        content: req.content,
        image_url: req.image_url,
        category: req.category,
    };

    let post = state.posts.create(Credential::Admin, draft).await?;

    Ok(HttpResponse::Created().json(ApiResponse::with_message(
        SinglePost {
            post: to_response(post),
        },
        "Post created successfully",
    )))
}

/// Any other verb on `/api/mongodb`.
pub async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed("GET, POST"))
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        created_at: post.created_at_text(),
        id: post.id,
        title: post.title,
        content: post.content,
        image_url: post.image_url,
        category: post.category,
    }
}
