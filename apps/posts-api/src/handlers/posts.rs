//! Post CRUD handlers.

use actix_web::{HttpResponse, http::header::ContentType, web};

use posts_core::domain::Post;
use posts_core::error::RepoError;
use posts_core::ports::BaseRepository;
use posts_shared::{PostResponse, codec};

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::extract::{PostIdParam, ValidPost};
use crate::state::AppState;

fn json(body: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body)
}

fn post_response(post: Post) -> AppResult<HttpResponse> {
    let mut body = Vec::new();
    codec::encode_post(&PostResponse::from(post), &mut body)?;
    Ok(json(body))
}

/// GET /
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    tracing::debug!("Handle GET posts");

    let posts: Vec<PostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    let mut body = Vec::new();
    codec::encode_posts(&posts, &mut body)?;
    Ok(json(body))
}

/// GET /{id}
pub async fn get_post(
    state: web::Data<AppState>,
    PostIdParam(id): PostIdParam,
) -> AppResult<HttpResponse> {
    tracing::debug!(post_id = id, "Handle GET post");

    let post = state
        .posts
        .find_by_id(id)
        .await
        .and_then(|post| post.ok_or(RepoError::NotFound))
        .map_err(|e| AppError::from_repo(e, id))?;

    post_response(post)
}

/// POST /
pub async fn create_post(
    state: web::Data<AppState>,
    ValidPost(draft): ValidPost,
) -> AppResult<HttpResponse> {
    tracing::debug!("Handle POST post");

    let post = state.posts.add(draft).await?;
    tracing::info!(post_id = post.id, "Post created");

    post_response(post)
}

/// PUT /{id}
pub async fn update_post(
    state: web::Data<AppState>,
    PostIdParam(id): PostIdParam,
    ValidPost(draft): ValidPost,
) -> AppResult<HttpResponse> {
    tracing::debug!(post_id = id, "Handle PUT post");

    let post = state
        .posts
        .update(id, draft)
        .await
        .map_err(|e| AppError::from_repo(e, id))?;

    post_response(post)
}

/// DELETE /{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    PostIdParam(id): PostIdParam,
) -> AppResult<HttpResponse> {
    tracing::debug!(post_id = id, "Handle DELETE post");

    state
        .posts
        .delete(id)
        .await
        .map_err(|e| AppError::from_repo(e, id))?;
    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::Ok().finish())
}
