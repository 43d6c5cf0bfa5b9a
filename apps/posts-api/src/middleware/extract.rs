//! Typed request extractors for the post routes.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::future::{Ready, ready};

use posts_core::domain::{PostDraft, PostId};
use posts_shared::codec;

use super::error::AppError;

/// The `{id}` path segment, parsed as a post id.
///
/// Only ASCII digits are accepted. Place it before any body extractor so a
/// malformed id is rejected without reading the request body.
#[derive(Debug, Clone, Copy)]
pub struct PostIdParam(pub PostId);

/// Parse a raw path segment into a post id.
pub fn parse_post_id(raw: &str) -> Result<PostId, AppError> {
    let invalid = || AppError::BadRequest("ID could not be converted to an integer".to_string());

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse().map_err(|_| invalid())
}

impl FromRequest for PostIdParam {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        ready(parse_post_id(raw).map(PostIdParam))
    }
}

/// A decoded request body that has passed validation.
///
/// Use this in handlers of mutating routes:
/// ```ignore
/// async fn create(state: web::Data<AppState>, ValidPost(draft): ValidPost) -> AppResult<HttpResponse> {
///     let post = state.posts.add(draft).await?;
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidPost(pub PostDraft);

impl FromRequest for ValidPost {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Bytes::from_request(req, payload);

        async move {
            let bytes = body
                .await
                .map_err(|e| AppError::BadRequest(format!("Unable to read body: {}", e)))?;

            let draft = PostDraft::from(codec::decode_post(&bytes[..])?);
            draft.validate()?;

            Ok(ValidPost(draft))
        }
        .boxed_local()
    }
}
