//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use posts_core::domain::{Author, Post, PostDraft};

/// Author as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorDto {
    pub full_name: String,
    pub user_name: String,
    pub email: String,
}

/// Request body for creating or replacing a post.
///
/// Missing fields decode as empty; the validator decides what is required.
/// Timestamps sent by clients are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRequest {
    pub title: String,
    pub body: String,
    pub author: AuthorDto,
}

/// Response containing a stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author: AuthorDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<AuthorDto> for Author {
    fn from(dto: AuthorDto) -> Self {
        Author::new(dto.full_name, dto.user_name, dto.email)
    }
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            full_name: author.full_name,
            user_name: author.user_name,
            email: author.email,
        }
    }
}

impl From<PostRequest> for PostDraft {
    fn from(req: PostRequest) -> Self {
        PostDraft::new(req.title, req.body, req.author.into())
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            author: post.author.into(),
            created_at: post.created_at,
            updated_at: post.updated_at,
            deleted_at: post.deleted_at,
        }
    }
}
