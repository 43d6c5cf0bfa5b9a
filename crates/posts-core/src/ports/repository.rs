use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::RepoError;

/// Generic repository trait defining the id-addressed operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` if absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository - the store owning the post collection.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// All posts in ascending id order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Append a post, assigning the next id and its timestamps.
    async fn add(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Replace the fields of an existing post.
    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError>;
}
