//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::domain::{Author, Post, PostDraft, PostId};
use posts_core::error::RepoError;
use posts_core::ports::{BaseRepository, PostRepository};

struct Store {
    posts: BTreeMap<PostId, Post>,
    next_id: PostId,
}

/// In-memory post store backed by an ordered map behind an async RwLock.
///
/// Ids start at 1 and only ever grow, so deleting a post never renumbers the
/// others. Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Build a store pre-populated with the given drafts, in order.
    pub fn with_posts(drafts: impl IntoIterator<Item = PostDraft>) -> Self {
        let mut store = Store {
            posts: BTreeMap::new(),
            next_id: 1,
        };
        for draft in drafts {
            let post = Post::new(store.next_id, draft);
            store.next_id += 1;
            store.posts.insert(post.id, post);
        }

        Self {
            store: RwLock::new(store),
        }
    }

    /// Build a store holding two sample posts.
    pub fn with_sample_posts() -> Self {
        Self::with_posts([
            PostDraft::new(
                "One",
                "One Body",
                Author::new("One Author", "oneuser", "one@example.com"),
            ),
            PostDraft::new(
                "Two",
                "Two Body",
                Author::new("Two Author", "twouser", "two@example.com"),
            ),
        ])
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.posts.remove(&id).ok_or(RepoError::NotFound)?;

        tracing::debug!(post_id = id, "Post removed from memory");
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.values().cloned().collect())
    }

    async fn add(&self, draft: PostDraft) -> Result<Post, RepoError> {
        // Id allocation and insert happen under the same write lock
        let mut store = self.store.write().await;

        let post = Post::new(store.next_id, draft);
        store.next_id += 1;
        store.posts.insert(post.id, post.clone());

        tracing::debug!(post_id = post.id, "Post stored in memory");
        Ok(post)
    }

    async fn update(&self, id: PostId, draft: PostDraft) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.posts.get_mut(&id).ok_or(RepoError::NotFound)?;

        post.apply(draft);
        Ok(post.clone())
    }
}
