use chrono::{DateTime, Utc};

use super::Author;
use crate::error::DomainError;

/// Store-assigned identifier of a post. Never reused once assigned.
pub type PostId = i64;

/// The client-supplied part of a post, as accepted on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub author: Author,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>, author: Author) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author,
        }
    }

    /// Check the required fields, collecting every unmet constraint.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("title is required".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }
}

/// Post entity - a titled piece of text written by an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Recorded for schema parity; deletes are hard deletes.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new post from a draft under the given id.
    pub fn new(id: PostId, draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            body: draft.body,
            author: draft.author,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Replace the client-owned fields, keeping id and creation time.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.body = draft.body;
        self.author = draft.author;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> PostDraft {
        PostDraft::new(title, "body", Author::new("One Author", "oneuser", "one@example.com"))
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let err = draft("").validate().unwrap_err();
        match err {
            DomainError::Validation(errors) => assert_eq!(errors, vec!["title is required"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        assert!(draft("   ").validate().is_err());
    }

    #[test]
    fn test_validate_accepts_title() {
        assert!(draft("A").validate().is_ok());
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut post = Post::new(7, draft("before"));
        let created_at = post.created_at;

        post.apply(draft("after"));

        assert_eq!(post.id, 7);
        assert_eq!(post.title, "after");
        assert_eq!(post.created_at, created_at);
        assert!(post.updated_at >= created_at);
    }
}
