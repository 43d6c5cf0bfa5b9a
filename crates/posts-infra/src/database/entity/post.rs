//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use posts_core::domain::{Author, PostDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub author_full_name: String,
    pub author_user_name: String,
    pub author_email: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// A row for a new post; the database assigns the id.
    pub fn from_draft(draft: PostDraft) -> Self {
        let mut model = <Self as ActiveModelBehavior>::new();
        model.created_at = Set(chrono::Utc::now().into());
        model.deleted_at = Set(None);
        model.apply(draft);
        model
    }

    /// Overwrite the client-owned columns and bump `updated_at`.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = Set(draft.title);
        self.body = Set(draft.body);
        self.author_full_name = Set(draft.author.full_name);
        self.author_user_name = Set(draft.author.user_name);
        self.author_email = Set(draft.author.email);
        self.updated_at = Set(chrono::Utc::now().into());
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for posts_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            body: model.body,
            author: Author::new(
                model.author_full_name,
                model.author_user_name,
                model.author_email,
            ),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            deleted_at: model.deleted_at.map(Into::into),
        }
    }
}
