mod create;
mod delete;
mod repository;
mod update;

use std::ops::Deref;

use laptop_review_shared::State;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub user_id: i64,
    pub laptop_id: i64,
    pub content: String,
    pub rating: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LaptopSummary {
    pub id: i64,
    pub name: String,
}

/// A comment with its author's public identity and the laptop it reviews.
#[derive(Debug, Clone, Serialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub user: Author,
    pub laptop: LaptopSummary,
}

#[derive(Deserialize, Validate)]
pub struct CommentInput {
    #[serde(rename = "description")]
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i64,
    #[validate(range(min = 1))]
    pub laptop_id: i64,
}

#[derive(Clone)]
pub struct Command(pub State);

impl Deref for Command {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: State) -> Self {
        Self(state)
    }

    pub async fn find_with_author(
        &self,
        id: i64,
    ) -> laptop_review_shared::Result<Option<CommentWithAuthor>> {
        repository::find_with_author(&self.read_db, id).await
    }

    /// Every live comment, or only those on `laptop_id`, oldest first.
    pub async fn list_with_author(
        &self,
        laptop_id: Option<i64>,
    ) -> laptop_review_shared::Result<Vec<CommentWithAuthor>> {
        let filter = match laptop_id {
            Some(id) => repository::Filter::Laptop(id),
            None => repository::Filter::All,
        };

        repository::list_with_author(&self.read_db, filter).await
    }
}
